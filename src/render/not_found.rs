use super::document;

pub fn page() -> String {
    document(
        "Not found",
        r#"<main class="min-h-screen pt-32"><div class="not-found container-custom py-12"><h1 class="text-4xl font-bold text-neutral-900 mb-4">404</h1><p class="text-neutral-600 mb-8">This page could not be found.</p><a href="/" class="text-neutral-900 underline">Back to posts</a></div></main>"#,
    )
}
