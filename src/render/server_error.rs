use super::document;

pub fn page() -> String {
    document(
        "Something went wrong",
        r#"<main class="min-h-screen pt-32"><div class="server-error container-custom py-12"><h1 class="text-4xl font-bold text-neutral-900 mb-4">Something went wrong</h1><p class="text-neutral-600 mb-8">Please try again later.</p><a href="/" class="text-neutral-900 underline">Back to posts</a></div></main>"#,
    )
}
