use super::{document, escape};
use crate::blog::Post;
use std::fmt::Write;

const BACK_ARROW: &str = r#"<svg class="w-4 h-4" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true"><path d="m12 19-7-7 7-7"/><path d="M19 12H5"/></svg>"#;

/// Renders the detail page of a post. The gallery is rendered in the order
/// `post.images` is in, see [`Post::sort_images`].
pub fn page(post: &Post) -> String {
    let mut body = String::new();

    body.push_str(r#"<main class="min-h-screen pt-32"><article class="container-custom py-12">"#);
    let _ = write!(
        body,
        r#"<a href="/" class="post-back flex items-center gap-2 text-neutral-600 hover:text-neutral-900 mb-8 transition-colors">{BACK_ARROW}<span>Back to posts</span></a>"#
    );

    write_heading(&mut body, post);
    write_featured_image(&mut body, post);

    // content is trusted html from the authoring side and goes in unescaped
    let _ = write!(
        body,
        r#"<div class="post-content max-w-3xl prose prose-lg prose-neutral mb-12"><div class="text-neutral-700 leading-relaxed whitespace-pre-wrap">{}</div></div>"#,
        post.content
    );

    write_gallery(&mut body, post);
    body.push_str("</article></main>");

    document(&post.title, &body)
}

fn write_heading(body: &mut String, post: &Post) {
    let author = &post.author;

    let _ = write!(
        body,
        r#"<div class="post-heading max-w-3xl mb-12"><h1 class="text-5xl lg:text-6xl font-bold text-neutral-900 mb-6">{}</h1><p class="text-xl text-neutral-600 mb-8">{}</p>"#,
        escape(&post.title),
        escape(&post.description),
    );

    body.push_str(r#"<div class="post-author flex items-center gap-4 pb-8 border-b border-neutral-200"><div class="w-12 h-12 rounded-full bg-neutral-200 overflow-hidden">"#);
    if let Some(avatar_url) = &author.avatar_url {
        let _ = write!(
            body,
            r#"<img class="post-avatar object-cover" src="{}" alt="{}" width="48" height="48">"#,
            escape(avatar_url),
            escape(&author.display_name),
        );
    }
    let _ = write!(
        body,
        r#"</div><div><p class="font-medium text-neutral-900">{}</p><p class="text-sm text-neutral-500"><time datetime="{}">{}</time></p></div></div></div>"#,
        escape(&author.display_name),
        post.created_at.to_rfc3339(),
        post.display_date(),
    );
}

fn write_featured_image(body: &mut String, post: &Post) {
    let Some(featured_image_url) = &post.featured_image_url else {
        return;
    };

    let _ = write!(
        body,
        r#"<div class="post-featured-image relative w-full h-96 lg:h-[500px] rounded-lg overflow-hidden mb-12 bg-neutral-100"><img class="absolute inset-0 w-full h-full object-cover" src="{}" alt="{}"></div>"#,
        escape(featured_image_url),
        escape(&post.title),
    );
}

fn write_gallery(body: &mut String, post: &Post) {
    if post.images.is_empty() {
        return;
    }

    body.push_str(r#"<div class="post-gallery grid grid-cols-1 md:grid-cols-2 gap-8 mb-12">"#);
    for image in &post.images {
        let _ = write!(
            body,
            r#"<div class="relative w-full h-80 rounded-lg overflow-hidden bg-neutral-100"><img class="absolute inset-0 w-full h-full object-cover" src="{}" alt="{}" loading="lazy"></div>"#,
            escape(image.src()),
            escape(image.alt()),
        );
    }
    body.push_str("</div>");
}
