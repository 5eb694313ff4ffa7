use std::borrow::Cow;
use std::fmt::Write;

pub mod not_found;
pub mod post;
pub mod server_error;

/// Escapes text for use in element content and double-quoted attributes.
pub fn escape(s: &str) -> Cow<'_, str> {
    if !s.contains(['<', '>', '&', '"']) {
        return Cow::Borrowed(s);
    }

    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

/// Wraps a page body in the html shell and the site header and footer.
pub fn document(title: &str, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 1024);

    let _ = write!(
        html,
        r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"><meta name="viewport" content="width=device-width, initial-scale=1"><title>{}</title></head><body>"#,
        escape(title)
    );
    html.push_str(HEADER);
    html.push_str(body);
    html.push_str(FOOTER);
    html.push_str("</body></html>");

    html
}

const HEADER: &str = concat!(
    r#"<header class="site-header fixed top-0 inset-x-0 z-50 bg-white/80 backdrop-blur border-b border-neutral-200">"#,
    r#"<nav class="container-custom flex items-center justify-between h-20">"#,
    r#"<a href="/" class="text-xl font-bold text-neutral-900">Blog</a>"#,
    r#"</nav></header>"#,
);

const FOOTER: &str = concat!(
    r#"<footer class="site-footer border-t border-neutral-200 py-12">"#,
    r#"<div class="container-custom text-sm text-neutral-500">"#,
    r#"<a href="/" class="hover:text-neutral-900">Back to all posts</a>"#,
    r#"</div></footer>"#,
);
