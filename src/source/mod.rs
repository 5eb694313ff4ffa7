use crate::blog::Post;
use crate::error::QueryError;

pub mod local;
pub mod supabase;

pub use local::LocalPosts;
pub use supabase::Supabase;

/// Read side of the post store.
#[async_trait::async_trait]
pub trait PostSource: Send + Sync {
    /// The published post with the given slug, its author profile and
    /// gallery images. Issues exactly one query.
    async fn published_post(&self, slug: &str) -> Result<Option<Post>, QueryError>;
}

/// Collapses the rows matched by a slug into at most one post.
fn single(slug: &str, mut rows: Vec<Post>) -> Result<Option<Post>, QueryError> {
    match rows.len() {
        0 | 1 => Ok(rows.pop()),
        n => Err(QueryError::Ambiguous(slug.to_owned(), n)),
    }
}
