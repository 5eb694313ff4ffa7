use super::PostSource;
use crate::blog::Post;
use crate::error::QueryError;

/// Posts read once from a JSON file shaped like the post store's rows. Used
/// to run the site without a Supabase project.
#[derive(Debug, Default)]
pub struct LocalPosts {
    posts: Vec<Post>,
}

impl LocalPosts {
    pub fn from_posts(posts: Vec<Post>) -> LocalPosts {
        LocalPosts { posts }
    }

    pub async fn load(path: &std::path::Path) -> Result<LocalPosts, QueryError> {
        let file = tokio::fs::read(path).await?;
        let posts = serde_json::from_slice::<Vec<Post>>(&file)?;

        tracing::info!("Loaded {} posts from {path:?}", posts.len());
        Ok(LocalPosts::from_posts(posts))
    }
}

#[async_trait::async_trait]
impl PostSource for LocalPosts {
    async fn published_post(&self, slug: &str) -> Result<Option<Post>, QueryError> {
        let rows = self
            .posts
            .iter()
            .filter(|post| post.slug == slug && post.is_published())
            .cloned()
            .collect();

        super::single(slug, rows)
    }
}
