use super::PostSource;
use crate::blog::Post;
use crate::error::QueryError;

const POSTS_TABLE: &str = "blog_posts";
const POST_DETAIL_COLUMNS: &str =
    "*,profiles(display_name,avatar_url),post_images(image_url,alt_text,order_index)";
/// Longest prefix of an error response body kept for the log.
const ERROR_BODY_LIMIT: usize = 512;

/// Reads posts through the PostgREST interface of a Supabase project.
#[derive(Debug, Clone)]
pub struct Supabase {
    http: reqwest::Client,
    url: String,
    anon_key: String,
}

impl Supabase {
    pub fn new(
        url: &str,
        anon_key: String,
        timeout: std::time::Duration,
    ) -> Result<Supabase, QueryError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Supabase {
            http,
            url: url.trim_end_matches('/').to_owned(),
            anon_key,
        })
    }

    fn published_post_url(&self, slug: &str) -> String {
        format!(
            "{}/rest/v1/{POSTS_TABLE}?select={}&slug=eq.{}&status=eq.published",
            self.url,
            urlencoding::encode(POST_DETAIL_COLUMNS),
            urlencoding::encode(slug),
        )
    }
}

#[async_trait::async_trait]
impl PostSource for Supabase {
    #[tracing::instrument(skip(self))]
    async fn published_post(&self, slug: &str) -> Result<Option<Post>, QueryError> {
        let response = self
            .http
            .get(self.published_post_url(slug))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = error_body_prefix(response).await;
            return Err(QueryError::Status { status, body });
        }

        let rows = serde_json::from_slice::<Vec<Post>>(&response.bytes().await?)?;
        tracing::debug!(rows = rows.len(), "post store answered");

        super::single(slug, rows)
    }
}

async fn error_body_prefix(mut response: reqwest::Response) -> String {
    let mut body = Vec::new();
    while body.len() < ERROR_BODY_LIMIT {
        match response.chunk().await {
            Ok(Some(chunk)) => body.extend_from_slice(&chunk),
            Ok(None) | Err(_) => break,
        }
    }
    body.truncate(ERROR_BODY_LIMIT);

    String::from_utf8_lossy(&body).into_owned()
}
