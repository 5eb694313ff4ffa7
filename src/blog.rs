use serde::{Deserialize, Deserializer};

pub type PostID = String;
pub type Slug = String;

/// Image shown in place of gallery entries whose reference is empty.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";
pub const DEFAULT_IMAGE_ALT: &str = "Post image";

/// A post row as returned by the post store, with its author profile and
/// gallery images embedded.
#[derive(Debug, Clone, Deserialize)]
pub struct Post {
    pub id: PostID,
    pub title: String,
    pub description: String,
    // trusted, already sanitized html
    pub content: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub featured_image_url: Option<String>,
    #[serde(deserialize_with = "utc_timestamp")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub status: PostStatus,
    pub slug: Slug,

    #[serde(rename = "profiles")]
    pub author: AuthorProfile,
    #[serde(rename = "post_images", default, deserialize_with = "null_as_empty")]
    pub images: Vec<PostImage>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    Draft,
    Published,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthorProfile {
    pub display_name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostImage {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub alt_text: Option<String>,
    #[serde(default)]
    pub order_index: Option<i64>,
}

impl Post {
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }

    /// Long-form en-US date of `created_at`, e.g. "March 5, 2024".
    pub fn display_date(&self) -> String {
        self.created_at.format("%B %-d, %Y").to_string()
    }

    /// Orders the gallery for display. The sort is stable, so images sharing
    /// an order index keep the order the store returned them in.
    pub fn sort_images(&mut self) {
        self.images.sort_by_key(PostImage::sort_key);
    }
}

impl PostImage {
    fn sort_key(&self) -> i64 {
        self.order_index.unwrap_or(0)
    }

    pub fn src(&self) -> &str {
        self.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }

    pub fn alt(&self) -> &str {
        self.alt_text.as_deref().unwrap_or(DEFAULT_IMAGE_ALT)
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|it| !it.is_empty()))
}

/// RFC 3339 timestamps, or timestamps without an offset (a `timestamp` column
/// rather than `timestamptz`), which are taken as UTC.
fn utc_timestamp<'de, D>(deserializer: D) -> Result<chrono::DateTime<chrono::Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    value
        .parse::<chrono::DateTime<chrono::Utc>>()
        .or_else(|_| {
            value
                .parse::<chrono::NaiveDateTime>()
                .map(|naive| naive.and_utc())
        })
        .map_err(|err| serde::de::Error::custom(format!("invalid timestamp {value:?}: {err}")))
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn post(slug: &str) -> Post {
        serde_json::from_value(serde_json::json!({
            "id": format!("id-{slug}"),
            "title": "Hello, world",
            "description": "A first post",
            "content": "<p>Hi <em>there</em></p>",
            "featured_image_url": null,
            "created_at": "2024-03-05T00:00:00Z",
            "status": "published",
            "slug": slug,
            "profiles": { "display_name": "Frith", "avatar_url": null },
            "post_images": []
        }))
        .expect("fixture post should deserialize")
    }

    fn image(alt: &str, order_index: Option<i64>) -> PostImage {
        PostImage {
            image_url: Some(format!("https://cdn.test/{alt}.png")),
            alt_text: Some(alt.to_owned()),
            order_index,
        }
    }

    #[test]
    fn decodes_postgrest_row() {
        let post: Post = serde_json::from_str(
            r#"{
                "id": "5b0c1a4e-8d4f-4a57-9d1b-0c6a3f1d2e11",
                "author_id": "0b9e3c2a-1f5d-4c8e-a7b6-9d2c1e0f3a44",
                "title": "Hello",
                "description": "desc",
                "content": "<p>body</p>",
                "featured_image_url": "",
                "created_at": "2024-03-05T10:20:30.123456+00:00",
                "updated_at": "2024-03-06T00:00:00+00:00",
                "status": "published",
                "slug": "hello",
                "profiles": { "display_name": "Frith", "avatar_url": "https://cdn.test/a.png" },
                "post_images": null
            }"#,
        )
        .unwrap();

        assert!(post.is_published());
        assert_eq!(post.featured_image_url, None);
        assert_eq!(
            post.author.avatar_url.as_deref(),
            Some("https://cdn.test/a.png")
        );
        assert!(post.images.is_empty());
    }

    #[test]
    fn unknown_status_is_not_published() {
        let mut value = serde_json::json!({
            "id": "1", "title": "t", "description": "d", "content": "c",
            "created_at": "2024-03-05T00:00:00Z", "status": "archived", "slug": "s",
            "profiles": { "display_name": "n" }
        });
        let post: Post = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(post.status, PostStatus::Other);
        assert!(!post.is_published());

        value["status"] = "draft".into();
        let post: Post = serde_json::from_value(value).unwrap();
        assert_eq!(post.status, PostStatus::Draft);
    }

    #[test]
    fn timestamp_without_offset_is_utc() {
        let mut value = serde_json::json!({
            "id": "1", "title": "t", "description": "d", "content": "c",
            "created_at": "2024-03-05T10:20:30.123456", "status": "published", "slug": "s",
            "profiles": { "display_name": "n" }
        });
        let post: Post = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(post.created_at.to_rfc3339(), "2024-03-05T10:20:30.123456+00:00");
        assert_eq!(post.display_date(), "March 5, 2024");

        value["created_at"] = "2024-03-05T23:30:00-05:00".into();
        let post: Post = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(post.display_date(), "March 6, 2024");

        value["created_at"] = "yesterday".into();
        assert!(serde_json::from_value::<Post>(value).is_err());
    }

    #[test]
    fn display_date_is_long_form() {
        assert_eq!(post("a").display_date(), "March 5, 2024");

        let mut post = post("b");
        post.created_at = "2023-12-31T23:59:59Z".parse().unwrap();
        assert_eq!(post.display_date(), "December 31, 2023");
    }

    #[test]
    fn sorts_images_stably_with_missing_index_first() {
        let mut post = post("sorted");
        post.images = vec![
            image("three", Some(3)),
            image("first-one", Some(1)),
            image("missing", None),
            image("second-one", Some(1)),
        ];

        post.sort_images();

        let order = post.images.iter().map(PostImage::alt).collect::<Vec<_>>();
        assert_eq!(order, ["missing", "first-one", "second-one", "three"]);
    }

    #[test]
    fn negative_index_sorts_before_missing() {
        let mut post = post("negative");
        post.images = vec![image("missing", None), image("negative", Some(-1))];

        post.sort_images();

        assert_eq!(post.images[0].alt(), "negative");
    }

    #[test]
    fn image_fallbacks() {
        let image = PostImage {
            image_url: None,
            alt_text: None,
            order_index: None,
        };
        assert_eq!(image.src(), PLACEHOLDER_IMAGE);
        assert_eq!(image.alt(), DEFAULT_IMAGE_ALT);
    }
}
