use crate::blog::Slug;
use crate::error::PageError;
use crate::state::SharedState;
use axum::extract::{Path, State};
use axum::response::Html;

pub(super) async fn get(
    State(state): SharedState,
    Path(slug): Path<Slug>,
) -> Result<Html<String>, PageError> {
    let Some(mut post) = state.posts.published_post(&slug).await? else {
        tracing::debug!("No published post with slug {slug:?}");
        return Err(PageError::NotFound);
    };
    tracing::debug!(post_id = %post.id, "Rendering post {slug:?}");

    post.sort_images();

    Ok(Html(crate::render::post::page(&post)))
}
