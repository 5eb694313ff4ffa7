use crate::error::PageError;
use crate::state::SharedState;
use axum::body::Body;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use std::path::Component;
use tokio_util::io::ReaderStream;

/// Serves files from the public directory for every path no page claims,
/// e.g. `/placeholder.svg`.
pub(super) async fn get(State(state): SharedState, uri: Uri) -> Result<Response, PageError> {
    let Ok(asset) = urlencoding::decode(uri.path().trim_start_matches('/')) else {
        return Err(PageError::NotFound);
    };
    let asset = std::path::Path::new(asset.as_ref());
    let is_plain_path = asset.components().count() > 0
        && asset
            .components()
            .all(|component| matches!(component, Component::Normal(_)));
    if !is_plain_path {
        return Err(PageError::NotFound);
    }

    let asset_path = state.public_dir.join(asset);
    let file = match tokio::fs::File::open(&asset_path).await {
        Ok(it) => it,
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                tracing::error!("Error reading asset {asset_path:?}: {err}");
            }
            return Err(PageError::NotFound);
        }
    };
    if !file.metadata().await.is_ok_and(|meta| meta.is_file()) {
        return Err(PageError::NotFound);
    }

    let body = Body::from_stream(ReaderStream::new(file));

    if let Some(mime_guess) = new_mime_guess::from_path(&asset_path).first() {
        Ok((
            StatusCode::OK,
            [("Content-Type", mime_guess.to_string())],
            body,
        )
            .into_response())
    } else {
        Ok(body.into_response())
    }
}
