use crate::state::State;
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

mod assets;
mod page;

pub fn app(state: Arc<State>) -> axum::Router {
    let page_compression_layer = tower_http::compression::CompressionLayer::new().br(true);

    axum::Router::new()
        .merge(page::route())
        .fallback(assets::get)
        .with_state(state)
        .layer(page_compression_layer)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

/// The app behind trailing slash normalization, which has to run before
/// routing.
pub fn service(state: Arc<State>) -> NormalizePath<axum::Router> {
    NormalizePathLayer::trim_trailing_slash().layer(app(state))
}
