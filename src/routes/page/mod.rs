use crate::state::NestedRouter;
use axum::routing::get;

mod post;

pub fn route() -> NestedRouter {
    axum::Router::new().route("/blog/:slug", get(post::get))
}
