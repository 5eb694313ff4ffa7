use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

/// Failure to read from the post store. Any of these ends the request with
/// the generic error page.
#[derive(Debug, Error)]
pub enum QueryError {
    #[error("request to post store failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("post store responded with {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("post store returned malformed data: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("slug {0:?} matched {1} published posts")]
    Ambiguous(String, usize),

    #[error("could not read local post store: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error("post not found")]
    NotFound,

    #[error(transparent)]
    Query(#[from] QueryError),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound => {
                (StatusCode::NOT_FOUND, Html(crate::render::not_found::page())).into_response()
            }
            PageError::Query(err) => {
                tracing::error!("Error querying post store: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Html(crate::render::server_error::page()),
                )
                    .into_response()
            }
        }
    }
}
