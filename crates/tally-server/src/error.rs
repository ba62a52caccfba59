use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use tally_engine::ScoreError;
use tally_store::StoreError;
use tally_types::ValidationError;

/// Process-level server errors (startup, shutdown).
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type ServerResult<T> = Result<T, ServerError>;

/// Per-request API errors, mapped to HTTP status codes.
///
/// Client errors carry a plain-text message naming the failed constraint.
/// Internal errors are logged and answered with a generic message.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body is not a decodable receipt document.
    #[error("invalid receipt body: {0}")]
    MalformedBody(String),

    /// The receipt decoded but failed a validation constraint.
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// The path id is not a syntactically valid v4 UUID.
    #[error("id {0:?} is not a valid receipt id")]
    InvalidId(String),

    /// The id is well-formed but nothing is stored under it.
    #[error("no receipt found for that id")]
    UnknownId,

    /// Storage backend failure.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A stored receipt no longer scores cleanly. This is a defect, not a
    /// client error.
    #[error(transparent)]
    Score(#[from] ScoreError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::MalformedBody(_) | Self::Validation(_) | Self::InvalidId(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::UnknownId => StatusCode::NOT_FOUND,
            Self::Store(_) | Self::Score(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "internal error while handling request");
            "internal server error".to_string()
        } else {
            self.to_string()
        };
        (status, body).into_response()
    }
}
