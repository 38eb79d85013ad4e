//! HTTP error mapping for the webhook API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hookbox_core::CoreError;
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced to HTTP clients as JSON bodies.
///
/// Method mismatches never reach this type; the router rejects them with
/// 405 before a handler runs.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed request: unparseable JSON body or webhook ID.
    #[error("{0}")]
    BadRequest(String),

    /// No stored webhook matches the requested ID.
    #[error("{0}")]
    NotFound(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        };

        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::InvalidId { .. } => Self::BadRequest(err.to_string()),
            CoreError::NotFound { .. } => Self::NotFound(err.to_string()),
        }
    }
}
