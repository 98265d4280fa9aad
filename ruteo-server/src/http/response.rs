//! Failure responses for the HTTP endpoint.

use axum::Json;
use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ruteo_core::ValidationError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Body of a failed request: `{"detail": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Description of the failure.
    pub detail: String,
}

/// Failures that abort a request.
///
/// Every variant maps to `500 Internal Server Error`, validation failures
/// included, to keep the status codes existing clients already handle.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The body could not be read, e.g. it exceeded the size limit.
    #[error("failed to read request body: {0}")]
    Body(#[from] BytesRejection),
    /// The request body was malformed or inconsistent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The blocking solve task panicked or was cancelled.
    #[error("solver task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = self.to_string();
        match &self {
            Self::Body(_) | Self::Validation(_) => log::info!("Rejected route request: {detail}"),
            Self::Task(_) => log::error!("Route request failed: {detail}"),
        }
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { detail })).into_response()
    }
}
