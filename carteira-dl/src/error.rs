//! Error types for carteira-dl

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::loader::LoadError;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Upstream verification service failure (502)
    #[error("Upstream service error: {0}")]
    Upstream(String),

    /// Document store unreachable (503); retryable
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Generic error
    #[error(transparent)]
    Other(#[from] anyhow::Error),

    /// carteira-common error
    #[error("Common error: {0}")]
    Common(#[from] carteira_common::Error),
}

impl From<LoadError> for ApiError {
    fn from(err: LoadError) -> Self {
        match err {
            LoadError::NotFoundUpstream(id) => {
                ApiError::NotFound(format!("Document {} not found in the source system", id))
            }
            LoadError::StoreUnavailable(detail) => ApiError::Unavailable(detail),
            // Upstream diagnostics stay in the logs and the health
            // endpoint; end users get a generic message.
            LoadError::AuthFailure(_) | LoadError::FetchFailure(_) => ApiError::Upstream(
                "The verification service could not be reached. Please try again later."
                    .to_string(),
            ),
            LoadError::InconsistentCache(id) => {
                ApiError::Internal(format!("Cache inconsistency for document {}", id))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::Upstream(msg) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", msg),
            ApiError::Unavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, "UNAVAILABLE", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
            ApiError::Other(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                err.to_string(),
            ),
            ApiError::Common(ref err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "COMMON_ERROR",
                err.to_string(),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
