//! Error types for the weather lookup server
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::cache::CacheError;

// == Field Error ==
/// A single request-validation failure, tied to the offending field.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    /// The request field that failed validation
    pub field: String,
    /// Human-readable description of the failure
    pub message: String,
}

impl FieldError {
    /// Creates a new FieldError
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

// == Api Error Enum ==
/// Unified error type for the weather lookup server.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request validation failed; carries per-field errors
    #[error("request validation failed")]
    Validation(Vec<FieldError>),

    /// An upstream provider answered with something we could not validate
    #[error("Unexpected response from {0} provider")]
    UpstreamUnexpected(&'static str),

    /// An upstream request could not be completed
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<CacheError> for ApiError {
    fn from(err: CacheError) -> Self {
        // InvalidTtl is a programming error in a call site, not a runtime
        // condition; surface it as a 500 rather than suppressing it
        Self::Internal(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, json!({ "errors": errors }))
            }
            err @ ApiError::UpstreamUnexpected(_) => (
                StatusCode::FAILED_DEPENDENCY,
                json!({ "error": err.to_string() }),
            ),
            err @ ApiError::Upstream(_) => {
                (StatusCode::BAD_GATEWAY, json!({ "error": err.to_string() }))
            }
            err @ ApiError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": err.to_string() }),
            ),
        };

        (status, Json(body)).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the server.
pub type Result<T> = std::result::Result<T, ApiError>;
