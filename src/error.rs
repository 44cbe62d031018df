//! Error types for the student registry.
//!
//! Defines a unified error type that maps cleanly to HTTP responses.
//! Error bodies are plain text, matching the confirmation messages the
//! API sends on success.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Unified error type for registry operations.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RegistryError {
    /// Not-found error for a lookup by student name.
    pub fn student_name_not_found(name: &str) -> Self {
        RegistryError::NotFound(format!("Student with the name {} was not found.", name))
    }

    /// Not-found error for a lookup by student id.
    pub fn student_id_not_found(id: &str) -> Self {
        RegistryError::NotFound(format!("Student with the id {} was not found.", id))
    }
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            RegistryError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            RegistryError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            RegistryError::Internal(msg) => {
                // Log the actual error but don't expose internals
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

/// Result type alias for registry operations.
pub type RegistryResult<T> = Result<T, RegistryError>;
