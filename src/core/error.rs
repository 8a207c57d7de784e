//! Typed error handling for the directory service
//!
//! Store failures are terminal for the triggering request: listing is a
//! simple idempotent read, so nothing retries automatically. The HTTP layer
//! maps every service-level failure to the fixed internal-error body without
//! exposing anything beyond the underlying message string.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::fmt;

/// The main error type for the directory service
#[derive(Debug)]
pub enum DirectoryError {
    /// Record store access failed (connection, query execution, lock poisoning)
    Store { message: String },

    /// A record failed validation at write/seed time
    Validation { id: String, message: String },

    /// Configuration loading or parsing failed
    Config { message: String },
}

impl fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectoryError::Store { message } => write!(f, "store error: {}", message),
            DirectoryError::Validation { id, message } => {
                write!(f, "record '{}' failed validation: {}", id, message)
            }
            DirectoryError::Config { message } => write!(f, "config error: {}", message),
        }
    }
}

impl std::error::Error for DirectoryError {}

/// Fixed wire shape for error responses
///
/// `success` is always `false`; `message` is a stable generic string while
/// `error` carries the underlying message.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub success: bool,
    pub message: String,
    pub error: String,
}

impl DirectoryError {
    pub fn store(message: impl Into<String>) -> Self {
        DirectoryError::Store {
            message: message.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            DirectoryError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            DirectoryError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            DirectoryError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_body(&self) -> ErrorBody {
        let message = match self {
            DirectoryError::Store { .. } => "Internal Server Error",
            DirectoryError::Validation { .. } => "Validation Failed",
            DirectoryError::Config { .. } => "Internal Server Error",
        };
        let error = match self {
            DirectoryError::Store { message } => message.clone(),
            DirectoryError::Validation { .. } | DirectoryError::Config { .. } => self.to_string(),
        };
        ErrorBody {
            success: false,
            message: message.to_string(),
            error,
        }
    }
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self.to_body())).into_response()
    }
}

impl From<anyhow::Error> for DirectoryError {
    fn from(err: anyhow::Error) -> Self {
        DirectoryError::store(err.to_string())
    }
}
