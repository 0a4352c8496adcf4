//! Unified Error Handling
//!
//! Application-level error type for the HTTP surface.
//!
//! | Variant | Status | Body |
//! |---------|--------|------|
//! | `Validation` | 400 | the validation message |
//! | `Storage` | 500 | the failed step, never the driver detail |
//! | `Timeout` | 500 | `request timed out` |
//! | `Internal` | 500 | `internal server error` |
//!
//! Bodies are plain text. Server errors are logged here, once, with their detail.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

use crate::db::repository::RepoError;

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request rejected before any side effect (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A storage step failed (500)
    #[error("{context}: {source}")]
    Storage {
        context: &'static str,
        #[source]
        source: RepoError,
    },

    /// The operation exceeded its time budget (500)
    #[error("{operation} timed out")]
    Timeout { operation: &'static str },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),

            AppError::Storage { context, source } => {
                error!(target: "database", error = %source, step = %context, "Storage error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, context.to_string())
            }

            AppError::Timeout { operation } => {
                warn!(operation = %operation, "Operation exceeded its time budget");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "request timed out".to_string(),
                )
            }

            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, message).into_response()
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Wrap a repository error with the step that failed
    pub fn storage(context: &'static str, source: RepoError) -> Self {
        Self::Storage { context, source }
    }

    pub fn timeout(operation: &'static str) -> Self {
        Self::Timeout { operation }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Status code this error renders with
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
