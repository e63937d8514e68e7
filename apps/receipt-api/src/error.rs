//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Receipt API                            │
//! │                                                                         │
//! │  Handler: Result<T, ApiError>                                          │
//! │         │                                                               │
//! │         ├── JSON rejection ──────────────► 400 ValidationError         │
//! │         ├── ValidationError (core) ──────► 400 ValidationError         │
//! │         ├── unknown id ──────────────────► 404 NotFound                │
//! │         ├── ScoreError (core) ───────────► 422 Unscorable              │
//! │         └── StoreError (store) ──────────► 500 Internal                │
//! │                                                                         │
//! │  Wire body for every failure: { "message": "..." }                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use receipt_core::{ScoreError, ValidationError};
use receipt_store::StoreError;
use serde::Serialize;

/// Message returned for an unknown receipt id.
pub const RECEIPT_NOT_FOUND: &str = "Receipt not found";

/// Message returned for any storage failure.
pub const STORE_UNAVAILABLE: &str = "Receipt storage is unavailable";

/// API error returned from handlers.
///
/// ## Serialization
/// Only the message reaches the client:
/// ```json
/// { "message": "Receipt not found" }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Machine-readable category, mapped to the HTTP status
    #[serde(skip)]
    pub code: ErrorCode,

    /// Human-readable error message
    pub message: String,
}

/// Error categories for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Malformed or invalid submission (400)
    ValidationError,

    /// Receipt id was never issued (404)
    NotFound,

    /// Stored receipt cannot be scored (422)
    Unscorable,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status for this category.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::Unscorable => StatusCode::UNPROCESSABLE_ENTITY,
            ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates the receipt not found error.
    pub fn not_found() -> Self {
        ApiError::new(ErrorCode::NotFound, RECEIPT_NOT_FOUND)
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<ScoreError> for ApiError {
    fn from(err: ScoreError) -> Self {
        ApiError::new(ErrorCode::Unscorable, err.to_string())
    }
}

/// Converts store errors to API errors.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        // Log the actual error but return a generic message
        tracing::error!("Receipt store failed: {}", err);
        ApiError::internal(STORE_UNAVAILABLE)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

// =============================================================================
// Server Errors
// =============================================================================

/// Failures starting or running the HTTP server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] io::Error),
}
