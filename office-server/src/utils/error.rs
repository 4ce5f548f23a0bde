//! Unified error handling
//!
//! Application-level error type and response envelope:
//! - [`AppError`] - application error enum
//! - [`AppResponse`] - API response structure
//!
//! # Error codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | E0000 | Success |
//! | E0002 | Validation failed |
//! | E0003 | Resource not found |
//! | E0004 | Conflict |
//! | E0005 | Business rule violation |
//! | E9001 | Internal error |
//! | E9002 | Database error |
//!
//! # Usage
//!
//! ```ignore
//! // Return an error
//! Err(AppError::not_found("Report not found"))
//!
//! // Return a success envelope
//! Ok(ok(data))
//! ```

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;

/// Unified API response envelope
///
/// ```json
/// {
///   "code": "E0000",
///   "message": "Success",
///   "data": { ... }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AppResponse<T> {
    /// Error code (E0000 means success)
    pub code: String,
    /// Message
    pub message: String,
    /// Response payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Business logic errors (4xx) ==========
    #[error("Resource not found: {0}")]
    /// Resource missing (404)
    NotFound(String),

    #[error("Conflict: {0}")]
    /// Duplicate resource or stale version (409)
    Conflict(String),

    #[error("Validation failed: {0}")]
    /// Bad input (400)
    Validation(String),

    #[error("Business rule violation: {0}")]
    /// Input valid in isolation but breaks a domain rule (422)
    BusinessRule(String),

    // ========== System errors (5xx) ==========
    #[error("Database error: {0}")]
    /// Storage failure (500)
    Database(String),

    #[error("Internal server error: {0}")]
    /// Anything else (500)
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg.as_str()),
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "E0004", msg.as_str()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "E0002", msg.as_str()),
            AppError::BusinessRule(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "E0005", msg.as_str())
            }
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "E9002", "Database error")
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9001",
                    "Internal server error",
                )
            }
        };

        let body = Json(AppResponse::<()> {
            code: code.to_string(),
            message: message.to_string(),
            data: None,
        });

        (status, body).into_response()
    }
}

// ========== Helper constructors ==========

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn business_rule(msg: impl Into<String>) -> Self {
        Self::BusinessRule(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) | RepoError::Conflict(msg) => AppError::Conflict(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
            // A date before the unit's fiscal anchor is well-formed but
            // breaks the calendar rule, hence 422 not 400
            RepoError::OutOfRange(msg) => AppError::BusinessRule(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

/// Result alias for handlers
pub type AppResult<T> = Result<T, AppError>;

// ========== Helper functions ==========

/// Create a successful response
pub fn ok<T: Serialize>(data: T) -> Json<AppResponse<T>> {
    Json(AppResponse {
        code: "E0000".to_string(),
        message: "Success".to_string(),
        data: Some(data),
    })
}
