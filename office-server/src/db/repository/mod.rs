//! Repository Module
//!
//! Free-function CRUD over the SQLite pool, one module per table.

pub mod business_unit;
pub mod closeout_report;

use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    /// Optimistic-concurrency failure: the caller's version token is stale
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Date precedes the business unit's fiscal anchor
    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;
