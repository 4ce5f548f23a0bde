//! API routing module
//!
//! # Structure
//!
//! - [`health`] - health checks
//! - [`business_units`] - business unit management
//! - [`closeout_reports`] - closeout report entry and lookup

pub mod business_units;
pub mod closeout_reports;
pub mod health;

use axum::Router;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// Top-level router, merged from the per-resource routers
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(business_units::router())
        .merge(closeout_reports::router())
}
