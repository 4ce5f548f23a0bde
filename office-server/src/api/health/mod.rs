//! Health check routes
//!
//! # Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /health | GET | Simple health check |
//! | /health/detailed | GET | Health check with component status |

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::time::SystemTime;

use crate::core::ServerState;

/// Health check routes - public, no auth
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/detailed", get(detailed_health))
}

/// Simple health check response
#[derive(Serialize)]
pub struct HealthResponse {
    /// Status (healthy | degraded)
    status: &'static str,
    version: &'static str,
}

/// Detailed health check response
#[derive(Serialize)]
pub struct DetailedHealthResponse {
    status: &'static str,
    version: &'static str,
    /// Uptime in seconds
    uptime_seconds: u64,
    checks: HealthChecks,
}

#[derive(Serialize)]
pub struct HealthChecks {
    database: CheckResult,
}

/// Single component check result
#[derive(Serialize)]
pub struct CheckResult {
    /// Status (ok | error)
    status: &'static str,
    /// Latency in milliseconds
    latency_ms: Option<u64>,
    message: Option<String>,
}

impl CheckResult {
    fn ok_with_latency(latency_ms: u64) -> Self {
        Self {
            status: "ok",
            latency_ms: Some(latency_ms),
            message: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            latency_ms: None,
            message: Some(message.into()),
        }
    }
}

// Server start time (lazily initialized)
static START_TIME: std::sync::OnceLock<SystemTime> = std::sync::OnceLock::new();

fn get_uptime_seconds() -> u64 {
    let start = START_TIME.get_or_init(SystemTime::now);
    SystemTime::now()
        .duration_since(*start)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Basic health check
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Detailed health check with component status
pub async fn detailed_health(State(state): State<ServerState>) -> Json<DetailedHealthResponse> {
    // Verify the database connection with a trivial query
    let db_start = std::time::Instant::now();
    let db_check = match sqlx::query_scalar::<_, i64>("SELECT 1")
        .fetch_one(&state.pool)
        .await
    {
        Ok(_) => CheckResult::ok_with_latency(db_start.elapsed().as_millis() as u64),
        Err(e) => CheckResult::error(format!("Database error: {}", e)),
    };

    let all_ok = db_check.status == "ok";

    Json(DetailedHealthResponse {
        status: if all_ok { "healthy" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: get_uptime_seconds(),
        checks: HealthChecks { database: db_check },
    })
}
