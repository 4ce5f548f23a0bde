//! Data models
//!
//! Shared between office-server and the admin frontend (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod business_unit;
pub mod closeout;

// Re-exports
pub use business_unit::*;
pub use closeout::*;
