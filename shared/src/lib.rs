//! Shared types for the back-office suite
//!
//! Data models and small utilities used by the office server and,
//! over the API, by the admin frontend.

pub mod models;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};
