//! Office Server - restaurant back-office administration node
//!
//! # Module structure
//!
//! ```text
//! office-server/src/
//! ├── core/       # Config, state, HTTP server
//! ├── closeout/   # Fiscal calendar, aggregation, gratuity pooling
//! ├── api/        # HTTP routes and handlers
//! ├── db/         # Database layer (SQLite + repositories)
//! └── utils/      # Errors, logging, time helpers
//! ```
//!
//! The computational heart is the [`closeout`] module: it derives
//! fiscal week labels from each business unit's anchor date, sums
//! per-employee line contributions into report totals, and splits the
//! pooled gratuities across employees in proportion to their points.
//! Everything else is record editing over the database layer.

pub mod api;
pub mod closeout;
pub mod core;
pub mod db;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   ____  ______  _
  / __ \/ __/ _\(_)______
 / / / / /_/ /_/ / ___/ _ \
/ /_/ / __/ __/ / /__/  __/
\____/_/ /_/ /_/\___/\___/
    "#
    );
}
