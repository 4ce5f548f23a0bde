use sqlx::SqlitePool;

use crate::core::Config;
use crate::db::DbService;
use crate::utils::AppError;

/// Server state - shared handles for all request handlers
///
/// Cheap to clone: the pool is internally reference-counted.
///
/// | Field | Type | Meaning |
/// |-------|------|---------|
/// | config | Config | Settings (immutable after startup) |
/// | pool | SqlitePool | SQLite connection pool |
#[derive(Clone, Debug)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Database connection pool
    pub pool: SqlitePool,
}

impl ServerState {
    /// Build state from existing parts (used by tests)
    pub fn new(config: Config, pool: SqlitePool) -> Self {
        Self { config, pool }
    }

    /// Initialize server state
    ///
    /// Ensures the work directory exists, opens the database and runs
    /// migrations.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_path = config.database_path();
        if let Some(dir) = db_path.parent() {
            std::fs::create_dir_all(dir)
                .map_err(|e| AppError::internal(format!("Failed to create work dir: {e}")))?;
        }

        let db_service = DbService::new(&db_path.to_string_lossy()).await?;

        Ok(Self::new(config.clone(), db_service.pool))
    }
}
