use chrono_tz::Tz;

/// Server configuration - all settings for the back-office node
///
/// # Environment variables
///
/// Every setting can be overridden through an environment variable:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | /var/lib/office | Working directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | TIMEZONE | America/New_York | Business timezone |
/// | LOG_LEVEL | info | Tracing level filter |
/// | LOG_TO_FILE | false | Daily-rolling file output under WORK_DIR/logs |
/// | ENVIRONMENT | development | development \| staging \| production |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/office HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory for database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Business timezone (date validation uses this, not UTC)
    pub timezone: Tz,
    /// Tracing level filter
    pub log_level: String,
    /// Write logs to WORK_DIR/logs with daily rolling
    pub log_to_file: bool,
    /// Runtime environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Missing variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/office".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            timezone: std::env::var("TIMEZONE")
                .ok()
                .and_then(|tz| tz.parse().ok())
                .unwrap_or(chrono_tz::America::New_York),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_to_file: std::env::var("LOG_TO_FILE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override work_dir and port, commonly used in tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Path of the SQLite database file
    pub fn database_path(&self) -> std::path::PathBuf {
        std::path::Path::new(&self.work_dir)
            .join("database")
            .join("office.db")
    }

    /// Log directory, if file logging is enabled
    pub fn log_dir(&self) -> Option<String> {
        if self.log_to_file {
            Some(
                std::path::Path::new(&self.work_dir)
                    .join("logs")
                    .to_string_lossy()
                    .into_owned(),
            )
        } else {
            None
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
