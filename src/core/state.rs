// src/core/state.rs
use chrono::{DateTime, Utc};
use crate::core::config::Config;
use crate::logging::{self, Logger};

/// Shared state handed to every request handler.
pub struct AppState {
    pub config: Config,
    pub logger: Logger,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: Config) -> logging::Result<Self> {
        let logger = Logger::with_limits(
            config.log_dir.clone(),
            config.max_log_size_bytes(),
            config.max_log_files,
        )?;

        Ok(Self {
            config,
            logger,
            started_at: Utc::now(),
        })
    }

    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds()
    }
}
