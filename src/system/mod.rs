// src/system/mod.rs
use chrono::{DateTime, Utc};
use serde::{Serialize, Deserialize};
use sysinfo::{System, SystemExt};
use utoipa::ToSchema;
use crate::core::AppState;
use crate::osint::HashStrategy;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SystemStatus {
    // Application info
    pub service: String,
    pub version: String,
    pub started_at: DateTime<Utc>,
    pub uptime_seconds: i64,
    /// Uptime for display, e.g. "2h 5m"
    pub uptime: String,
    pub fingerprint_strategy: HashStrategy,

    // Host info
    pub os_info: String,
    pub total_memory_bytes: u64,
    pub used_memory_bytes: u64,

    /// Simulation endpoints served by this instance
    pub endpoints: Vec<String>,
}

pub struct SystemManager {
    system: System,
}

impl SystemManager {
    pub fn new() -> Self {
        let mut system = System::new();
        system.refresh_memory();

        Self { system }
    }

    pub fn get_system_status(&mut self, state: &AppState, endpoints: &[&str]) -> SystemStatus {
        self.system.refresh_memory();

        let os_info = format!(
            "{} {}",
            self.system.name().unwrap_or_else(|| "Unknown".to_string()),
            self.system.os_version().unwrap_or_default()
        )
        .trim()
        .to_string();

        let uptime_seconds = state.uptime_seconds();

        SystemStatus {
            service: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            started_at: state.started_at,
            uptime_seconds,
            uptime: crate::utils::format_uptime(uptime_seconds),
            fingerprint_strategy: state.config.strategy,
            os_info,
            total_memory_bytes: self.system.total_memory(),
            used_memory_bytes: self.system.used_memory(),
            endpoints: endpoints.iter().map(|e| e.to_string()).collect(),
        }
    }
}

impl Default for SystemManager {
    fn default() -> Self {
        Self::new()
    }
}
