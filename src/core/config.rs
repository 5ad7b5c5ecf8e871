// src/core/config.rs
use std::env;
use std::path::PathBuf;
use log::LevelFilter;
use crate::osint::HashStrategy;

const BYTES_PER_MB: u64 = 1024 * 1024;

// Configuration for the simulator service
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,
    pub workers: Option<usize>,
    pub cors_max_age: usize,

    // Simulation
    pub strategy: HashStrategy,

    // Logging
    pub log_level: LevelFilter,
    pub log_dir: PathBuf,
    pub max_log_size_mb: u64,
    pub max_log_files: usize,

    /// Values that were set but could not be used
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "127.0.0.1".to_string(),
            web_port: 5000,
            workers: None,
            cors_max_age: 3600,

            // Simulation
            strategy: HashStrategy::Legacy,

            // Logging
            log_level: LevelFilter::Info,
            log_dir: PathBuf::from("logs"),
            max_log_size_mb: 10,
            max_log_files: 5,

            warnings: Vec::new(),
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        Self::from_lookup(|key| env::var(key).ok(), crate::utils::default_log_dir)
    }

    /// Build a config from any key lookup. Unset or unusable keys keep their
    /// defaults; unusable ones are noted in `warnings`. `default_log_dir` is
    /// only called when `LOG_DIR` is unset.
    pub fn from_lookup<F, D>(lookup: F, default_log_dir: D) -> Self
    where
        F: Fn(&str) -> Option<String>,
        D: FnOnce() -> PathBuf,
    {
        let mut config = Config::default();

        // Web Interface
        if let Some(address) = lookup("WEB_ADDRESS") {
            config.web_address = address;
        }

        if let Some(val) = lookup("WEB_PORT") {
            match val.parse() {
                Ok(port) => config.web_port = port,
                Err(_) => config.warnings.push(format!("Invalid WEB_PORT '{}', using {}", val, config.web_port)),
            }
        }

        if let Some(val) = lookup("WORKERS") {
            match val.parse::<usize>() {
                Ok(workers) if workers > 0 => config.workers = Some(workers),
                _ => config.warnings.push(format!("Invalid WORKERS '{}', using the actix default", val)),
            }
        }

        if let Some(val) = lookup("CORS_MAX_AGE") {
            match val.parse() {
                Ok(max_age) => config.cors_max_age = max_age,
                Err(_) => config.warnings.push(format!("Invalid CORS_MAX_AGE '{}', using {}", val, config.cors_max_age)),
            }
        }

        // Simulation
        if let Some(val) = lookup("FINGERPRINT_STRATEGY") {
            match val.parse() {
                Ok(strategy) => config.strategy = strategy,
                Err(_) => config.warnings.push(format!("Unknown fingerprint strategy '{}', using {}", val, config.strategy)),
            }
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            match parse_level(&level) {
                Some(filter) => config.log_level = filter,
                None => config.warnings.push(format!("Unknown log level '{}', using {}", level, config.log_level)),
            }
        }

        config.log_dir = match lookup("LOG_DIR") {
            Some(dir) => PathBuf::from(dir),
            None => default_log_dir(),
        };

        if let Some(val) = lookup("MAX_LOG_SIZE_MB") {
            match val.parse::<u64>() {
                Ok(size) if size > 0 && size.checked_mul(BYTES_PER_MB).is_some() => {
                    config.max_log_size_mb = size
                }
                _ => config.warnings.push(format!("Invalid MAX_LOG_SIZE_MB '{}', using {}", val, config.max_log_size_mb)),
            }
        }

        if let Some(val) = lookup("MAX_LOG_FILES") {
            match val.parse::<usize>() {
                Ok(files) if files > 0 => config.max_log_files = files,
                _ => config.warnings.push(format!("Invalid MAX_LOG_FILES '{}', using {}", val, config.max_log_files)),
            }
        }

        config
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.web_address.clone(), self.web_port)
    }

    pub fn max_log_size_bytes(&self) -> u64 {
        self.max_log_size_mb.saturating_mul(BYTES_PER_MB)
    }
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.to_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}
