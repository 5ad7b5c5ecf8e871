// src/utils/io.rs
use std::path::PathBuf;

/// Platform data directory for the simulator (created on first use).
pub fn get_app_data_dir() -> Option<PathBuf> {
    if let Some(proj_dirs) = directories::ProjectDirs::from("com", "cyberscan", "cyberscan-sim") {
        let data_dir = proj_dirs.data_dir();

        if !data_dir.exists() {
            if let Err(e) = std::fs::create_dir_all(data_dir) {
                log::error!("Failed to create data directory: {}", e);
                return None;
            }
        }

        Some(data_dir.to_path_buf())
    } else {
        log::error!("Could not determine data directory");
        None
    }
}

/// Default activity log directory, falling back to `./logs`.
pub fn default_log_dir() -> PathBuf {
    get_app_data_dir()
        .map(|dir| dir.join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}
