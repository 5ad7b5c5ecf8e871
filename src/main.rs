use anyhow::Context;
use clap::Parser;
use std::path::Path;

mod api;
mod cli;
mod core;
mod logging;
mod osint;
mod scan;
mod system;
mod utils;

use crate::cli::{Args, CliCommand};
use crate::core::{AppState, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    if Path::new(".env").exists() {
        dotenvy::dotenv().ok();
    }

    let args = Args::parse();

    let mut config = Config::load();
    args.apply_overrides(&mut config);

    // Diagnostics go to stderr so --json output stays clean
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .format_timestamp_secs()
        .format_module_path(true)
        .parse_default_env()
        .init();

    for warning in &config.warnings {
        log::warn!("{}", warning);
    }
    log::debug!("Loaded config: {:?}", config);

    match &args.command {
        None | Some(CliCommand::Serve) => serve(config).await,
        Some(command) => cli::handlers::handle_command(command, config.strategy, args.json),
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    log::info!("🔎 Starting CyberScan simulator (fingerprint strategy: {})", config.strategy);

    let state = AppState::new(config).context("Failed to open the activity log")?;
    log::info!("Activity log directory: {}", state.logger.log_dir().display());

    api::start_server(state).await.context("API server failed")?;

    log::info!("✅ CyberScan shutdown complete.");
    Ok(())
}
