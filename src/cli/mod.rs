// src/cli/mod.rs
use clap::Parser;
use crate::core::Config;
use crate::osint::HashStrategy;

pub mod commands;
pub mod handlers;
pub mod report;

pub use commands::CliCommand;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print reports as pretty JSON instead of a summary
    #[arg(long, global = true)]
    pub json: bool,

    /// API server port (overrides WEB_PORT)
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// API server bind address (overrides WEB_ADDRESS)
    #[arg(long, global = true)]
    pub address: Option<String>,

    /// Fingerprint strategy: legacy or fnv1a (overrides FINGERPRINT_STRATEGY)
    #[arg(long, global = true)]
    pub strategy: Option<HashStrategy>,

    /// Command to execute (defaults to serve)
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

impl Args {
    /// Flags given on the command line win over the environment.
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(port) = self.port {
            config.web_port = port;
        }

        if let Some(address) = &self.address {
            config.web_address = address.clone();
        }

        if let Some(strategy) = self.strategy {
            config.strategy = strategy;
        }
    }
}
