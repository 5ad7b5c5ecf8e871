// src/cli/commands.rs
use clap::Subcommand;

#[derive(Subcommand, Debug)]
pub enum CliCommand {
    /// Start the HTTP API
    Serve,

    /// Check an email address against the simulated breach feed
    Darkweb {
        /// Email address
        #[arg(required = true)]
        email: String,
    },

    /// Generate DNS records for a domain
    Dns {
        /// Domain name
        #[arg(required = true)]
        domain: String,
    },

    /// Generate a WHOIS record for a domain
    Whois {
        /// Domain name
        #[arg(required = true)]
        domain: String,
    },

    /// Harvest likely corporate email addresses for a domain
    Email {
        /// Domain name
        #[arg(required = true)]
        domain: String,
    },

    /// Find profiles for a username across platforms
    Social {
        /// Username
        #[arg(required = true)]
        username: String,
    },

    /// Extract simulated metadata for a file
    Metadata {
        /// File name
        #[arg(required = true)]
        file_name: String,

        /// File type (defaults to the file name's extension)
        #[arg(long)]
        file_type: Option<String>,
    },

    /// Check a URL against the built-in reputation lists
    Url {
        /// URL or bare domain
        #[arg(required = true)]
        url: String,
    },
}
