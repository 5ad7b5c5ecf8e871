// src/cli/handlers.rs
use std::path::Path;
use anyhow::{anyhow, bail, Result};
use serde::Serialize;
use crate::cli::commands::CliCommand;
use crate::cli::report;
use crate::osint::darkweb::{self, DarkwebReport};
use crate::osint::dns::{self, DnsReport};
use crate::osint::email::{self, EmailReport};
use crate::osint::metadata::{self, MetadataReport};
use crate::osint::social::{self, SocialReport};
use crate::osint::whois::{self, WhoisResponse};
use crate::osint::{HashStrategy, OsintError};
use crate::scan::{self, UrlCheckReport};

/// Report produced by a one-shot command.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Lookup {
    Darkweb(DarkwebReport),
    Dns(DnsReport),
    Whois(WhoisResponse),
    Email(EmailReport),
    Social(SocialReport),
    Metadata(MetadataReport),
    Url(UrlCheckReport),
}

// Run a one-shot command and print its report
pub fn handle_command(command: &CliCommand, strategy: HashStrategy, json: bool) -> Result<()> {
    let lookup = run_lookup(command, strategy)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&lookup)?);
    } else {
        print!("{}", report::render(&lookup));
    }

    Ok(())
}

/// Validation failures carry the same messages the HTTP API returns.
pub fn run_lookup(command: &CliCommand, strategy: HashStrategy) -> Result<Lookup> {
    let lookup = match command {
        CliCommand::Serve => bail!("serve does not produce a report"),
        CliCommand::Darkweb { email } => {
            let email = required(email, "Email is required")?;
            Lookup::Darkweb(darkweb::simulate_with(email, strategy)?)
        }
        CliCommand::Dns { domain } => {
            let domain = required(domain, "Domain is required")?;
            Lookup::Dns(dns::simulate_with(domain, strategy)?)
        }
        CliCommand::Whois { domain } => {
            let domain = required(domain, "Domain is required")?;
            Lookup::Whois(whois::simulate_with(domain, strategy)?)
        }
        CliCommand::Email { domain } => {
            let domain = required(domain, "Valid domain required")?;
            let report = email::simulate_with(domain, strategy).map_err(|e| match e {
                OsintError::InvalidDomain(_) => anyhow!("Valid domain required"),
                other => other.into(),
            })?;
            Lookup::Email(report)
        }
        CliCommand::Social { username } => {
            let username = required(username, "Username required")?;
            Lookup::Social(social::simulate_with(username, strategy)?)
        }
        CliCommand::Metadata { file_name, file_type } => {
            let file_name = required(file_name, "Invalid input")?;
            let file_type = match file_type {
                Some(file_type) => file_type.as_str(),
                None => Path::new(file_name)
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .unwrap_or(""),
            };
            let file_type = required(file_type, "Invalid input")?;
            Lookup::Metadata(metadata::simulate_with(file_name, file_type, strategy)?)
        }
        CliCommand::Url { url } => {
            let url = required(url, "URL is required")?;
            let report = scan::check_url(url).map_err(|_| anyhow!("URL is required"))?;
            Lookup::Url(report)
        }
    };

    Ok(lookup)
}

fn required<'a>(value: &'a str, message: &'static str) -> Result<&'a str> {
    if value.is_empty() {
        bail!(message);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_arguments_use_api_messages() {
        let err = run_lookup(&CliCommand::Darkweb { email: String::new() }, HashStrategy::Legacy).unwrap_err();
        assert_eq!(err.to_string(), "Email is required");

        let err = run_lookup(&CliCommand::Email { domain: "localhost".into() }, HashStrategy::Legacy).unwrap_err();
        assert_eq!(err.to_string(), "Valid domain required");

        let err = run_lookup(&CliCommand::Url { url: "  ".into() }, HashStrategy::Legacy).unwrap_err();
        assert_eq!(err.to_string(), "URL is required");
    }

    #[test]
    fn metadata_file_type_defaults_to_extension() {
        let lookup = run_lookup(
            &CliCommand::Metadata { file_name: "photo.jpg".into(), file_type: None },
            HashStrategy::Legacy,
        )
        .unwrap();
        match lookup {
            Lookup::Metadata(report) => {
                assert_eq!(report.file_type, "jpg");
                assert!(report.metadata.contains_key("Camera Model"));
            }
            other => panic!("unexpected lookup: {:?}", other),
        }

        let err = run_lookup(
            &CliCommand::Metadata { file_name: "Makefile".into(), file_type: None },
            HashStrategy::Legacy,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Invalid input");
    }

    #[test]
    fn json_output_is_the_bare_report() {
        let lookup = run_lookup(&CliCommand::Whois { domain: "example.com".into() }, HashStrategy::Legacy).unwrap();
        let json = serde_json::to_value(&lookup).unwrap();
        assert_eq!(json["WhoisRecord"]["registrarName"], "MarkMonitor Inc.");
    }

    #[test]
    fn serve_is_not_a_lookup() {
        assert!(run_lookup(&CliCommand::Serve, HashStrategy::Legacy).is_err());
    }
}
