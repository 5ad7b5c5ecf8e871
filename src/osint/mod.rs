// src/osint/mod.rs
//! Simulated open-source intelligence lookups.
//!
//! Every lookup is a pure function of its target string: a [`Fingerprint`]
//! is derived from the target and used to pick entries from the static
//! tables in [`fixtures`]. No network access, no state, no randomness.
use thiserror::Error;

pub mod fingerprint;
pub mod fixtures;
pub mod darkweb;
pub mod dns;
pub mod email;
pub mod metadata;
pub mod social;
pub mod whois;

pub use fingerprint::{Fingerprint, HashStrategy};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OsintError {
    #[error("Cannot fingerprint an empty {0}")]
    EmptyInput(&'static str),

    #[error("Invalid domain: {0}")]
    InvalidDomain(String),
}

pub type Result<T> = std::result::Result<T, OsintError>;

/// Fingerprint `input`, naming the field in the error when it is empty.
pub(crate) fn fingerprint(input: &str, field: &'static str, strategy: HashStrategy) -> Result<Fingerprint> {
    Fingerprint::with_strategy(input, strategy).ok_or(OsintError::EmptyInput(field))
}

/// First dot-separated label of a domain ("google" for "google.com").
pub(crate) fn first_label(domain: &str) -> &str {
    domain.split('.').next().unwrap_or(domain)
}

#[cfg(test)]
pub(crate) mod test_support {
    /// A spread of targets of different lengths and leading characters, so
    /// invariant tests see both parities and every modulo class.
    pub fn sample_targets() -> Vec<String> {
        let mut targets = Vec::new();
        for first in ['a', 'g', 'm', 'z', 'A', 'Q', '0', '_'] {
            for len in 1..=24 {
                let mut target = String::new();
                target.push(first);
                target.extend(std::iter::repeat('x').take(len - 1));
                targets.push(target);
            }
        }
        targets
    }
}
