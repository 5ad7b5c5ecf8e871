// src/osint/darkweb.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;
use super::fixtures::{BreachFixture, BREACHES};
use super::{fingerprint, Fingerprint, HashStrategy, Result};

pub const SAFE_DISCLAIMER: &str = "No public breaches found in our simulated intelligence feed.";
pub const BREACHED_DISCLAIMER: &str =
    "⚠️ Educational Simulation: These results are generated for demonstration logic only.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum BreachStatus {
    Safe,
    Breached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum Severity {
    Low,
    Medium,
    Critical,
}

/// A breach the address was "found" in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Breach {
    pub name: String,
    pub domain: String,
    /// Disclosure date (YYYY-MM-DD)
    pub date: String,
    /// Kinds of data exposed
    pub data_classes: Vec<String>,
    pub description: String,
}

impl From<&BreachFixture> for Breach {
    fn from(fixture: &BreachFixture) -> Self {
        Self {
            name: fixture.name.to_string(),
            domain: fixture.domain.to_string(),
            date: fixture.date.to_string(),
            data_classes: fixture.data_classes.iter().map(|c| c.to_string()).collect(),
            description: fixture.description.to_string(),
        }
    }
}

impl Breach {
    pub fn exposes_passwords(&self) -> bool {
        self.data_classes.concat().contains("Password")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DarkwebReport {
    pub email: String,
    pub status: BreachStatus,
    pub severity: Severity,
    pub breach_count: usize,
    pub sources: Vec<Breach>,
    pub disclaimer: String,
}

#[cfg(test)]
pub fn simulate(email: &str) -> Result<DarkwebReport> {
    simulate_with(email, HashStrategy::Legacy)
}

pub fn simulate_with(email: &str, strategy: HashStrategy) -> Result<DarkwebReport> {
    let fp = fingerprint(email, "email", strategy)?;
    Ok(assemble(email, fp))
}

/// Half of all fingerprints are "breached". A breached address appears in
/// one to three consecutive breaches from the table (picks are not de-duplicated).
pub fn assemble(email: &str, fp: Fingerprint) -> DarkwebReport {
    if !fp.is_even() {
        return DarkwebReport {
            email: email.to_string(),
            status: BreachStatus::Safe,
            severity: Severity::Low,
            breach_count: 0,
            sources: Vec::new(),
            disclaimer: SAFE_DISCLAIMER.to_string(),
        };
    }

    let count = fp.value() % 3 + 1;
    let sources: Vec<Breach> = (0..count)
        .map(|i| Breach::from(fp.pick(i, BREACHES)))
        .collect();

    let severity = if sources.iter().any(Breach::exposes_passwords) {
        Severity::Critical
    } else {
        Severity::Medium
    };

    DarkwebReport {
        email: email.to_string(),
        status: BreachStatus::Breached,
        severity,
        breach_count: sources.len(),
        sources,
        disclaimer: BREACHED_DISCLAIMER.to_string(),
    }
}
