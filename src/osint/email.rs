// src/osint/email.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;
use super::fixtures::{PersonFixture, EMPLOYEES, ROLE_MAILBOXES};
use super::{first_label, fingerprint, Fingerprint, HashStrategy, OsintError, Result};

pub const DISCLAIMER: &str =
    "⚠️ Educational Simulation: Emails generated based on common corporate naming conventions.";

/// Where a harvested address could be confirmed by hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct VerificationSource {
    #[serde(rename = "type")]
    pub source_type: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HarvestedEmail {
    pub name: String,
    pub email: String,
    pub role: String,
    pub sources: Vec<VerificationSource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmailReport {
    pub domain: String,
    pub found: usize,
    pub emails: Vec<HarvestedEmail>,
    pub naming_convention: String,
    pub disclaimer: String,
}

/// A harvestable domain must at least have a dot in it.
pub fn is_harvestable(domain: &str) -> bool {
    domain.contains('.')
}

#[cfg(test)]
pub fn simulate(domain: &str) -> Result<EmailReport> {
    simulate_with(domain, HashStrategy::Legacy)
}

pub fn simulate_with(domain: &str, strategy: HashStrategy) -> Result<EmailReport> {
    let fp = fingerprint(domain, "domain", strategy)?;
    if !is_harvestable(domain) {
        return Err(OsintError::InvalidDomain(domain.to_string()));
    }
    Ok(assemble(domain, fp))
}

/// Role mailboxes are always listed. Each named employee is included when
/// `(hash + i)` is even, so a domain yields either two or three of them.
pub fn assemble(domain: &str, fp: Fingerprint) -> EmailReport {
    let company = first_label(domain);

    let selected = EMPLOYEES
        .iter()
        .enumerate()
        .filter(|(i, _)| fp.offset(*i as u64) % 2 == 0)
        .map(|(_, person)| person);

    let emails: Vec<HarvestedEmail> = ROLE_MAILBOXES
        .iter()
        .chain(selected)
        .map(|person| harvest(person, domain, company))
        .collect();

    EmailReport {
        domain: domain.to_string(),
        found: emails.len(),
        emails,
        naming_convention: format!("{{first}}.{{last}}@{}", domain),
        disclaimer: DISCLAIMER.to_string(),
    }
}

fn harvest(person: &PersonFixture, domain: &str, company: &str) -> HarvestedEmail {
    let (name, email) = if person.last.is_empty() {
        (person.first.to_string(), format!("{}@{}", person.first.to_lowercase(), domain))
    } else {
        (
            format!("{} {}", person.first, person.last),
            format!("{}.{}@{}", person.first.to_lowercase(), person.last.to_lowercase(), domain),
        )
    };

    // Search links are left unencoded; clients render them as-is.
    let full_name = format!("{} {}", person.first, person.last);
    let sources = vec![
        VerificationSource {
            source_type: "LinkedIn".to_string(),
            url: format!(
                "https://www.google.com/search?q=site:linkedin.com/in/ \"{}\" \"{}\"",
                full_name, company
            ),
        },
        VerificationSource {
            source_type: "Twitter".to_string(),
            url: format!("https://twitter.com/search?q=\"{}\"", full_name),
        },
    ];

    HarvestedEmail {
        name,
        email,
        role: person.role.to_string(),
        sources,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addresses(report: &EmailReport) -> Vec<&str> {
        report.emails.iter().map(|e| e.email.as_str()).collect()
    }

    #[test]
    fn even_fingerprint_selects_three_employees() {
        // 11 + 'e' (101) = 112
        let report = simulate("example.com").unwrap();
        assert_eq!(
            addresses(&report),
            vec![
                "admin@example.com",
                "support@example.com",
                "contact@example.com",
                "john.smith@example.com",
                "michael.chen@example.com",
                "david.miller@example.com",
            ]
        );
        assert_eq!(report.found, 6);
    }

    #[test]
    fn odd_fingerprint_selects_two_employees() {
        // 10 + 'g' (103) = 113
        let report = simulate("google.com").unwrap();
        assert_eq!(report.found, 5);
        assert_eq!(report.emails[3].email, "sarah.connor@google.com");
        assert_eq!(report.emails[3].name, "Sarah Connor");
        assert_eq!(report.emails[3].role, "Security Lead");
        assert_eq!(report.emails[4].email, "emily.davis@google.com");
    }

    #[test]
    fn role_mailboxes_use_bare_first_name() {
        let report = simulate("acme.io").unwrap();
        let admin = &report.emails[0];
        assert_eq!(admin.name, "admin");
        assert_eq!(admin.email, "admin@acme.io");
        assert_eq!(admin.role, "Infrastructure");
    }

    #[test]
    fn verification_links_name_person_and_company() {
        let report = simulate("example.com").unwrap();
        let john = &report.emails[3];
        assert_eq!(john.sources.len(), 2);
        assert_eq!(john.sources[0].source_type, "LinkedIn");
        assert_eq!(
            john.sources[0].url,
            "https://www.google.com/search?q=site:linkedin.com/in/ \"John Smith\" \"example\""
        );
        assert_eq!(john.sources[1].source_type, "Twitter");
        assert_eq!(john.sources[1].url, "https://twitter.com/search?q=\"John Smith\"");

        // Role entries keep the trailing space of an empty last name
        assert_eq!(report.emails[0].sources[1].url, "https://twitter.com/search?q=\"admin \"");
    }

    #[test]
    fn naming_convention_and_disclaimer() {
        let report = simulate("example.com").unwrap();
        assert_eq!(report.naming_convention, "{first}.{last}@example.com");
        assert_eq!(report.disclaimer, DISCLAIMER);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["namingConvention"], "{first}.{last}@example.com");
        assert_eq!(json["emails"][0]["sources"][0]["type"], "LinkedIn");
    }

    #[test]
    fn domain_without_dot_is_rejected() {
        assert!(!is_harvestable("localhost"));
        assert_eq!(simulate("localhost"), Err(OsintError::InvalidDomain("localhost".to_string())));
        assert_eq!(simulate(""), Err(OsintError::EmptyInput("domain")));
    }
}
