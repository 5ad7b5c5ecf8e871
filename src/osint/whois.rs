// src/osint/whois.rs
use chrono::{Datelike, Utc};
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;
use super::fixtures::{DOMAIN_STATUSES, REGISTRARS};
use super::{first_label, fingerprint, Fingerprint, HashStrategy, Result};

pub const DISCLAIMER: &str = "⚠️ Educational Simulation: Data generated for demonstration purposes.";

/// Envelope kept for compatibility with clients of common WHOIS APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WhoisResponse {
    #[serde(rename = "WhoisRecord")]
    pub whois_record: WhoisRecord,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WhoisRecord {
    pub domain_name: String,
    pub registrar_name: String,
    #[serde(rename = "registrarIANAID")]
    pub registrar_iana_id: String,
    pub created_date: String,
    pub updated_date: String,
    pub expires_date: String,
    /// Whole years since creation (1 to 15)
    pub estimated_domain_age: i32,
    pub name_servers: NameServers,
    pub status: Vec<String>,
    pub disclaimer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NameServers {
    pub host_names: Vec<String>,
}

#[cfg(test)]
pub fn simulate(domain: &str) -> Result<WhoisResponse> {
    simulate_with(domain, HashStrategy::Legacy)
}

/// Dates are relative to the current UTC year.
pub fn simulate_with(domain: &str, strategy: HashStrategy) -> Result<WhoisResponse> {
    let fp = fingerprint(domain, "domain", strategy)?;
    Ok(assemble(domain, fp, Utc::now().year()))
}

pub fn assemble(domain: &str, fp: Fingerprint, current_year: i32) -> WhoisResponse {
    let hash = fp.value();
    let registrar = *fp.pick(0, REGISTRARS);

    let age = (hash % 15) as i32 + 1;
    let created_year = current_year - age;
    let month = hash % 9 + 1;
    let expires_year = current_year + (hash % 5) as i32 + 1;

    let ns_base = first_label(domain);
    let host_names = (1..=4).map(|n| format!("ns{}.{}.com", n, ns_base)).collect();

    WhoisResponse {
        whois_record: WhoisRecord {
            domain_name: domain.to_lowercase(),
            registrar_name: registrar.to_string(),
            registrar_iana_id: (hash * 12).to_string(),
            created_date: format!("{}-0{}-15T04:00:00Z", created_year, month),
            updated_date: format!("{}-01-10T09:23:00Z", current_year),
            expires_date: format!("{}-0{}-15T04:00:00Z", expires_year, month),
            estimated_domain_age: current_year - created_year,
            name_servers: NameServers { host_names },
            status: DOMAIN_STATUSES.iter().map(|s| s.to_string()).collect(),
            disclaimer: DISCLAIMER.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::osint::test_support::sample_targets;

    #[test]
    fn example_com_record() {
        // 11 + 'e' (101) = 112
        let record = assemble("example.com", Fingerprint::of("example.com").unwrap(), 2026).whois_record;
        assert_eq!(record.domain_name, "example.com");
        assert_eq!(record.registrar_name, "MarkMonitor Inc.");
        assert_eq!(record.registrar_iana_id, "1344");
        assert_eq!(record.created_date, "2018-05-15T04:00:00Z");
        assert_eq!(record.expires_date, "2029-05-15T04:00:00Z");
        assert_eq!(record.updated_date, "2026-01-10T09:23:00Z");
        assert_eq!(record.estimated_domain_age, 8);
        assert_eq!(record.status.len(), 3);

        let hosts = &record.name_servers.host_names;
        assert_eq!(hosts.len(), 4);
        for host in hosts {
            assert!(host.starts_with("ns"));
            assert!(host.contains("example"));
        }
    }

    #[test]
    fn domain_name_is_lowercased_but_name_servers_keep_case() {
        let record = simulate("Example.COM").unwrap().whois_record;
        assert_eq!(record.domain_name, "example.com");
        assert_eq!(record.name_servers.host_names[0], "ns1.Example.com");
    }

    #[test]
    fn age_is_between_one_and_fifteen_years() {
        for target in sample_targets() {
            let record = simulate(&target).unwrap().whois_record;
            assert!((1..=15).contains(&record.estimated_domain_age), "{}", target);
        }
    }

    #[test]
    fn months_are_single_digit() {
        for target in sample_targets() {
            let record = assemble(&target, Fingerprint::of(&target).unwrap(), 2030).whois_record;
            let month = &record.created_date[5..7];
            assert!(("01"..="09").contains(&month), "{}", record.created_date);
            assert_eq!(&record.expires_date[4..], &record.created_date[4..]);
        }
    }

    #[test]
    fn serializes_with_whois_api_field_names() {
        let json = serde_json::to_value(simulate("example.com").unwrap()).unwrap();
        let record = &json["WhoisRecord"];
        assert!(record["registrarIANAID"].is_string());
        assert!(record["nameServers"]["hostNames"].is_array());
        assert!(record["estimatedDomainAge"].is_number());
        assert!(record["disclaimer"].is_string());
    }
}
