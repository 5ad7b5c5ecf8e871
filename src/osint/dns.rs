// src/osint/dns.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;
use super::fixtures::{CNAME_TARGET, DNS_NAME_SERVERS, MAIL_EXCHANGERS, SOA_TIMERS, SPF_RECORD};
use super::{fingerprint, Fingerprint, HashStrategy, Result};

pub const DISCLAIMER: &str = "⚠️ Educational Simulation: DNS records generated for demonstration purposes.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    A,
    Mx,
    Ns,
    Txt,
    Cname,
    Soa,
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RecordType::A => "A",
            RecordType::Mx => "MX",
            RecordType::Ns => "NS",
            RecordType::Txt => "TXT",
            RecordType::Cname => "CNAME",
            RecordType::Soa => "SOA",
        };
        f.pad(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DnsRecord {
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub name: String,
    pub ttl: u32,
    pub value: String,
}

impl DnsRecord {
    fn new(record_type: RecordType, name: impl Into<String>, ttl: u32, value: impl Into<String>) -> Self {
        Self { record_type, name: name.into(), ttl, value: value.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DnsReport {
    pub records: Vec<DnsRecord>,
    pub disclaimer: String,
}

impl DnsReport {
    #[cfg(test)]
    pub fn records_of(&self, record_type: RecordType) -> impl Iterator<Item = &DnsRecord> {
        self.records.iter().filter(move |r| r.record_type == record_type)
    }
}

#[cfg(test)]
pub fn simulate(domain: &str) -> Result<DnsReport> {
    simulate_with(domain, HashStrategy::Legacy)
}

pub fn simulate_with(domain: &str, strategy: HashStrategy) -> Result<DnsReport> {
    let fp = fingerprint(domain, "domain", strategy)?;
    Ok(assemble(domain, fp))
}

/// Fixed skeleton of A, MX, NS, TXT and SOA records. Addresses come from the
/// fingerprint; even fingerprints also get a `blog.` CNAME.
pub fn assemble(domain: &str, fp: Fingerprint) -> DnsReport {
    let hash = fp.value();
    let base_ip = format!("192.168.{}", hash % 255);
    let mut records = Vec::with_capacity(9);

    records.push(DnsRecord::new(RecordType::A, domain, 3600, format!("{}.{}", base_ip, (hash * 2) % 255)));
    records.push(DnsRecord::new(
        RecordType::A,
        format!("www.{}", domain),
        3600,
        format!("{}.{}", base_ip, (hash * 3) % 255),
    ));

    for (preference, exchanger) in MAIL_EXCHANGERS {
        records.push(DnsRecord::new(RecordType::Mx, domain, 3600, format!("{} {}", preference, exchanger)));
    }

    for server in DNS_NAME_SERVERS {
        records.push(DnsRecord::new(RecordType::Ns, domain, 86400, *server));
    }

    records.push(DnsRecord::new(RecordType::Txt, domain, 300, SPF_RECORD));

    if fp.is_even() {
        records.push(DnsRecord::new(RecordType::Cname, format!("blog.{}", domain), 43200, CNAME_TARGET));
    }

    records.push(DnsRecord::new(
        RecordType::Soa,
        domain,
        900,
        format!("{} hostmaster.{} {}", DNS_NAME_SERVERS[0], domain, SOA_TIMERS),
    ));

    DnsReport { records, disclaimer: DISCLAIMER.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::osint::test_support::sample_targets;

    #[test]
    fn google_gets_the_documented_addresses() {
        // 10 + 'g' (103) = 113
        let report = simulate("google.com").unwrap();
        let a: Vec<&DnsRecord> = report.records_of(RecordType::A).collect();
        assert_eq!(a[0].name, "google.com");
        assert_eq!(a[0].value, "192.168.113.226");
        assert_eq!(a[1].name, "www.google.com");
        assert_eq!(a[1].value, "192.168.113.84");
        // odd fingerprint: no CNAME
        assert_eq!(report.records_of(RecordType::Cname).count(), 0);
        assert_eq!(report.records.len(), 8);
    }

    #[test]
    fn even_fingerprint_adds_blog_cname() {
        // 11 + 'e' (101) = 112
        let report = simulate("example.com").unwrap();
        let cname: Vec<&DnsRecord> = report.records_of(RecordType::Cname).collect();
        assert_eq!(cname.len(), 1);
        assert_eq!(cname[0].name, "blog.example.com");
        assert_eq!(cname[0].value, "ext-cust.squarespace.com");
        assert_eq!(cname[0].ttl, 43200);
        assert_eq!(report.records.len(), 9);
    }

    #[test]
    fn skeleton_is_always_present_and_soa_is_last() {
        for target in sample_targets() {
            let report = simulate(&target).unwrap();
            assert_eq!(report.records_of(RecordType::A).count(), 2);
            assert_eq!(report.records_of(RecordType::Mx).count(), 2);
            assert_eq!(report.records_of(RecordType::Ns).count(), 2);
            assert_eq!(report.records_of(RecordType::Txt).count(), 1);
            assert_eq!(report.records_of(RecordType::Soa).count(), 1);

            let soa = report.records.last().unwrap();
            assert_eq!(soa.record_type, RecordType::Soa);
            assert_eq!(
                soa.value,
                format!("ns1.digitalocean.com hostmaster.{} 1709934221 10800 3600 604800 3600", target)
            );
        }
    }

    #[test]
    fn record_types_serialize_uppercase() {
        let report = simulate("example.com").unwrap();
        let json = serde_json::to_value(&report).unwrap();
        let types: Vec<&str> = json["records"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["type"].as_str().unwrap())
            .collect();
        assert_eq!(types, vec!["A", "A", "MX", "MX", "NS", "NS", "TXT", "CNAME", "SOA"]);
        assert_eq!(json["records"][2]["value"], "10 aspmx.l.google.com");
        assert_eq!(json["records"][6]["value"], "\"v=spf1 include:_spf.google.com ~all\"");
    }

    #[test]
    fn deterministic() {
        assert_eq!(simulate("rust-lang.org").unwrap(), simulate("rust-lang.org").unwrap());
    }
}
