// src/cli/report.rs
//! Console summaries for one-shot lookups.
use console::style;
use crate::cli::handlers::Lookup;
use crate::osint::darkweb::{BreachStatus, DarkwebReport, Severity};
use crate::osint::dns::DnsReport;
use crate::osint::email::EmailReport;
use crate::osint::metadata::{MetadataReport, RiskLevel};
use crate::osint::social::SocialReport;
use crate::osint::whois::WhoisResponse;
use crate::scan::{UrlCheckReport, UrlStatus};
use crate::utils::truncate_string;

const DIVIDER: &str = "──────────────────────────────────────────────────────────────";

pub fn render(lookup: &Lookup) -> String {
    let (body, disclaimer) = match lookup {
        Lookup::Darkweb(report) => (render_darkweb(report), report.disclaimer.as_str()),
        Lookup::Dns(report) => (render_dns(report), report.disclaimer.as_str()),
        Lookup::Whois(report) => (render_whois(report), report.whois_record.disclaimer.as_str()),
        Lookup::Email(report) => (render_email(report), report.disclaimer.as_str()),
        Lookup::Social(report) => (render_social(report), report.disclaimer.as_str()),
        Lookup::Metadata(report) => (render_metadata(report), report.disclaimer.as_str()),
        Lookup::Url(report) => (render_url(report), report.disclaimer.as_str()),
    };

    format!("{}\n{}{}\n {}\n", DIVIDER, body, DIVIDER, style(disclaimer).dim())
}

fn row(label: &str, value: impl std::fmt::Display) -> String {
    format!(" {:<18}│ {}\n", label, value)
}

fn render_darkweb(report: &DarkwebReport) -> String {
    let mut output = String::new();
    output.push_str(&row("Email", style(&report.email).cyan()));

    let status = match report.status {
        BreachStatus::Safe => style("Safe").green(),
        BreachStatus::Breached => style("Breached").red().bold(),
    };
    output.push_str(&row("Status", status));

    let severity = match report.severity {
        Severity::Low => style("Low").green(),
        Severity::Medium => style("Medium").yellow(),
        Severity::Critical => style("Critical").red().bold(),
    };
    output.push_str(&row("Severity", severity));
    output.push_str(&row("Breaches", report.breach_count));

    for breach in &report.sources {
        output.push_str(&format!(
            "   {} {} {}\n      {}\n",
            style(&breach.name).bold(),
            style(format!("({})", breach.date)).dim(),
            breach.domain,
            breach.data_classes.join(", ")
        ));
    }

    output
}

fn render_dns(report: &DnsReport) -> String {
    report
        .records
        .iter()
        .map(|record| {
            format!(
                " {:<6} {:<28} {:>6}  {}\n",
                style(record.record_type).cyan(),
                record.name,
                record.ttl,
                record.value
            )
        })
        .collect()
}

fn render_whois(report: &WhoisResponse) -> String {
    let record = &report.whois_record;
    let mut output = String::new();
    output.push_str(&row("Domain", style(&record.domain_name).cyan()));
    output.push_str(&row("Registrar", format!("{} (IANA {})", record.registrar_name, record.registrar_iana_id)));
    output.push_str(&row("Created", &record.created_date));
    output.push_str(&row("Updated", &record.updated_date));
    output.push_str(&row("Expires", &record.expires_date));
    output.push_str(&row("Age", format!("{} years", record.estimated_domain_age)));
    for host in &record.name_servers.host_names {
        output.push_str(&row("Name Server", host));
    }
    output.push_str(&row("Status", record.status.join(", ")));
    output
}

fn render_email(report: &EmailReport) -> String {
    let mut output = String::new();
    output.push_str(&row("Domain", style(&report.domain).cyan()));
    output.push_str(&row("Found", style(report.found).green()));
    output.push_str(&row("Convention", &report.naming_convention));

    for harvested in &report.emails {
        output.push_str(&format!(
            "   {:<34} {} {}\n",
            style(&harvested.email).bold(),
            harvested.name,
            style(format!("({})", harvested.role)).dim()
        ));
    }

    output
}

fn render_social(report: &SocialReport) -> String {
    let mut output = String::new();
    output.push_str(&row("Username", style(&report.username).cyan()));
    output.push_str(&row("Profiles", style(report.total_found).green()));
    output.push_str(&row("Exposure", format!("{:?}", report.exposure_level)));

    for profile in &report.profiles {
        output.push_str(&format!(
            "   {:<10} {:>3}%  {:<8} {}\n      {}\n",
            style(&profile.platform).bold(),
            profile.confidence,
            profile.last_active,
            profile.url,
            style(truncate_string(&profile.bio, 56)).dim()
        ));
    }

    output
}

fn render_metadata(report: &MetadataReport) -> String {
    let mut output = String::new();
    output.push_str(&row("File", style(&report.file_name).cyan()));
    output.push_str(&row("Type", &report.file_type));

    let risk = match report.risk_level {
        RiskLevel::Low => style("Low").green(),
        RiskLevel::Medium => style("Medium").yellow(),
        RiskLevel::High => style("High").red().bold(),
    };
    output.push_str(&row("Risk", risk));

    for (key, value) in &report.metadata {
        output.push_str(&row(key, value));
    }

    for warning in &report.warnings {
        output.push_str(&format!(" {} {}\n", style("!").yellow().bold(), warning));
    }

    output
}

fn render_url(report: &UrlCheckReport) -> String {
    let status = match report.status {
        UrlStatus::Clean => style("Clean").green(),
        UrlStatus::Warning => style("Warning").yellow(),
        UrlStatus::Malicious => style("Malicious").red().bold(),
    };

    let mut output = String::new();
    output.push_str(&row("URL", style(&report.url).cyan()));
    output.push_str(&row("Domain", &report.domain));
    output.push_str(&row("Verdict", status));
    output.push_str(&format!(" {}\n", report.reason));
    output
}
