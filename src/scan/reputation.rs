// src/scan/reputation.rs
//! Offline URL reputation check against fixed blocklists.
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Serialize, Deserialize};
use url::Url;
use utoipa::ToSchema;
use super::{Result, ScanError};

pub const DISCLAIMER: &str =
    "⚠️ Educational Simulation: Reputation is checked against a small built-in list, not a live feed.";

const MALICIOUS_DOMAINS: &[&str] = &[
    "malware-download.com",
    "phishing-site.net",
    "ransomware-hub.org",
    "trojan-distribution.io",
    "credential-stealer.cc",
    "botnet-command.xyz",
    "keylogger-deposit.tk",
    "fake-bank.site",
    "stolen-data-marketplace.dark",
    "exploit-kit-hosting.biz",
    "malicious-url.com",
    "virus-distribution.net",
    "spyware-central.org",
    "fraudulent-store.shop",
    "fake-crypto-exchange.pro",
    "illegal-marketplace.onion",
    "backdoor-access.io",
    "worm-spreading.net",
    "adware-installer.com",
    "rootkit-payload.site",
];

const SUSPICIOUS_DOMAINS: &[&str] = &[
    "wrerjkhjk.com",
    "xyzabc123.net",
    "random-chars-site.org",
    "shortened-url-redirect.info",
    "free-gift-cards.shop",
    "verify-account-now.site",
    "update-browser-plugin.xyz",
    "click-here-to-win.net",
    "limited-time-offer.biz",
    "confirm-identity-now.pro",
    "urgent-action-required.io",
    "suspicious-domain-123.tk",
    "file-sharing-malware.net",
    "gaming-server-proxy.org",
    "bit.ly",
    "tinyurl.com",
    "short.link",
    "url.co",
    "mysterious-redirect.site",
    "unknown-shortener.net",
    "premium-download-free.biz",
    "stream-movie-illegal.org",
    "free-software-cracked.com",
];

const WELL_KNOWN_DOMAINS: &[&str] = &[
    "google.com",
    "amazon.com",
    "microsoft.com",
    "apple.com",
    "facebook.com",
    "meta.com",
    "twitter.com",
    "linkedin.com",
    "github.com",
    "netflix.com",
    "wikipedia.org",
    "youtube.com",
    "instagram.com",
    "reddit.com",
    "stackoverflow.com",
    "medium.com",
    "wordpress.com",
    "shopify.com",
    "stripe.com",
    "paypal.com",
    "gmail.com",
    "outlook.com",
    "slack.com",
    "zoom.us",
    "discord.com",
    "telegram.org",
    "whatsapp.com",
    "pinterest.com",
    "tiktok.com",
    "quora.com",
];

lazy_static! {
    static ref SUSPICIOUS_INDICATORS: Vec<Regex> = [
        r"^xn--",                                      // IDN homograph
        r"[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}", // raw IPv4
        r"[0-9]{10,}",                                 // long digit runs
        r"bit\.ly|tinyurl|short\.link|url\.co",        // shorteners
        r"tmp|test|demo|fake|scam|phish|fraud",        // bait keywords
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("built-in indicator pattern"))
    .collect();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum UrlStatus {
    Clean,
    Warning,
    Malicious,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UrlCheckReport {
    pub url: String,
    /// Host the verdict was made on
    pub domain: String,
    pub status: UrlStatus,
    pub reason: String,
    pub disclaimer: String,
}

pub fn check_url(url: &str) -> Result<UrlCheckReport> {
    if url.trim().is_empty() {
        return Err(ScanError::EmptyUrl);
    }

    let domain = extract_domain(url);
    let (status, reason) = domain_reputation(&domain);

    Ok(UrlCheckReport {
        url: url.to_string(),
        domain,
        status,
        reason: reason.to_string(),
        disclaimer: DISCLAIMER.to_string(),
    })
}

/// Host of an absolute URL, or the part before the first `/` once any
/// http(s) scheme is stripped.
pub fn extract_domain(input: &str) -> String {
    match Url::parse(input) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => input.to_string(),
        },
        Err(_) => {
            let rest = input
                .strip_prefix("https://")
                .or_else(|| input.strip_prefix("http://"))
                .unwrap_or(input);
            rest.split('/').next().unwrap_or(rest).to_string()
        }
    }
}

/// First matching rule wins: blocklist, allowlist, indicators, watchlist,
/// structure, then unknown.
pub fn domain_reputation(domain: &str) -> (UrlStatus, &'static str) {
    let domain = domain.to_lowercase();

    if MALICIOUS_DOMAINS.iter().any(|bad| domain.contains(bad)) {
        return (
            UrlStatus::Malicious,
            "This domain is known to host malware, phishing, or other malicious content. DO NOT VISIT.",
        );
    }

    if WELL_KNOWN_DOMAINS.iter().any(|good| domain.contains(good)) {
        return (UrlStatus::Clean, "This is a legitimate and well-known domain. Safe to visit.");
    }

    if SUSPICIOUS_INDICATORS.iter().any(|re| re.is_match(&domain)) {
        return (
            UrlStatus::Warning,
            "This URL has suspicious characteristics. The domain may not be legitimate or could be masking its true nature.",
        );
    }

    if SUSPICIOUS_DOMAINS.iter().any(|sus| domain.contains(sus)) {
        return (
            UrlStatus::Warning,
            "This domain exhibits suspicious patterns. Proceed with caution and verify the URL before interacting.",
        );
    }

    if domain.split('.').count() < 2 {
        return (UrlStatus::Warning, "URL structure appears invalid or suspicious. Verify the URL format.");
    }

    (
        UrlStatus::Warning,
        "This is an unknown domain. Always verify URLs before clicking, especially from untrusted sources.",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_host_from_absolute_urls() {
        assert_eq!(extract_domain("https://www.google.com/search?q=rust"), "www.google.com");
        assert_eq!(extract_domain("http://Phishing-Site.net:8080/login"), "phishing-site.net");
    }

    #[test]
    fn falls_back_for_bare_domains() {
        assert_eq!(extract_domain("example.org/path/to"), "example.org");
        assert_eq!(extract_domain("bit.ly"), "bit.ly");
    }

    #[test]
    fn known_bad_domain_is_malicious() {
        let report = check_url("https://malware-download.com/payload.exe").unwrap();
        assert_eq!(report.status, UrlStatus::Malicious);
        assert_eq!(report.domain, "malware-download.com");
    }

    #[test]
    fn well_known_domain_is_clean() {
        let report = check_url("https://github.com/rust-lang/rust").unwrap();
        assert_eq!(report.status, UrlStatus::Clean);
    }

    #[test]
    fn blocklist_wins_over_allowlist() {
        let (status, _) = domain_reputation("google.com.phishing-site.net");
        assert_eq!(status, UrlStatus::Malicious);
    }

    #[test]
    fn indicators_flag_raw_ips_and_punycode() {
        let (status, reason) = domain_reputation("192.168.0.10");
        assert_eq!(status, UrlStatus::Warning);
        assert!(reason.contains("suspicious characteristics"));

        let (status, reason) = domain_reputation("xn--pple-43d.com");
        assert_eq!(status, UrlStatus::Warning);
        assert!(reason.contains("suspicious characteristics"));

        let (_, reason) = domain_reputation("secure-login-demo.net");
        assert!(reason.contains("suspicious characteristics"));
    }

    #[test]
    fn watchlist_domain_is_a_warning() {
        let (status, reason) = domain_reputation("free-gift-cards.shop");
        assert_eq!(status, UrlStatus::Warning);
        assert!(reason.contains("suspicious patterns"));
    }

    #[test]
    fn single_label_is_invalid_structure() {
        let (status, reason) = domain_reputation("intranet");
        assert_eq!(status, UrlStatus::Warning);
        assert!(reason.contains("invalid"));
    }

    #[test]
    fn anything_else_is_unknown() {
        let (status, reason) = domain_reputation("my-bakery.co.uk");
        assert_eq!(status, UrlStatus::Warning);
        assert!(reason.contains("unknown domain"));
    }

    #[test]
    fn blank_url_is_rejected() {
        assert_eq!(check_url("   "), Err(ScanError::EmptyUrl));
    }
}
