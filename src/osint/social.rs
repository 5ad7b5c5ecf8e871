// src/osint/social.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;
use super::fixtures::{BIOS, PLATFORMS};
use super::{fingerprint, Fingerprint, HashStrategy, Result};

pub const DISCLAIMER: &str =
    "⚠️ Educational Simulation: Profile data is generated for demonstration purposes.";

const SCAN_TIME: &str = "1.2s";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ExposureLevel {
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialProfile {
    pub platform: String,
    pub category: String,
    pub url: String,
    pub username: String,
    /// Match confidence in percent (85 to 99)
    pub confidence: u32,
    /// "Now" or "<n>d ago"
    pub last_active: String,
    pub bio: String,
    pub avatar_color: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SocialReport {
    pub username: String,
    pub profiles: Vec<SocialProfile>,
    pub total_found: usize,
    pub scan_time: String,
    pub exposure_level: ExposureLevel,
    pub disclaimer: String,
}

#[cfg(test)]
pub fn simulate(username: &str) -> Result<SocialReport> {
    simulate_with(username, HashStrategy::Legacy)
}

pub fn simulate_with(username: &str, strategy: HashStrategy) -> Result<SocialReport> {
    let fp = fingerprint(username, "username", strategy)?;
    Ok(assemble(username, fp))
}

/// Number of raw platform hits before de-duplication (3 to 6).
pub fn match_count(fp: Fingerprint) -> u64 {
    fp.value() % 4 + 3
}

fn avatar_color(fp: Fingerprint, i: u64) -> &'static str {
    if fp.offset(i) % 2 == 0 {
        "bg-purple-500"
    } else {
        "bg-indigo-500"
    }
}

pub fn assemble(username: &str, fp: Fingerprint) -> SocialReport {
    let hash = fp.value();
    let mut profiles: Vec<SocialProfile> = Vec::new();

    for i in 0..match_count(fp) {
        let platform = fp.pick(i * 3, PLATFORMS);

        // First hit on a platform wins
        if profiles.iter().any(|p| p.platform == platform.name) {
            continue;
        }

        let days_ago = hash.wrapping_mul(i) % 30;
        let last_active = if days_ago == 0 {
            "Now".to_string()
        } else {
            format!("{}d ago", days_ago)
        };

        profiles.push(SocialProfile {
            platform: platform.name.to_string(),
            category: platform.category.to_string(),
            url: format!("https://{}{}", platform.base, username),
            username: username.to_string(),
            confidence: 85 + (fp.offset(i) % 15) as u32,
            last_active,
            bio: fp.pick(i, BIOS).to_string(),
            avatar_color: avatar_color(fp, i).to_string(),
        });
    }

    let exposure_level = if profiles.len() > 4 {
        ExposureLevel::High
    } else {
        ExposureLevel::Medium
    };

    SocialReport {
        username: username.to_string(),
        total_found: profiles.len(),
        profiles,
        scan_time: SCAN_TIME.to_string(),
        exposure_level,
        disclaimer: DISCLAIMER.to_string(),
    }
}
