// src/osint/metadata.rs
use indexmap::IndexMap;
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;
use super::fixtures::{DOCUMENT_METADATA, DOCUMENT_TYPES, GPS_METADATA, IMAGE_METADATA, IMAGE_TYPES};
use super::{Fingerprint, HashStrategy, OsintError, Result};

pub const DISCLAIMER: &str = "⚠️ Educational Simulation: Metadata generated for demonstration.";

const GPS_WARNING: &str = "Precise GPS location embedded.";
const AUTHOR_WARNING: &str = "Author and Company names exposed.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCategory {
    Image,
    Document,
    Other,
}

impl FileCategory {
    /// Classify an already cleaned extension (lowercase, no leading dot).
    pub fn classify(clean_type: &str) -> Self {
        if IMAGE_TYPES.contains(&clean_type) {
            FileCategory::Image
        } else if DOCUMENT_TYPES.contains(&clean_type) {
            FileCategory::Document
        } else {
            FileCategory::Other
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetadataReport {
    pub file_name: String,
    /// Lowercased extension with the dot removed
    pub file_type: String,
    /// Extracted fields in template order
    #[schema(value_type = Object)]
    pub metadata: IndexMap<String, String>,
    pub risk_level: RiskLevel,
    pub warnings: Vec<String>,
    pub disclaimer: String,
}

/// Lowercase and drop the first `.` (".JPG" -> "jpg").
pub fn clean_file_type(file_type: &str) -> String {
    file_type.to_lowercase().replacen('.', "", 1)
}

#[cfg(test)]
pub fn simulate(file_name: &str, file_type: &str) -> Result<MetadataReport> {
    simulate_with(file_name, file_type, HashStrategy::Legacy)
}

pub fn simulate_with(file_name: &str, file_type: &str, strategy: HashStrategy) -> Result<MetadataReport> {
    if file_name.is_empty() {
        return Err(OsintError::EmptyInput("file name"));
    }
    let fp = Fingerprint::of_pair(file_name, file_type, strategy)
        .ok_or(OsintError::EmptyInput("file type"))?;
    Ok(assemble(file_name, file_type, fp))
}

pub fn assemble(file_name: &str, file_type: &str, fp: Fingerprint) -> MetadataReport {
    let clean_type = clean_file_type(file_type);
    let mut warnings = Vec::new();

    let (metadata, risk_level) = match FileCategory::classify(&clean_type) {
        FileCategory::Image => {
            let mut fields = template(IMAGE_METADATA);
            // Every other image carries a location
            if fp.is_even() {
                fields.extend(template(GPS_METADATA));
                warnings.push(GPS_WARNING.to_string());
                (fields, RiskLevel::High)
            } else {
                (fields, RiskLevel::Low)
            }
        }
        FileCategory::Document => {
            warnings.push(AUTHOR_WARNING.to_string());
            (template(DOCUMENT_METADATA), RiskLevel::Medium)
        }
        FileCategory::Other => {
            let mut fields = IndexMap::new();
            fields.insert("File Size".to_string(), "2.4 MB".to_string());
            fields.insert("MIME Type".to_string(), format!("application/{}", clean_type));
            fields.insert("Encoding".to_string(), "UTF-8".to_string());
            fields.insert("Hash (MD5)".to_string(), "a3c4f9d2e1b8...".to_string());
            (fields, RiskLevel::Low)
        }
    };

    MetadataReport {
        file_name: file_name.to_string(),
        file_type: clean_type,
        metadata,
        risk_level,
        warnings,
        disclaimer: DISCLAIMER.to_string(),
    }
}

fn template(fields: &[(&str, &str)]) -> IndexMap<String, String> {
    fields.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleans_file_type() {
        assert_eq!(clean_file_type(".JPG"), "jpg");
        assert_eq!(clean_file_type("PdF"), "pdf");
        assert_eq!(clean_file_type(".tar.gz"), "tar.gz");
    }

    #[test]
    fn image_types_get_camera_fields() {
        for ext in ["jpg", "jpeg", "png", "heic", ".PNG"] {
            let report = simulate("holiday", ext).unwrap();
            assert!(report.metadata.contains_key("Dimensions"), "{}", ext);
            assert!(report.metadata.contains_key("Camera Model"));
            assert!(!report.metadata.contains_key("Author"));
        }
    }

    #[test]
    fn even_image_gets_gps_and_high_risk() {
        // "photo.jpg" (9) + "jpg" (3) = 12
        let report = simulate("photo.jpg", "jpg").unwrap();
        assert_eq!(report.risk_level, RiskLevel::High);
        assert_eq!(report.metadata["GPS Latitude"], "34.0522 N");
        assert_eq!(report.metadata["GPS Longitude"], "118.2437 W");
        assert_eq!(report.warnings, vec![GPS_WARNING.to_string()]);
        // template order is kept and GPS comes last
        let keys: Vec<&str> = report.metadata.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys.first(), Some(&"Dimensions"));
        assert_eq!(keys.last(), Some(&"GPS Longitude"));
    }

    #[test]
    fn odd_image_has_no_location() {
        // 8 + 3 = 11
        let report = simulate("selfie.x", "png").unwrap();
        assert_eq!(report.risk_level, RiskLevel::Low);
        assert!(!report.metadata.contains_key("GPS Latitude"));
        assert!(report.warnings.is_empty());
        assert_eq!(report.metadata.len(), 7);
    }

    #[test]
    fn documents_expose_author() {
        for ext in ["pdf", "docx", "pptx"] {
            let report = simulate("report", ext).unwrap();
            assert_eq!(report.risk_level, RiskLevel::Medium);
            assert_eq!(report.metadata["Author"], "Corporate User");
            assert_eq!(report.metadata["Company"], "Tech Corp Ltd.");
            assert_eq!(report.warnings, vec![AUTHOR_WARNING.to_string()]);
        }
    }

    #[test]
    fn other_types_fall_back_to_generic_fields() {
        let report = simulate("archive", ".ZIP").unwrap();
        assert_eq!(report.file_type, "zip");
        assert_eq!(report.risk_level, RiskLevel::Low);
        assert_eq!(report.metadata["MIME Type"], "application/zip");
        assert_eq!(report.metadata["Encoding"], "UTF-8");
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn fingerprint_uses_raw_file_type_length() {
        // ".jpg" is 4 long: 9 + 4 = 13, odd, even though "jpg" alone would be even
        let report = simulate("photo.jpg", ".jpg").unwrap();
        assert_eq!(report.risk_level, RiskLevel::Low);
    }

    #[test]
    fn empty_inputs_are_rejected() {
        assert_eq!(simulate("", "jpg"), Err(OsintError::EmptyInput("file name")));
        assert_eq!(simulate("a", ""), Err(OsintError::EmptyInput("file type")));
    }

    #[test]
    fn serializes_metadata_as_object() {
        let json = serde_json::to_value(simulate("photo.jpg", "jpg").unwrap()).unwrap();
        assert_eq!(json["fileName"], "photo.jpg");
        assert_eq!(json["fileType"], "jpg");
        assert_eq!(json["riskLevel"], "High");
        assert_eq!(json["metadata"]["Camera Model"], "iPhone 14 Pro");
    }
}
