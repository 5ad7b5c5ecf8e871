// src/api/types.rs
use serde::{Serialize, Deserialize};
use utoipa::ToSchema;
use crate::logging::LogEntry;

// Lookup requests. Fields are optional so a missing, null or empty value
// can be answered with a 400 instead of a parse failure.

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct EmailRequest {
    /// Address to check against the breach feed
    #[schema(example = "bo@example.com")]
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DomainRequest {
    #[schema(example = "example.com")]
    pub domain: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UsernameRequest {
    #[schema(example = "johndoe")]
    pub username: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRequest {
    #[schema(example = "photo.jpg")]
    pub file_name: Option<String>,
    /// Extension, with or without the leading dot
    #[schema(example = "jpg")]
    pub file_type: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UrlRequest {
    #[schema(example = "https://github.com/rust-lang/rust")]
    pub url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Human readable error message
    pub error: String,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct LogListResponse {
    pub logs: Vec<LogEntry>,
    pub total: usize,
}
