// src/api/handlers/osint.rs
use actix_web::{web, HttpResponse};
use crate::api::error::ApiError;
use crate::api::handlers::{parse_body, required, respond};
use crate::api::types::{DomainRequest, EmailRequest, MetadataRequest, UsernameRequest};
use crate::core::AppState;
use crate::osint::{darkweb, dns, email, metadata, social, whois, OsintError};

type Body<T> = Result<web::Json<T>, actix_web::Error>;

/// Check an email address against the simulated breach feed
#[utoipa::path(
    post,
    path = "/api/osint/darkweb",
    tag = "OSINT",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Breach report", body = crate::osint::darkweb::DarkwebReport),
        (status = 400, description = "Email is required", body = crate::api::types::ErrorResponse),
        (status = 500, description = "Dark web check failed", body = crate::api::types::ErrorResponse)
    )
)]
pub async fn check_darkweb(
    state: web::Data<AppState>,
    body: Body<EmailRequest>,
) -> Result<HttpResponse, ApiError> {
    const FAILED: &str = "Dark web check failed";

    let outcome = parse_body(body, FAILED)
        .and_then(|req| required(req.email, "Email is required"))
        .and_then(|email| {
            darkweb::simulate_with(&email, state.config.strategy)
                .map_err(|e| ApiError::failed(FAILED, e))
        });

    respond(&state, "osint.darkweb", outcome)
}

/// Generate DNS records for a domain
#[utoipa::path(
    post,
    path = "/api/osint/dns",
    tag = "OSINT",
    request_body = DomainRequest,
    responses(
        (status = 200, description = "DNS records", body = crate::osint::dns::DnsReport),
        (status = 400, description = "Domain is required", body = crate::api::types::ErrorResponse),
        (status = 500, description = "DNS lookup failed", body = crate::api::types::ErrorResponse)
    )
)]
pub async fn lookup_dns(
    state: web::Data<AppState>,
    body: Body<DomainRequest>,
) -> Result<HttpResponse, ApiError> {
    const FAILED: &str = "DNS lookup failed";

    let outcome = parse_body(body, FAILED)
        .and_then(|req| required(req.domain, "Domain is required"))
        .and_then(|domain| {
            dns::simulate_with(&domain, state.config.strategy)
                .map_err(|e| ApiError::failed(FAILED, e))
        });

    respond(&state, "osint.dns", outcome)
}

/// Harvest likely corporate addresses for a domain
#[utoipa::path(
    post,
    path = "/api/osint/email",
    tag = "OSINT",
    request_body = DomainRequest,
    responses(
        (status = 200, description = "Harvested addresses", body = crate::osint::email::EmailReport),
        (status = 400, description = "Valid domain required", body = crate::api::types::ErrorResponse),
        (status = 500, description = "Harvesting failed", body = crate::api::types::ErrorResponse)
    )
)]
pub async fn harvest_emails(
    state: web::Data<AppState>,
    body: Body<DomainRequest>,
) -> Result<HttpResponse, ApiError> {
    const INVALID: &str = "Valid domain required";
    const FAILED: &str = "Harvesting failed";

    let outcome = parse_body(body, FAILED)
        .and_then(|req| required(req.domain, INVALID))
        .and_then(|domain| {
            email::simulate_with(&domain, state.config.strategy).map_err(|e| match e {
                OsintError::InvalidDomain(_) => ApiError::BadRequest(INVALID),
                other => ApiError::failed(FAILED, other),
            })
        });

    respond(&state, "osint.email", outcome)
}

/// Extract simulated metadata for a file
#[utoipa::path(
    post,
    path = "/api/osint/metadata",
    tag = "OSINT",
    request_body = MetadataRequest,
    responses(
        (status = 200, description = "Extracted metadata", body = crate::osint::metadata::MetadataReport),
        (status = 400, description = "Invalid input", body = crate::api::types::ErrorResponse),
        (status = 500, description = "Analysis failed", body = crate::api::types::ErrorResponse)
    )
)]
pub async fn analyze_metadata(
    state: web::Data<AppState>,
    body: Body<MetadataRequest>,
) -> Result<HttpResponse, ApiError> {
    const INVALID: &str = "Invalid input";
    const FAILED: &str = "Analysis failed";

    let outcome = parse_body(body, FAILED)
        .and_then(|req| Ok((required(req.file_name, INVALID)?, required(req.file_type, INVALID)?)))
        .and_then(|(file_name, file_type)| {
            metadata::simulate_with(&file_name, &file_type, state.config.strategy)
                .map_err(|e| ApiError::failed(FAILED, e))
        });

    respond(&state, "osint.metadata", outcome)
}

/// Find profiles for a username across platforms
#[utoipa::path(
    post,
    path = "/api/osint/social",
    tag = "OSINT",
    request_body = UsernameRequest,
    responses(
        (status = 200, description = "Matching profiles", body = crate::osint::social::SocialReport),
        (status = 400, description = "Username required", body = crate::api::types::ErrorResponse),
        (status = 500, description = "Analysis failed", body = crate::api::types::ErrorResponse)
    )
)]
pub async fn find_profiles(
    state: web::Data<AppState>,
    body: Body<UsernameRequest>,
) -> Result<HttpResponse, ApiError> {
    const FAILED: &str = "Analysis failed";

    let outcome = parse_body(body, FAILED)
        .and_then(|req| required(req.username, "Username required"))
        .and_then(|username| {
            social::simulate_with(&username, state.config.strategy)
                .map_err(|e| ApiError::failed(FAILED, e))
        });

    respond(&state, "osint.social", outcome)
}

/// Generate a WHOIS record for a domain
#[utoipa::path(
    post,
    path = "/api/osint/whois",
    tag = "OSINT",
    request_body = DomainRequest,
    responses(
        (status = 200, description = "WHOIS record", body = crate::osint::whois::WhoisResponse),
        (status = 400, description = "Domain is required", body = crate::api::types::ErrorResponse),
        (status = 500, description = "WHOIS lookup failed", body = crate::api::types::ErrorResponse)
    )
)]
pub async fn lookup_whois(
    state: web::Data<AppState>,
    body: Body<DomainRequest>,
) -> Result<HttpResponse, ApiError> {
    const FAILED: &str = "WHOIS lookup failed";

    let outcome = parse_body(body, FAILED)
        .and_then(|req| required(req.domain, "Domain is required"))
        .and_then(|domain| {
            whois::simulate_with(&domain, state.config.strategy)
                .map_err(|e| ApiError::failed(FAILED, e))
        });

    respond(&state, "osint.whois", outcome)
}
