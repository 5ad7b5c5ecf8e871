// src/api/handlers/scan.rs
use actix_web::{web, HttpResponse};
use crate::api::error::ApiError;
use crate::api::handlers::{parse_body, required, respond};
use crate::api::types::UrlRequest;
use crate::core::AppState;
use crate::scan;

/// Check a URL against the built-in reputation lists
#[utoipa::path(
    post,
    path = "/api/scan/url",
    tag = "Scan",
    request_body = UrlRequest,
    responses(
        (status = 200, description = "Reputation verdict", body = crate::scan::UrlCheckReport),
        (status = 400, description = "URL is required", body = crate::api::types::ErrorResponse),
        (status = 500, description = "URL check failed", body = crate::api::types::ErrorResponse)
    )
)]
pub async fn check_url(
    state: web::Data<AppState>,
    body: Result<web::Json<UrlRequest>, actix_web::Error>,
) -> Result<HttpResponse, ApiError> {
    const INVALID: &str = "URL is required";
    const FAILED: &str = "URL check failed";

    let outcome = parse_body(body, FAILED)
        .and_then(|req| required(req.url, INVALID))
        .and_then(|url| {
            scan::check_url(&url).map_err(|e| match e {
                scan::ScanError::EmptyUrl => ApiError::BadRequest(INVALID),
            })
        });

    respond(&state, "scan.url", outcome)
}
