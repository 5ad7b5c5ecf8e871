// src/api/handlers/mod.rs
use actix_web::{web, HttpResponse};
use serde::Serialize;
use uuid::Uuid;
use crate::api::error::ApiError;
use crate::core::AppState;
use crate::logging::LogLevel;

pub mod osint;
pub mod scan;
pub mod system;

/// Unwrap a JSON body. A body that fails to parse is an unexpected failure,
/// not a validation error, so it maps to the endpoint's generic message.
pub(crate) fn parse_body<T>(
    body: Result<web::Json<T>, actix_web::Error>,
    failure: &'static str,
) -> Result<T, ApiError> {
    body.map(web::Json::into_inner)
        .map_err(|e| ApiError::failed(failure, e))
}

/// Missing, null and empty values are all rejected with `message`.
pub(crate) fn required(value: Option<String>, message: &'static str) -> Result<String, ApiError> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(ApiError::BadRequest(message)),
    }
}

/// Record the outcome in the activity log and turn it into a response.
pub(crate) fn respond<T: Serialize>(
    state: &AppState,
    component: &str,
    outcome: Result<T, ApiError>,
) -> Result<HttpResponse, ApiError> {
    let request_id = Uuid::new_v4();

    let written = match &outcome {
        Ok(_) => state.logger.log(LogLevel::Info, component, "lookup served", Some(request_id), None),
        Err(ApiError::BadRequest(message)) => state.logger.log(
            LogLevel::Warning,
            component,
            &format!("validation rejected: {}", message),
            Some(request_id),
            None,
        ),
        Err(ApiError::Failed { message, detail }) => {
            log::error!("{} failed ({}): {}", component, request_id, detail);
            state.logger.log(LogLevel::Error, component, message, Some(request_id), Some(detail.as_str()))
        }
    };

    if let Err(e) = written {
        log::warn!("Failed to write activity log entry: {}", e);
    }

    let report = outcome?;
    Ok(HttpResponse::Ok()
        .insert_header(("X-Request-Id", request_id.to_string()))
        .json(report))
}
