// src/api/handlers/system.rs
use actix_web::{web, HttpResponse};
use log::error;
use crate::api::error::ApiError;
use crate::api::routes::SIMULATION_ENDPOINTS;
use crate::api::types::LogListResponse;
use crate::core::AppState;
use crate::logging::LogFilter;
use crate::system::SystemManager;

/// Get service status
#[utoipa::path(
    get,
    path = "/api/system/status",
    tag = "System",
    responses(
        (status = 200, description = "Current service status", body = crate::system::SystemStatus)
    )
)]
pub async fn get_status(state: web::Data<AppState>) -> HttpResponse {
    let mut system_manager = SystemManager::new();
    HttpResponse::Ok().json(system_manager.get_system_status(&state, SIMULATION_ENDPOINTS))
}

/// Get activity log entries
#[utoipa::path(
    get,
    path = "/api/system/logs",
    tag = "System",
    params(LogFilter),
    responses(
        (status = 200, description = "Filtered activity entries", body = crate::api::types::LogListResponse),
        (status = 500, description = "Failed to read logs", body = crate::api::types::ErrorResponse)
    )
)]
pub async fn get_logs(
    state: web::Data<AppState>,
    filter: web::Query<LogFilter>,
) -> Result<HttpResponse, ApiError> {
    let logs = state.logger.get_logs(&filter).map_err(|e| {
        error!("Failed to get logs: {}", e);
        ApiError::failed("Failed to read logs", e)
    })?;

    Ok(HttpResponse::Ok().json(LogListResponse {
        total: logs.len(),
        logs,
    }))
}
