// src/api/error.rs
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;
use crate::api::types::ErrorResponse;

/// Errors returned from the HTTP handlers.
///
/// `BadRequest` carries a message meant for the caller. `Failed` carries a
/// generic message for the caller and a detail that only goes to the logs.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(&'static str),

    #[error("{message}")]
    Failed {
        message: &'static str,
        detail: String,
    },
}

impl ApiError {
    pub fn failed(message: &'static str, detail: impl std::fmt::Display) -> Self {
        ApiError::Failed {
            message,
            detail: detail.to_string(),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Failed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_hides_the_detail() {
        let err = ApiError::failed("DNS lookup failed", "fixture table empty");
        assert_eq!(err.to_string(), "DNS lookup failed");
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn bad_request_is_400() {
        let err = ApiError::BadRequest("Domain is required");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Domain is required");
    }
}
