//! HTTP response handling for errors

use super::types::PricingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl PricingError {
    /// HTTP status and stable error code for this error
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            PricingError::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR"),
            PricingError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            PricingError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            PricingError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            PricingError::Serialization(_) => (StatusCode::BAD_REQUEST, "PARSING_ERROR"),
            PricingError::Yaml(_) => (StatusCode::BAD_REQUEST, "PARSING_ERROR"),
            PricingError::Internal(_) | PricingError::Io(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        }
    }
}

impl ResponseError for PricingError {
    fn status_code(&self) -> StatusCode {
        self.status_and_code().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, error_code) = self.status_and_code();

        // Do not leak filesystem details to clients
        let message = match self {
            PricingError::Internal(_) | PricingError::Io(_) => {
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
            },
        };

        HttpResponse::build(status_code).json(error_response)
    }
}

/// Standard error response format
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
}
