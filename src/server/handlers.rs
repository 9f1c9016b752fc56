//! HTTP route handlers
//!
//! This module provides HTTP route handler functions.

use crate::utils::error::{PricingError, Result};
use actix_web::{HttpRequest, HttpResponse};
use serde_json::json;

/// Health check endpoint handler
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Fallback for unmatched routes, rendered as a JSON error body
pub async fn route_not_found(req: HttpRequest) -> Result<HttpResponse> {
    Err(PricingError::not_found(format!(
        "No route for {} {}",
        req.method(),
        req.path()
    )))
}
