//! Status and version endpoints

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::services::ServiceType;
use actix_web::{HttpResponse, web};
use std::borrow::Cow;
use tracing::debug;

/// Configure status routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/status", web::get().to(system_status))
        .route("/version", web::get().to(version_info));
}

/// System status endpoint
///
/// Returns service information and the shape of the configured pricing.
pub async fn system_status(state: web::Data<AppState>) -> HttpResponse {
    debug!("System status requested");

    let pricing = state.config.pricing();
    let status = SystemStatus {
        service_name: Cow::Borrowed("Janitorial Pricing Service"),
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        uptime_seconds: state.uptime_seconds(),
        timestamp: chrono::Utc::now(),
        environment: std::env::var("ENVIRONMENT")
            .map(Cow::Owned)
            .unwrap_or(Cow::Borrowed("development")),
        config: SystemConfig {
            server_host: state.config.server().host.clone(),
            server_port: state.config.server().port,
            service_types: ServiceType::ALL.iter().map(|t| t.as_str()).collect(),
            frequencies: pricing.frequency_multipliers.keys().cloned().collect(),
        },
    };

    HttpResponse::Ok().json(ApiResponse::success(status))
}

/// Version information endpoint
pub async fn version_info() -> HttpResponse {
    debug!("Version info requested");

    let info = VersionInfo {
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        build_time: Cow::Borrowed(env!("BUILD_TIME")),
        git_hash: Cow::Borrowed(env!("GIT_HASH")),
        rust_version: Cow::Borrowed(env!("RUST_VERSION")),
    };

    HttpResponse::Ok().json(ApiResponse::success(info))
}

#[derive(Debug, Clone, serde::Serialize)]
struct SystemStatus {
    service_name: Cow<'static, str>,
    version: Cow<'static, str>,
    uptime_seconds: u64,
    timestamp: chrono::DateTime<chrono::Utc>,
    environment: Cow<'static, str>,
    config: SystemConfig,
}

#[derive(Debug, Clone, serde::Serialize)]
struct SystemConfig {
    server_host: String,
    server_port: u16,
    service_types: Vec<&'static str>,
    frequencies: Vec<String>,
}

#[derive(Debug, Clone, serde::Serialize)]
struct VersionInfo {
    version: Cow<'static, str>,
    build_time: Cow<'static, str>,
    git_hash: Cow<'static, str>,
    rust_version: Cow<'static, str>,
}
