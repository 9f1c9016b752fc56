//! Pricing API endpoints
//!
//! Each endpoint prices with the settings carried in the request body when
//! present, and with the service's configured settings otherwise.

use crate::config::PricingSettings;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::services::pricing::{
    self, DetailedPricing, PricingEngine, PricingRequest, ServiceType, default_frequency,
    format_currency, lenient_frequency, lenient_number,
};
use crate::utils::error::Result;
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use tracing::{debug, info};

const DEFAULT_CURRENCY: &str = "USD";

/// Full pricing request payload
/// POST /api/v1/pricing/calculate
#[derive(Debug, Deserialize)]
pub struct CalculateRequest {
    /// Request to price
    pub request: PricingRequest,
    /// Optional per-request settings
    #[serde(default)]
    pub settings: Option<PricingSettings>,
    /// Currency used for the formatted total
    #[serde(default)]
    pub currency: Option<String>,
}

/// Quick estimate payload
/// POST /api/v1/pricing/estimate
#[derive(Debug, Deserialize)]
pub struct EstimateRequest {
    #[serde(alias = "serviceType")]
    pub service_type: ServiceType,
    #[serde(alias = "facilitySize", default, deserialize_with = "lenient_number")]
    pub facility_size: f64,
    #[serde(
        alias = "serviceFrequency",
        default = "default_frequency",
        deserialize_with = "lenient_frequency"
    )]
    pub service_frequency: String,
    #[serde(default)]
    pub settings: Option<PricingSettings>,
    #[serde(default)]
    pub currency: Option<String>,
}

/// Quick estimate response
#[derive(Debug, Serialize, Deserialize)]
pub struct EstimateResponse {
    /// Rounded estimate
    pub estimate: f64,
    /// Estimate rendered for display
    pub formatted: String,
}

/// Legacy detailed pricing payload
/// POST /api/v1/pricing/detailed
#[derive(Debug, Deserialize)]
pub struct DetailedRequest {
    #[serde(alias = "facilitySize", default, deserialize_with = "lenient_number")]
    pub facility_size: f64,
    #[serde(
        alias = "serviceFrequency",
        default = "default_frequency",
        deserialize_with = "lenient_frequency"
    )]
    pub service_frequency: String,
    #[serde(default)]
    pub settings: Option<PricingSettings>,
}

/// Per-request settings if supplied, else the configured ones
fn resolve_settings<'a>(
    state: &'a AppState,
    settings: Option<PricingSettings>,
) -> Cow<'a, PricingSettings> {
    match settings {
        Some(settings) => Cow::Owned(settings),
        None => Cow::Borrowed(state.engine.settings()),
    }
}

/// Calculate a full price breakdown
pub async fn calculate(
    data: web::Data<AppState>,
    payload: web::Json<CalculateRequest>,
) -> Result<HttpResponse> {
    let CalculateRequest {
        request,
        settings,
        currency,
    } = payload.into_inner();
    info!(
        service_type = %request.service_type,
        frequency = %request.service_frequency,
        custom_settings = settings.is_some(),
        "Pricing calculation requested"
    );

    let breakdown = match settings {
        Some(settings) => PricingEngine::new(Some(settings))?.calculate_pricing(&request),
        None => data.engine.calculate_pricing(&request),
    };

    let currency = currency.as_deref().unwrap_or(DEFAULT_CURRENCY);
    let meta = serde_json::json!({
        "formatted_total": format_currency(breakdown.total, currency),
        "currency": currency.to_ascii_uppercase(),
    });

    Ok(HttpResponse::Ok().json(ApiResponse::success_with_meta(breakdown, meta)))
}

/// Quick estimate without complexity, fees or labor
pub async fn estimate(
    data: web::Data<AppState>,
    payload: web::Json<EstimateRequest>,
) -> Result<HttpResponse> {
    let EstimateRequest {
        service_type,
        facility_size,
        service_frequency,
        settings,
        currency,
    } = payload.into_inner();
    debug!(%service_type, facility_size, frequency = %service_frequency, "Quick estimate requested");

    let settings = resolve_settings(&data, settings);
    let estimate =
        pricing::get_quick_estimate(service_type, facility_size, &service_frequency, &settings);

    let response = EstimateResponse {
        estimate,
        formatted: format_currency(estimate, currency.as_deref().unwrap_or(DEFAULT_CURRENCY)),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(response)))
}

/// Legacy detailed pricing
pub async fn detailed(
    data: web::Data<AppState>,
    payload: web::Json<DetailedRequest>,
) -> Result<HttpResponse> {
    let DetailedRequest {
        facility_size,
        service_frequency,
        settings,
    } = payload.into_inner();
    debug!(facility_size, frequency = %service_frequency, "Detailed pricing requested");

    let settings = resolve_settings(&data, settings);
    let result: DetailedPricing =
        pricing::calculate_detailed_pricing(facility_size, &service_frequency, &settings);

    Ok(HttpResponse::Ok().json(ApiResponse::success(result)))
}

/// Configured pricing settings
pub async fn get_settings(data: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(ApiResponse::success(data.engine.settings()))
}

/// Configure pricing endpoints
pub fn configure_pricing_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/pricing")
            .route("/settings", web::get().to(get_settings))
            .route("/calculate", web::post().to(calculate))
            .route("/estimate", web::post().to(estimate))
            .route("/detailed", web::post().to(detailed)),
    );
}
