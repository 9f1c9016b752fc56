//! Main pricing engine implementation

use super::adjustments::service_adjustments;
use super::complexity::complexity_factor;
use super::format::round_currency;
use super::labor::labor_hours;
use super::types::{
    Adjustments, CalculationDetails, PricingBreakdown, PricingRequest, ServiceType, UnitType,
};
use crate::config::PricingSettings;
use crate::utils::error::{PricingError, Result};
use tracing::debug;

/// Deterministic proposal pricing
///
/// The engine owns a copy of the settings it was built with and holds no
/// other state, so one instance can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct PricingEngine {
    settings: PricingSettings,
}

impl PricingEngine {
    /// Create an engine from caller-supplied settings
    ///
    /// Fails only when no settings are supplied at all; sparse settings are
    /// accepted and degrade to fallback coefficients at calculation time.
    pub fn new(settings: Option<PricingSettings>) -> Result<Self> {
        let settings = settings.ok_or_else(PricingError::configuration_required)?;
        Ok(Self { settings })
    }

    /// Create an engine using the default settings
    pub fn with_defaults() -> Self {
        Self {
            settings: PricingSettings::default(),
        }
    }

    /// Settings this engine calculates with
    pub fn settings(&self) -> &PricingSettings {
        &self.settings
    }

    /// Calculate a full price breakdown
    pub fn calculate_pricing(&self, request: &PricingRequest) -> PricingBreakdown {
        calculate_pricing(request, &self.settings)
    }

    /// Rough quote without complexity, fees or labor
    ///
    /// `facility_size` is read as the unit count for the service type, so
    /// for window service it is the number of windows.
    pub fn get_quick_estimate(
        &self,
        service_type: ServiceType,
        facility_size: f64,
        service_frequency: &str,
    ) -> f64 {
        get_quick_estimate(service_type, facility_size, service_frequency, &self.settings)
    }
}

/// Calculate a breakdown with the given settings
pub fn calculate_pricing(request: &PricingRequest, settings: &PricingSettings) -> PricingBreakdown {
    let service_type = request.service_type;
    let data = &request.service_specific_data;
    let facility_size = request.sanitized_facility_size();
    let window_count = request.window_count();

    // Base price
    let unit_type = service_type.unit_type();
    let units = match unit_type {
        UnitType::Windows => window_count,
        UnitType::SquareFeet => facility_size,
    };
    let base_rate = settings.base_rate(service_type.as_str());
    let base_price = units * base_rate;

    // Complexity
    let complexity = complexity_factor(service_type, data);
    let adjusted_base_price = base_price * complexity;

    // Frequency
    let frequency_multiplier = settings.frequency_multiplier(&request.service_frequency);
    let frequency_adjusted_price = adjusted_base_price * frequency_multiplier;

    // Service-specific fees
    let adjustments = service_adjustments(service_type, data, window_count, base_price);
    let subtotal = frequency_adjusted_price + adjustments.total;

    // Labor is an allocation estimate and stays out of the client price
    let hours = labor_hours(service_type, data, facility_size, window_count);
    let labor_cost = hours * settings.labor_rate;

    let overhead_amount = subtotal * settings.overhead_percentage / 100.0;
    let margin_amount = subtotal * settings.margin_percentage / 100.0;
    let total = subtotal + overhead_amount + margin_amount;

    debug!(
        service_type = %service_type,
        frequency = %request.service_frequency,
        units,
        base_rate,
        complexity,
        frequency_multiplier,
        total,
        "Calculated pricing"
    );

    PricingBreakdown {
        base_price: round_currency(base_price),
        complexity_factor: complexity,
        frequency_multiplier,
        subtotal: round_currency(subtotal),
        adjustments: round_adjustments(adjustments),
        labor_hours: hours,
        labor_cost: round_currency(labor_cost),
        overhead_amount: round_currency(overhead_amount),
        margin_amount: round_currency(margin_amount),
        total: round_currency(total),
        calculation_details: CalculationDetails {
            base_rate,
            unit_type,
            units,
            complexity_factor: complexity,
            production_rate: settings.production_rate(service_type.as_str()),
            frequency_adjusted_price: round_currency(frequency_adjusted_price),
        },
    }
}

fn round_adjustments(adjustments: Adjustments) -> Adjustments {
    Adjustments {
        items: adjustments
            .items
            .into_iter()
            .map(|(name, amount)| (name, round_currency(amount)))
            .collect(),
        total: round_currency(adjustments.total),
    }
}

/// Quick estimate with the given settings
pub fn get_quick_estimate(
    service_type: ServiceType,
    facility_size: f64,
    service_frequency: &str,
    settings: &PricingSettings,
) -> f64 {
    let units = if facility_size.is_finite() && facility_size > 0.0 {
        facility_size
    } else {
        0.0
    };

    let base_price = units * settings.base_rate(service_type.as_str());
    let price = base_price * settings.frequency_multiplier(service_frequency);
    let overhead = price * settings.overhead_percentage / 100.0;
    let margin = price * settings.margin_percentage / 100.0;

    round_currency(price + overhead + margin)
}
