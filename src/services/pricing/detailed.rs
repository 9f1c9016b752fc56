//! Legacy detailed pricing
//!
//! An older calculation path that predates per-service rate tables. It uses
//! one flat base rate and folds labor cost into the subtotal, so its totals
//! differ from [`calculate_pricing`](super::calculate_pricing) for the same
//! input. Kept as a separate operation for proposals drafted against it.

use super::format::round_currency;
use super::labor::MIN_LABOR_HOURS;
use super::types::DetailedPricing;
use crate::config::PricingSettings;

/// Flat base rate per square foot
pub const DETAILED_BASE_RATE: f64 = 0.15;

/// Square feet covered per labor hour
pub const DETAILED_SQFT_PER_HOUR: f64 = 1000.0;

/// Labor hours at the flat coverage rate, minimum one hour
pub fn estimate_detailed_labor_hours(facility_size: f64) -> f64 {
    let size = if facility_size.is_finite() && facility_size > 0.0 {
        facility_size
    } else {
        0.0
    };
    (size / DETAILED_SQFT_PER_HOUR).ceil().max(MIN_LABOR_HOURS)
}

/// Price a facility with the flat legacy coefficients
pub fn calculate_detailed_pricing(
    facility_size: f64,
    service_frequency: &str,
    settings: &PricingSettings,
) -> DetailedPricing {
    let size = if facility_size.is_finite() && facility_size > 0.0 {
        facility_size
    } else {
        0.0
    };

    let base_price = size * DETAILED_BASE_RATE;
    let frequency_multiplier = settings.frequency_multiplier(service_frequency);
    let labor_hours = estimate_detailed_labor_hours(size);
    let labor_cost = labor_hours * settings.labor_rate;

    let subtotal = base_price * frequency_multiplier + labor_cost;
    let overhead_amount = subtotal * settings.overhead_percentage / 100.0;
    let margin_amount = subtotal * settings.margin_percentage / 100.0;
    let total = subtotal + overhead_amount + margin_amount;

    DetailedPricing {
        base_price: round_currency(base_price),
        frequency_multiplier,
        labor_hours,
        labor_cost: round_currency(labor_cost),
        subtotal: round_currency(subtotal),
        overhead_amount: round_currency(overhead_amount),
        margin_amount: round_currency(margin_amount),
        total: round_currency(total),
    }
}
