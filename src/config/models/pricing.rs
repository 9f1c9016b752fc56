//! Pricing settings models
//!
//! This module provides the rate tables and loadings consumed by the pricing engine

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Base rate used when a service type has no entry in `service_type_rates`
pub const FALLBACK_BASE_RATE: f64 = 0.15;

/// Multiplier used when a frequency has no entry in `frequency_multipliers`
pub const FALLBACK_FREQUENCY_MULTIPLIER: f64 = 1.0;

/// Production rate used when a service type has no entry in `production_rates`
pub const FALLBACK_PRODUCTION_RATE: f64 = 1000.0;

/// Pricing settings for a single account
///
/// Missing fields are filled from [`PricingSettings::default`]. A map that is
/// present but lacks a key falls back per key (see the `FALLBACK_*` constants),
/// so sparse settings never block a calculation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PricingSettings {
    /// Labor rate in currency per hour
    #[serde(alias = "laborRate")]
    pub labor_rate: f64,
    /// Overhead loading applied to the subtotal, in percent
    #[serde(alias = "overheadPercentage")]
    pub overhead_percentage: f64,
    /// Profit margin applied to the subtotal, in percent
    #[serde(alias = "marginPercentage")]
    pub margin_percentage: f64,
    /// Units cleaned per hour, keyed by service type
    #[serde(alias = "productionRates")]
    pub production_rates: BTreeMap<String, f64>,
    /// Recurring-service factors, keyed by frequency
    #[serde(alias = "frequencyMultipliers")]
    pub frequency_multipliers: BTreeMap<String, f64>,
    /// Base rate per unit, keyed by service type
    #[serde(alias = "serviceTypeRates")]
    pub service_type_rates: BTreeMap<String, f64>,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            labor_rate: 25.0,
            overhead_percentage: 15.0,
            margin_percentage: 20.0,
            production_rates: rate_table(&[
                ("residential", 2500.0),
                ("commercial", 3000.0),
                ("carpet", 1500.0),
                ("window", 20.0),
                ("floor", 1000.0),
            ]),
            frequency_multipliers: rate_table(&[
                ("one-time", 1.0),
                ("weekly", 1.0),
                ("bi-weekly", 1.1),
                ("1x-month", 1.2),
                ("2x-week", 0.95),
                ("3x-week", 0.9),
                ("5x-week", 0.85),
                ("daily", 0.8),
            ]),
            service_type_rates: rate_table(&[
                ("residential", 0.12),
                ("commercial", 0.10),
                ("carpet", 0.30),
                ("window", 5.0),
                ("floor", 0.35),
            ]),
        }
    }
}

/// The named default settings used when an account has not configured its own
pub fn default_pricing_settings() -> PricingSettings {
    PricingSettings::default()
}

impl PricingSettings {
    /// Base rate for a service type key
    pub fn base_rate(&self, service_type: &str) -> f64 {
        self.service_type_rates
            .get(service_type)
            .copied()
            .unwrap_or(FALLBACK_BASE_RATE)
    }

    /// Multiplier for a frequency key
    pub fn frequency_multiplier(&self, frequency: &str) -> f64 {
        self.frequency_multipliers
            .get(frequency)
            .copied()
            .unwrap_or(FALLBACK_FREQUENCY_MULTIPLIER)
    }

    /// Production rate for a service type key
    pub fn production_rate(&self, service_type: &str) -> f64 {
        self.production_rates
            .get(service_type)
            .copied()
            .unwrap_or(FALLBACK_PRODUCTION_RATE)
    }

    /// Set or replace a base rate
    pub fn set_base_rate(&mut self, service_type: &str, rate: f64) {
        self.service_type_rates
            .insert(service_type.to_string(), rate);
    }

    /// Set or replace a frequency multiplier
    pub fn set_frequency_multiplier(&mut self, frequency: &str, multiplier: f64) {
        self.frequency_multipliers
            .insert(frequency.to_string(), multiplier);
    }

    /// Merge pricing settings (other takes precedence for non-default values)
    pub fn merge(mut self, other: Self) -> Self {
        let defaults = Self::default();
        if other.labor_rate != defaults.labor_rate {
            self.labor_rate = other.labor_rate;
        }
        if other.overhead_percentage != defaults.overhead_percentage {
            self.overhead_percentage = other.overhead_percentage;
        }
        if other.margin_percentage != defaults.margin_percentage {
            self.margin_percentage = other.margin_percentage;
        }
        self.production_rates.extend(other.production_rates);
        self.frequency_multipliers
            .extend(other.frequency_multipliers);
        self.service_type_rates.extend(other.service_type_rates);
        self
    }
}

fn rate_table(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), *value))
        .collect()
}
