//! Pricing settings validators

use super::trait_def::Validate;
use crate::config::models::PricingSettings;
use std::collections::BTreeMap;
use tracing::{debug, warn};

impl Validate for PricingSettings {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating pricing settings");

        if !self.labor_rate.is_finite() || self.labor_rate <= 0.0 {
            return Err(format!(
                "Labor rate must be a positive number, got {}",
                self.labor_rate
            ));
        }

        validate_percentage("Overhead percentage", self.overhead_percentage)?;
        validate_percentage("Margin percentage", self.margin_percentage)?;

        validate_table("Service type rate", &self.service_type_rates)?;
        validate_table("Frequency multiplier", &self.frequency_multipliers)?;
        validate_table("Production rate", &self.production_rates)?;

        Ok(())
    }
}

fn validate_percentage(name: &str, value: f64) -> Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{} must be a non-negative number, got {}", name, value));
    }
    if value > 100.0 {
        warn!("{} of {} is above 100%", name, value);
    }
    Ok(())
}

fn validate_table(name: &str, table: &BTreeMap<String, f64>) -> Result<(), String> {
    for (key, value) in table {
        if key.trim().is_empty() {
            return Err(format!("{} key cannot be empty", name));
        }
        if !value.is_finite() || *value < 0.0 {
            return Err(format!(
                "{} for '{}' must be a non-negative number, got {}",
                name, key, value
            ));
        }
    }
    Ok(())
}
