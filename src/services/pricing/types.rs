//! Type definitions for the pricing engine

use super::attributes::{
    ServiceAttributes, default_frequency, lenient_frequency, lenient_number,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Kind of cleaning service being quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    /// Homes and apartments, priced per square foot
    Residential,
    /// Offices and other business premises, priced per square foot
    Commercial,
    /// Carpet shampoo and extraction, priced per square foot
    Carpet,
    /// Window washing, priced per window
    Window,
    /// Hard floor strip and refinish, priced per square foot
    Floor,
}

impl ServiceType {
    /// All service types, in display order
    pub const ALL: [ServiceType; 5] = [
        ServiceType::Residential,
        ServiceType::Commercial,
        ServiceType::Carpet,
        ServiceType::Window,
        ServiceType::Floor,
    ];

    /// Key used in the settings rate tables
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Residential => "residential",
            ServiceType::Commercial => "commercial",
            ServiceType::Carpet => "carpet",
            ServiceType::Window => "window",
            ServiceType::Floor => "floor",
        }
    }

    /// Unit the base rate is charged against
    pub fn unit_type(&self) -> UnitType {
        match self {
            ServiceType::Window => UnitType::Windows,
            _ => UnitType::SquareFeet,
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "residential" => Ok(ServiceType::Residential),
            "commercial" => Ok(ServiceType::Commercial),
            "carpet" => Ok(ServiceType::Carpet),
            "window" => Ok(ServiceType::Window),
            "floor" => Ok(ServiceType::Floor),
            other => Err(format!(
                "Unknown service type '{}', expected one of: residential, commercial, carpet, window, floor",
                other
            )),
        }
    }
}

/// Unit a base rate applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitType {
    #[serde(rename = "square feet")]
    SquareFeet,
    #[serde(rename = "windows")]
    Windows,
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitType::SquareFeet => f.write_str("square feet"),
            UnitType::Windows => f.write_str("windows"),
        }
    }
}

/// A single pricing request as captured by the proposal form
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingRequest {
    /// Service being quoted
    #[serde(alias = "serviceType")]
    pub service_type: ServiceType,
    /// Service area in square feet (ignored for window service)
    #[serde(alias = "facilitySize", default, deserialize_with = "lenient_number")]
    pub facility_size: f64,
    /// Frequency key, e.g. `weekly` or `2x-week`
    #[serde(
        alias = "serviceFrequency",
        default = "default_frequency",
        deserialize_with = "lenient_frequency"
    )]
    pub service_frequency: String,
    /// Service-specific attributes
    #[serde(alias = "serviceSpecificData", default)]
    pub service_specific_data: ServiceAttributes,
}

impl PricingRequest {
    /// Create a request with no service-specific attributes
    pub fn new(service_type: ServiceType, facility_size: f64, service_frequency: &str) -> Self {
        Self {
            service_type,
            facility_size,
            service_frequency: service_frequency.to_string(),
            service_specific_data: ServiceAttributes::default(),
        }
    }

    /// Attach an attribute, builder style
    pub fn with_attribute<V: Into<serde_json::Value>>(mut self, key: &str, value: V) -> Self {
        self.service_specific_data.insert(key, value);
        self
    }

    /// Facility size with negative and non-finite values treated as zero
    pub fn sanitized_facility_size(&self) -> f64 {
        if self.facility_size.is_finite() && self.facility_size > 0.0 {
            self.facility_size
        } else {
            0.0
        }
    }

    /// Window count for window service, defaulting to one
    pub fn window_count(&self) -> f64 {
        let count = self.service_specific_data.number("window_count");
        if count > 0.0 { count } else { 1.0 }
    }
}

/// Named service-specific fees
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Adjustments {
    /// Fee name to amount
    #[serde(flatten)]
    pub items: BTreeMap<String, f64>,
    /// Sum of all fees
    pub total: f64,
}

impl Adjustments {
    /// Set a fee, replacing an existing fee with the same name
    pub fn set(&mut self, name: &str, amount: f64) {
        self.items.insert(name.to_string(), amount);
    }

    /// Amount of a named fee
    pub fn get(&self, name: &str) -> Option<f64> {
        self.items.get(name).copied()
    }

    /// Whether no fee applied
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Inputs the calculation used, kept for traceability
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalculationDetails {
    /// Base rate per unit
    pub base_rate: f64,
    /// Unit the base rate applies to
    pub unit_type: UnitType,
    /// Number of units priced
    pub units: f64,
    /// Complexity factor applied to the base price
    pub complexity_factor: f64,
    /// Units per hour for this service type
    pub production_rate: f64,
    /// Price after complexity and frequency, before fees
    pub frequency_adjusted_price: f64,
}

/// Full price breakdown for a request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PricingBreakdown {
    pub base_price: f64,
    pub complexity_factor: f64,
    pub frequency_multiplier: f64,
    pub subtotal: f64,
    pub adjustments: Adjustments,
    pub labor_hours: f64,
    /// Informational; not part of `subtotal` or `total`
    pub labor_cost: f64,
    pub overhead_amount: f64,
    pub margin_amount: f64,
    pub total: f64,
    pub calculation_details: CalculationDetails,
}

/// Result of the legacy detailed calculation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetailedPricing {
    pub base_price: f64,
    pub frequency_multiplier: f64,
    pub labor_hours: f64,
    pub labor_cost: f64,
    /// Frequency-adjusted base price plus labor cost
    pub subtotal: f64,
    pub overhead_amount: f64,
    pub margin_amount: f64,
    pub total: f64,
}
