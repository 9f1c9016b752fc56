//! Test fixtures and data factories
//!
//! Provides factory methods for creating test data with sensible defaults.

use janitor_pricing::{PricingRequest, PricingSettings, ServiceType};
use serde_json::json;

/// Factory for pricing requests
pub struct RequestFactory;

impl RequestFactory {
    /// A mid-size house, weekly, with pets and no supplies on site
    pub fn residential() -> PricingRequest {
        PricingRequest::new(ServiceType::Residential, 2500.0, "weekly")
            .with_attribute("bedrooms", 3)
            .with_attribute("bathrooms", 2)
            .with_attribute("pets", true)
    }

    /// A large office cleaned after hours three times a week
    pub fn commercial() -> PricingRequest {
        PricingRequest::new(ServiceType::Commercial, 10000.0, "3x-week")
            .with_attribute("employee_count", 75)
            .with_attribute("restroom_count", 4)
            .with_attribute("cleaning_schedule_preference", "after_hours")
    }

    /// A two-story window job with screens
    pub fn window() -> PricingRequest {
        PricingRequest::new(ServiceType::Window, 0.0, "one-time")
            .with_attribute("window_count", 20)
            .with_attribute("story_height", "two")
            .with_attribute("screen_cleaning", true)
    }

    /// Old carpet with pet odors
    pub fn carpet() -> PricingRequest {
        PricingRequest::new(ServiceType::Carpet, 1000.0, "one-time")
            .with_attribute("carpet_age", "5+_years")
            .with_attribute("pet_odors", true)
    }

    /// Floor refinish in a furnished room
    pub fn floor() -> PricingRequest {
        PricingRequest::new(ServiceType::Floor, 1000.0, "1x-month")
            .with_attribute("floor_condition", "poor")
            .with_attribute("furniture_moving", true)
    }

    /// One request per service type
    pub fn all() -> Vec<PricingRequest> {
        vec![
            Self::residential(),
            Self::commercial(),
            Self::window(),
            Self::carpet(),
            Self::floor(),
        ]
    }

    /// Request as a proposal form posts it, with camelCase keys and strings
    pub fn form_json() -> serde_json::Value {
        json!({
            "serviceType": "residential",
            "facilitySize": 1800,
            "serviceFrequency": "bi-weekly",
            "serviceSpecificData": {
                "bedrooms": "4",
                "pets": "true",
                "cleaning_supplies_provided": "yes"
            }
        })
    }
}

/// Factory for pricing settings
pub struct SettingsFactory;

impl SettingsFactory {
    /// Built-in defaults
    pub fn defaults() -> PricingSettings {
        PricingSettings::default()
    }

    /// Settings with no overhead or margin, so totals equal subtotals
    pub fn at_cost() -> PricingSettings {
        PricingSettings {
            overhead_percentage: 0.0,
            margin_percentage: 0.0,
            ..PricingSettings::default()
        }
    }

    /// Settings with every rate table empty
    pub fn sparse() -> PricingSettings {
        serde_json::from_value(json!({
            "labor_rate": 30,
            "production_rates": {},
            "frequency_multipliers": {},
            "service_type_rates": {}
        }))
        .unwrap()
    }
}
