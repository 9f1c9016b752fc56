//! Complexity factor rules
//!
//! Bumps are independent checks, not tiers: a commercial site with more
//! than 100 employees also clears the 50-employee check and gets both.

use super::attributes::ServiceAttributes;
use super::format::round_to;
use super::types::ServiceType;

/// Floor for the complexity factor
pub const MIN_COMPLEXITY_FACTOR: f64 = 1.0;

/// Complexity factor for a service type and its attributes
pub fn complexity_factor(service_type: ServiceType, data: &ServiceAttributes) -> f64 {
    let mut factor = MIN_COMPLEXITY_FACTOR;

    match service_type {
        ServiceType::Residential => {
            if data.number("bedrooms") > 4.0 {
                factor += 0.10;
            }
            if data.number("bathrooms") > 3.0 {
                factor += 0.10;
            }
            if data.flag("pets") {
                factor += 0.05;
            }
        }
        ServiceType::Commercial => {
            let employees = data.number("employee_count");
            if employees > 100.0 {
                factor += 0.20;
            }
            if employees > 50.0 {
                factor += 0.10;
            }
            if data.is("cleaning_schedule_preference", "during_hours") {
                factor += 0.15;
            }
        }
        ServiceType::Carpet => {
            if data.is("carpet_age", "5+_years") {
                factor += 0.15;
            }
            if data.is("carpet_age", "3-5_years") {
                factor += 0.10;
            }
            if data.is("floor_condition", "poor") {
                factor += 0.20;
            }
        }
        ServiceType::Window => {
            if data.is("story_height", "three_plus") {
                factor += 0.30;
            }
            if data.is("story_height", "two") {
                factor += 0.15;
            }
            if data.is("exterior_access", "lift_required") {
                factor += 0.40;
            }
            if data.is("exterior_access", "ladder_required") {
                factor += 0.20;
            }
        }
        ServiceType::Floor => {
            if data.is("floor_condition", "poor") {
                factor += 0.25;
            }
            if data.is("floor_condition", "fair") {
                factor += 0.15;
            }
            if data.flag("furniture_moving") {
                factor += 0.20;
            }
        }
    }

    // Every bump is a multiple of 0.05; normalizing drops float noise
    round_to(factor.max(MIN_COMPLEXITY_FACTOR), 2)
}
