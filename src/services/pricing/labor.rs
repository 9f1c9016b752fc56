//! Labor hour estimates
//!
//! Hours come from fixed per-hour coverage figures, not from price.

use super::attributes::ServiceAttributes;
use super::types::ServiceType;

/// Minimum billable labor hours
pub const MIN_LABOR_HOURS: f64 = 1.0;

/// Estimated labor hours for a request
pub fn labor_hours(
    service_type: ServiceType,
    data: &ServiceAttributes,
    facility_size: f64,
    window_count: f64,
) -> f64 {
    let hours = match service_type {
        ServiceType::Residential => {
            let mut hours = (facility_size / 400.0).ceil();
            if data.number("bedrooms") > 3.0 {
                hours += 1.0;
            }
            if data.number("bathrooms") > 2.0 {
                hours += 0.5;
            }
            hours
        }
        ServiceType::Commercial => {
            let mut hours = (facility_size / 600.0).ceil();
            if data.number("employee_count") > 50.0 {
                hours += 2.0;
            }
            hours
        }
        ServiceType::Carpet => {
            let mut hours = (facility_size / 300.0).ceil();
            if data.flag("pet_odors") {
                hours += 1.0;
            }
            if data.flag("protection_treatment") {
                hours += 0.5;
            }
            hours
        }
        ServiceType::Window => {
            let mut hours = (window_count / 12.0).ceil();
            if data.is("story_height", "two") {
                hours += (window_count / 20.0).ceil();
            }
            if data.is("story_height", "three_plus") {
                hours += (window_count / 15.0).ceil();
            }
            hours
        }
        ServiceType::Floor => {
            let mut hours = (facility_size / 250.0).ceil();
            if data.flag("furniture_moving") {
                hours += 2.0;
            }
            hours
        }
    };

    hours.max(MIN_LABOR_HOURS)
}
