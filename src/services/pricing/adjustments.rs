//! Service-specific fees

use super::attributes::ServiceAttributes;
use super::types::{Adjustments, ServiceType};

pub const PETS_FEE: f64 = 25.0;
pub const SUPPLIES_NOT_PROVIDED_FEE: f64 = 15.0;
pub const AFTER_HOURS_FEE: f64 = 50.0;
pub const LARGE_FACILITY_FEE: f64 = 75.0;
pub const PET_ODORS_FEE: f64 = 50.0;
pub const PROTECTION_TREATMENT_FEE: f64 = 35.0;
pub const SCREEN_CLEANING_PER_WINDOW: f64 = 2.0;
pub const SILL_CLEANING_PER_WINDOW: f64 = 1.5;
pub const TWO_STORY_PREMIUM: f64 = 0.25;
pub const THREE_PLUS_STORY_PREMIUM: f64 = 0.50;
pub const FURNITURE_MOVING_FEE: f64 = 75.0;
pub const QUICK_DRY_FEE: f64 = 25.0;

/// Named fees for a request; `total` is left unrounded for the caller
///
/// `base_price` is the unadjusted unit price, which the window height
/// premium is a percentage of.
pub fn service_adjustments(
    service_type: ServiceType,
    data: &ServiceAttributes,
    window_count: f64,
    base_price: f64,
) -> Adjustments {
    let mut adjustments = Adjustments::default();

    match service_type {
        ServiceType::Residential => {
            if data.flag("pets") {
                adjustments.set("pets", PETS_FEE);
            }
            if !data.flag("cleaning_supplies_provided") {
                adjustments.set("supplies_not_provided", SUPPLIES_NOT_PROVIDED_FEE);
            }
        }
        ServiceType::Commercial => {
            if data.is("cleaning_schedule_preference", "after_hours") {
                adjustments.set("after_hours", AFTER_HOURS_FEE);
            }
            if data.number("employee_count") > 50.0 {
                adjustments.set("large_facility", LARGE_FACILITY_FEE);
            }
        }
        ServiceType::Carpet => {
            if data.flag("pet_odors") {
                adjustments.set("pet_odors", PET_ODORS_FEE);
            }
            if data.flag("protection_treatment") {
                adjustments.set("protection_treatment", PROTECTION_TREATMENT_FEE);
            }
        }
        ServiceType::Window => {
            if data.flag("screen_cleaning") {
                adjustments.set("screen_cleaning", window_count * SCREEN_CLEANING_PER_WINDOW);
            }
            if data.flag("sill_cleaning") {
                adjustments.set("sill_cleaning", window_count * SILL_CLEANING_PER_WINDOW);
            }
            if data.is("story_height", "two") {
                adjustments.set("height_premium", base_price * TWO_STORY_PREMIUM);
            }
            if data.is("story_height", "three_plus") {
                adjustments.set("height_premium", base_price * THREE_PLUS_STORY_PREMIUM);
            }
        }
        ServiceType::Floor => {
            if data.flag("furniture_moving") {
                adjustments.set("furniture_moving", FURNITURE_MOVING_FEE);
            }
            if data.is("drying_time_preference", "quick_dry") {
                adjustments.set("quick_dry", QUICK_DRY_FEE);
            }
        }
    }

    adjustments.total = adjustments.items.values().sum();
    adjustments
}
