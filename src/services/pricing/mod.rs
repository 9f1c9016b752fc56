//! Proposal pricing engine
//!
//! Turns a service request (type, size, frequency and service-specific
//! attributes) into a price breakdown using caller-supplied settings.
//! Everything here is pure computation: no I/O and no shared state.

mod adjustments;
mod attributes;
mod complexity;
pub mod detailed;
mod engine;
pub mod format;
mod labor;
mod types;


// Re-export public types
pub use adjustments::service_adjustments;
pub use attributes::{
    DEFAULT_FREQUENCY, ServiceAttributes, coerce_number, default_frequency, lenient_frequency,
    lenient_number,
};
pub use complexity::{MIN_COMPLEXITY_FACTOR, complexity_factor};
pub use detailed::{calculate_detailed_pricing, estimate_detailed_labor_hours};
pub use engine::{PricingEngine, calculate_pricing, get_quick_estimate};
pub use format::{format_currency, format_percentage, round_currency};
pub use labor::{MIN_LABOR_HOURS, labor_hours};
pub use types::{
    Adjustments, CalculationDetails, DetailedPricing, PricingBreakdown, PricingRequest,
    ServiceType, UnitType,
};
