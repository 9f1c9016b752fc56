//! Services module
//!
//! This module contains business logic and service implementations

pub mod pricing;

pub use pricing::{PricingBreakdown, PricingEngine, PricingRequest, ServiceType};
