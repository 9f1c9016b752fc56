//! # janitor-pricing
//!
//! Deterministic pricing for janitorial service proposals.
//!
//! Given a service type, a facility size, a visit frequency and a bag of
//! service-specific attributes, the engine produces an itemized breakdown:
//! base price, complexity factor, frequency multiplier, named fees, labor
//! estimate, overhead, margin and total. The same engine backs the HTTP
//! service (`pricing-server`) and the command line tool (`pricing-tool`).
//!
//! ## Quick Start
//!
//! ```rust
//! use janitor_pricing::{PricingEngine, PricingRequest, PricingSettings, ServiceType};
//!
//! let engine = PricingEngine::new(Some(PricingSettings::default())).unwrap();
//! let request = PricingRequest::new(ServiceType::Residential, 2500.0, "weekly")
//!     .with_attribute("bedrooms", 3)
//!     .with_attribute("pets", true);
//!
//! let breakdown = engine.calculate_pricing(&request);
//! assert_eq!(breakdown.base_price, 300.0);
//! assert_eq!(breakdown.adjustments.get("pets"), Some(25.0));
//! ```
//!
//! ## Service Mode
//!
//! ```rust,no_run
//! use janitor_pricing::{Config, server};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/pricing.yaml").await?;
//!     server::run_server(config).await?;
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod server;
pub mod services;
pub mod utils;

// Re-export main types
pub use config::{Config, PricingSettings, default_pricing_settings};
pub use services::pricing::{
    Adjustments, CalculationDetails, DetailedPricing, PricingBreakdown, PricingEngine,
    PricingRequest, ServiceAttributes, ServiceType, UnitType, calculate_detailed_pricing,
    calculate_pricing, format_currency, format_percentage, get_quick_estimate,
};
pub use utils::error::{PricingError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    /// Version number
    pub version: &'static str,
    /// Build timestamp (seconds since the epoch)
    pub build_time: &'static str,
    /// Git commit hash
    pub git_hash: &'static str,
    /// Rust version
    pub rust_version: &'static str,
}

/// Build
pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: VERSION,
        build_time: env!("BUILD_TIME"),
        git_hash: env!("GIT_HASH"),
        rust_version: env!("RUST_VERSION"),
    }
}
