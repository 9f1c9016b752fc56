//! Utility modules for the pricing service
//!
//! - **error**: Error types and HTTP error responses
//! - **logging**: Tracing subscriber setup

pub mod error;
pub mod logging;

pub use error::{PricingError, Result};
pub use logging::init_logging;
