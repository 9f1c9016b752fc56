//! Error types for the pricing service

use thiserror::Error;

/// Result type alias for the pricing service
pub type Result<T> = std::result::Result<T, PricingError>;

/// Main error type for the pricing service
///
/// Price calculation itself never fails; these errors come from
/// configuration loading, engine construction and the HTTP/CLI surfaces.
#[derive(Error, Debug)]
pub enum PricingError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Bad request errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Not found errors
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
