//! Configuration data models
//!
//! This module defines all configuration structures used by the pricing service.

#![allow(missing_docs)]

pub mod logging;
pub mod pricing;
pub mod server;
pub mod service;

// Re-export all configuration types
pub use logging::*;
pub use pricing::*;
pub use server::*;
pub use service::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8080
}

/// Default timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    256 * 1024 // 256KB, pricing payloads are small
}

/// Default log level
pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}
