//! Error handling utilities
//!
//! This module provides the crate error type and its HTTP mapping.

pub mod error;

// Re-export commonly used types
pub use error::*;
