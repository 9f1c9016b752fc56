//! Configuration validation
//!
//! The validation is organized into several submodules:
//! - `trait_def`: Core Validate trait definition
//! - `config_validators`: Server, CORS, logging and top-level service validators
//! - `pricing_validators`: Pricing settings validators
//! - `tests`: Test suite for all validators

mod config_validators;
mod pricing_validators;
mod trait_def;

pub use trait_def::Validate;
