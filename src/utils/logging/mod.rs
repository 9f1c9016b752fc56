//! Logging setup
//!
//! Installs the global `tracing` subscriber. `RUST_LOG` takes precedence over
//! the configured level so a single module can be turned up without editing
//! the config file.

use crate::config::{LogFormat, LoggingConfig};
use tracing::subscriber::DefaultGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Build the level filter for a logging configuration
pub fn build_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.level.to_ascii_lowercase()))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install a thread-local subscriber with default settings
///
/// Covers startup work that runs before the configured subscriber exists,
/// such as loading the configuration file. Dropping the guard removes it.
pub fn bootstrap_logging() -> DefaultGuard {
    let config = LoggingConfig::default();
    let subscriber = tracing_subscriber::registry()
        .with(build_filter(&config))
        .with(fmt::layer().with_target(config.with_target));
    tracing::subscriber::set_default(subscriber)
}

/// Initialize tracing/logging
///
/// Only the first call installs a subscriber; later calls are no-ops, so
/// tests sharing a process can call it freely.
pub fn init_logging(config: &LoggingConfig) {
    let filter = build_filter(config);

    let result = match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(config.with_target))
            .try_init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(config.with_target))
            .try_init(),
    };

    if result.is_ok() {
        tracing::debug!(level = %config.level, format = ?config.format, "Logging initialized");
    }
}
