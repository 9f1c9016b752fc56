//! Application state shared across HTTP handlers
//!
//! This module provides the AppState struct and its implementations.

use crate::config::Config;
use crate::services::PricingEngine;
use crate::utils::error::Result;
use std::sync::Arc;
use std::time::Instant;

/// HTTP server state shared across handlers
///
/// All fields are wrapped in Arc for efficient sharing across worker threads.
/// The engine is immutable, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Engine built from the configured pricing settings
    pub engine: Arc<PricingEngine>,
    /// When the state was created
    pub started_at: Instant,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config) -> Result<Self> {
        let engine = PricingEngine::new(Some(config.pricing().clone()))?;
        Ok(Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
            started_at: Instant::now(),
        })
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Seconds since the state was created
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
