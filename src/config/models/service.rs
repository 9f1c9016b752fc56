//! Top-level service configuration

use super::*;
use crate::utils::error::{PricingError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Everything the pricing service reads from its configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ServiceConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Pricing settings used when a request does not carry its own
    #[serde(default)]
    pub pricing: PricingSettings,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ServiceConfig {
    /// Build a configuration from defaults overridden by `PRICING_*` variables
    pub fn from_env() -> Result<Self> {
        Self::default().with_env_overrides()
    }

    /// Override individual fields from `PRICING_*` variables that are set
    pub fn with_env_overrides(self) -> Result<Self> {
        let mut config = self;

        if let Ok(host) = std::env::var("PRICING_HOST") {
            config.server.host = host;
        }
        if let Some(port) = env_parse::<u16>("PRICING_PORT")? {
            config.server.port = port;
        }
        if let Some(workers) = env_parse::<usize>("PRICING_WORKERS")? {
            config.server.workers = Some(workers);
        }
        if let Some(rate) = env_parse::<f64>("PRICING_LABOR_RATE")? {
            config.pricing.labor_rate = rate;
        }
        if let Some(pct) = env_parse::<f64>("PRICING_OVERHEAD_PERCENTAGE")? {
            config.pricing.overhead_percentage = pct;
        }
        if let Some(pct) = env_parse::<f64>("PRICING_MARGIN_PERCENTAGE")? {
            config.pricing.margin_percentage = pct;
        }
        if let Ok(level) = std::env::var("PRICING_LOG_LEVEL") {
            config.logging.level = level;
        }

        debug!("Applied environment overrides to service configuration");
        Ok(config)
    }

    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        self.pricing = self.pricing.merge(other.pricing);
        self.logging = self.logging.merge(other.logging);
        self
    }
}

fn env_parse<T: std::str::FromStr>(name: &str) -> Result<Option<T>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| PricingError::config(format!("Invalid value for {}: {}", name, raw))),
        Err(_) => Ok(None),
    }
}
