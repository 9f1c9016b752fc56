//! Server builder and run_server function
//!
//! This module provides the ServerBuilder for easier server configuration
//! and the run_server function for automatic configuration loading.

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::{PricingError, Result};
use tracing::{info, warn};

/// Default location of the service configuration file
pub const DEFAULT_CONFIG_PATH: &str = "config/pricing.yaml";

/// Server builder for easier configuration
pub struct ServerBuilder {
    config: Option<Config>,
}

impl ServerBuilder {
    /// Create a new server builder
    pub fn new() -> Self {
        Self { config: None }
    }

    /// Set configuration
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the HTTP server
    pub fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| PricingError::Config("Configuration is required".to_string()))?;

        HttpServer::new(&config)
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Load the service configuration
///
/// Reads `path` when it exists and falls back to the built-in defaults
/// otherwise. `PRICING_*` environment variables are layered on top. A file
/// that exists but fails to parse or validate is an error.
pub async fn load_config(path: &str) -> Result<Config> {
    let base = if std::path::Path::new(path).exists() {
        info!("Loading configuration file: {}", path);
        Config::from_file(path).await?
    } else {
        warn!("Configuration file {} not found, using defaults", path);
        Config::default()
    };

    let config = Config {
        service: base.service.with_env_overrides()?,
    };
    config.validate()?;
    Ok(config)
}

/// Run the server with automatic configuration loading
pub async fn run_server(config: Config) -> Result<()> {
    info!("Starting janitorial pricing service");

    let server = ServerBuilder::new().with_config(config).build()?;
    info!(
        "Server starting at: http://{}:{}",
        server.config().host,
        server.config().port
    );
    info!("API Endpoints:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/v1/pricing/settings - Configured pricing settings");
    info!("   POST /api/v1/pricing/calculate - Full price breakdown");
    info!("   POST /api/v1/pricing/estimate - Quick estimate");
    info!("   POST /api/v1/pricing/detailed - Legacy detailed pricing");

    server.start().await
}
