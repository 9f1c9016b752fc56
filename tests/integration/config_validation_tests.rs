//! Configuration validation integration tests
//!
//! Tests for configuration loading and validation across all config components.

#[cfg(test)]
mod tests {
    use janitor_pricing::PricingError;
    use janitor_pricing::config::models::{
        CorsConfig, LogFormat, LoggingConfig, ServerConfig, ServiceConfig,
    };
    use janitor_pricing::config::{Config, PricingSettings, Validate, load_document};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(content: &str, suffix: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    // ==================== ServiceConfig Validation ====================

    #[test]
    fn test_valid_service_config() {
        let config = ServiceConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_service_config_port_zero() {
        let mut config = ServiceConfig::default();
        config.server.port = 0;

        let result = config.validate();
        assert!(result.unwrap_err().contains("port"));
    }

    #[test]
    fn test_service_config_bad_log_level() {
        let config = ServiceConfig {
            logging: LoggingConfig {
                level: "loud".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };

        assert!(config.validate().unwrap_err().contains("log level"));
    }

    #[test]
    fn test_server_config_worker_bounds() {
        let mut config = ServerConfig {
            workers: Some(1000),
            ..Default::default()
        };
        assert!(config.validate().is_ok());

        config.workers = Some(1001);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_cors_credentials_require_explicit_origins() {
        let cors = CorsConfig {
            allowed_origins: vec!["*".to_string()],
            allow_credentials: true,
            ..Default::default()
        };
        assert!(cors.validate().is_err());
    }

    // ==================== PricingSettings Validation ====================

    #[test]
    fn test_pricing_labor_rate_must_be_positive() {
        let mut settings = PricingSettings::default();
        settings.labor_rate = -25.0;

        let err = settings.validate().unwrap_err();
        assert!(err.contains("Labor rate"));
    }

    #[test]
    fn test_pricing_negative_rate_names_key() {
        let mut settings = PricingSettings::default();
        settings.set_base_rate("window", -5.0);

        let err = settings.validate().unwrap_err();
        assert!(err.contains("window"));
    }

    // ==================== Loading ====================

    #[tokio::test]
    async fn test_load_full_config_file() {
        let file = write_temp(
            r#"
server:
  port: 9090
pricing:
  marginPercentage: 30
  service_type_rates:
    residential: 0.14
logging:
  format: json
"#,
            ".yaml",
        );

        let config = Config::from_file(file.path()).await.unwrap();
        assert_eq!(config.server().port, 9090);
        assert_eq!(config.pricing().margin_percentage, 30.0);
        assert_eq!(config.pricing().base_rate("residential"), 0.14);
        assert_eq!(config.logging().format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_config_file_is_rejected() {
        let file = write_temp("server:\n  port: 0\n", ".yaml");

        let err = tokio_test::block_on(Config::from_file(file.path())).unwrap_err();
        assert!(matches!(err, PricingError::Config(_)));
    }

    #[test]
    fn test_load_settings_document_json_and_yaml() {
        let json = write_temp(r#"{ "laborRate": 40 }"#, ".json");
        let settings: PricingSettings = load_document(json.path()).unwrap();
        assert_eq!(settings.labor_rate, 40.0);

        let yaml = write_temp("overhead_percentage: 5\n", ".yml");
        let settings: PricingSettings = load_document(yaml.path()).unwrap();
        assert_eq!(settings.overhead_percentage, 5.0);
        assert_eq!(settings.labor_rate, 25.0);
    }

    #[test]
    fn test_missing_document_is_io_error() {
        let result: janitor_pricing::Result<PricingSettings> =
            load_document("/nonexistent/settings.json");
        assert!(matches!(result, Err(PricingError::Io(_))));
    }

    #[test]
    fn test_config_roundtrips_through_yaml() {
        let config = Config::default();
        let yaml = config.to_yaml().unwrap();
        let parsed: ServiceConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config.service);
    }
}
