//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `CREATURE_CATALOG` prefix and nested values use double underscores as separators.
//! Every setting has a default, so an empty environment yields a working setup
//! against the public PokeAPI.
//!
//! # Example
//!
//! ```no_run
//! use creature_catalog::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {}", config.server.socket_addr().unwrap());
//! ```

mod cache;
mod catalog;
mod error;
mod server;
mod upstream;

pub use cache::CacheConfig;
pub use catalog::CatalogConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{LogFormat, ServerConfig};
pub use upstream::UpstreamConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Listener, logging and CORS settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Upstream catalog API (base URL, timeout)
    #[serde(default)]
    pub upstream: UpstreamConfig,

    /// Paging limits
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Upstream response cache
    #[serde(default)]
    pub cache: CacheConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `CREATURE_CATALOG` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `CREATURE_CATALOG__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CREATURE_CATALOG__UPSTREAM__BASE_URL=...` -> `upstream.base_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CREATURE_CATALOG")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.upstream.validate()?;
        self.catalog.validate()?;
        self.cache.validate()?;
        Ok(())
    }

    /// Whether log lines should be emitted as JSON
    pub fn json_logs(&self) -> bool {
        self.server.log_format == LogFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    /// Helper to clear environment variables after testing
    fn clear_env() {
        env::remove_var("CREATURE_CATALOG__SERVER__PORT");
        env::remove_var("CREATURE_CATALOG__SERVER__LOG_FORMAT");
        env::remove_var("CREATURE_CATALOG__SERVER__ALLOWED_ORIGINS");
        env::remove_var("CREATURE_CATALOG__UPSTREAM__BASE_URL");
        env::remove_var("CREATURE_CATALOG__CATALOG__DEFAULT_PAGE_SIZE");
        env::remove_var("CREATURE_CATALOG__CACHE__ENABLED");
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.log_format, LogFormat::Pretty);
        assert!(config.server.allowed_origins.is_none());
        assert_eq!(config.upstream.base_url, "https://pokeapi.co/api/v2");
        assert_eq!(config.catalog.default_page_size, 24);
        assert!(config.cache.enabled);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_overrides_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CREATURE_CATALOG__SERVER__PORT", "3000");
        env::set_var("CREATURE_CATALOG__UPSTREAM__BASE_URL", "http://localhost:9000/api/v2");
        env::set_var("CREATURE_CATALOG__CATALOG__DEFAULT_PAGE_SIZE", "12");
        env::set_var("CREATURE_CATALOG__CACHE__ENABLED", "false");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.upstream.base_url, "http://localhost:9000/api/v2");
        assert_eq!(config.catalog.default_page_size, 12);
        assert!(!config.cache.enabled);
    }

    #[test]
    fn test_json_logs_and_origins_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("CREATURE_CATALOG__SERVER__LOG_FORMAT", "json");
        env::set_var(
            "CREATURE_CATALOG__SERVER__ALLOWED_ORIGINS",
            "http://localhost:3000,https://catalog.example.com",
        );
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.json_logs());
        assert_eq!(config.server.allowed_origins().unwrap().len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_origin_fails_validation() {
        let mut config = AppConfig::default();
        config.server.allowed_origins = Some("https://catalog.example.com/app".to_string());
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidOrigin(_))
        ));
    }

    #[test]
    fn test_validate_catches_bad_section() {
        let mut config = AppConfig::default();
        config.catalog.max_page_size = 10;
        assert!(matches!(
            config.validate(),
            Err(ValidationError::DefaultPageSizeTooLarge)
        ));
    }
}
