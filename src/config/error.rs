//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Required configuration missing: {0}")]
    MissingRequired(&'static str),

    #[error("Invalid host address: {0}")]
    InvalidHost(String),

    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid allowed origin: {0}")]
    InvalidOrigin(String),

    #[error("Upstream base URL must be an http(s) URL")]
    InvalidUpstreamUrl,

    #[error("Invalid upstream timeout")]
    InvalidUpstreamTimeout,

    #[error("Page sizes must be greater than zero")]
    InvalidPageSize,

    #[error("Default page size exceeds max page size")]
    DefaultPageSizeTooLarge,

    #[error("Cache capacity must be greater than zero")]
    InvalidCacheCapacity,
}
