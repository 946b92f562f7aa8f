//! HTTP listener settings for the catalog API

use reqwest::Url;
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Longest a catalog request may run. A filtered page fans out to one call
/// per category plus one per item, each bounded by the upstream timeout.
const MAX_REQUEST_TIMEOUT_SECS: u64 = 120;

/// Where the API listens and how it presents itself to browsers and logs.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,

    pub port: u16,

    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_level: String,

    pub log_format: LogFormat,

    /// Deadline for a whole API request, upstream fan-out included
    pub request_timeout_secs: u64,

    /// Comma-separated browser origins allowed to call the API.
    /// Unset means any origin.
    pub allowed_origins: Option<String>,
}

/// Log line format
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines for local runs
    #[default]
    Pretty,
    /// One JSON object per line for log shippers
    Json,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ValidationError::InvalidHost(self.host.clone()))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Configured origins in their serialized `scheme://host[:port]` form.
    ///
    /// An empty list means any origin may call the API.
    pub fn allowed_origins(&self) -> Result<Vec<String>, ValidationError> {
        let Some(raw) = self.allowed_origins.as_deref() else {
            return Ok(Vec::new());
        };
        raw.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(parse_origin)
            .collect()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if self.request_timeout_secs == 0 || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr()?;
        self.allowed_origins()?;
        Ok(())
    }
}

/// An origin is a bare http(s) scheme and authority; paths and queries are
/// not part of it.
fn parse_origin(value: &str) -> Result<String, ValidationError> {
    let invalid = || ValidationError::InvalidOrigin(value.to_string());
    let url = Url::parse(value).map_err(|_| invalid())?;

    let is_bare = url.path() == "/" && url.query().is_none() && url.fragment().is_none();
    if !matches!(url.scheme(), "http" | "https") || url.host().is_none() || !is_bare {
        return Err(invalid());
    }
    Ok(url.origin().ascii_serialization())
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info,creature_catalog=debug,tower_http=info".to_string(),
            log_format: LogFormat::Pretty,
            request_timeout_secs: 30,
            allowed_origins: None,
        }
    }
}
