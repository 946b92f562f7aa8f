//! Upstream response cache configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::adapters::cache::{CacheTtls, DEFAULT_MAX_ENTRIES};

/// Upstream response cache configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    /// Whether upstream responses are cached at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// TTL for listings, items and category members, in seconds
    #[serde(default = "default_listing_ttl")]
    pub listing_ttl_secs: u64,

    /// TTL for the category listing, in seconds
    #[serde(default = "default_categories_ttl")]
    pub categories_ttl_secs: u64,

    /// Most responses kept at once; the oldest is dropped to make room
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl CacheConfig {
    /// TTLs in the form the caching gateway takes
    pub fn ttls(&self) -> CacheTtls {
        CacheTtls {
            listing: Duration::from_secs(self.listing_ttl_secs),
            categories: Duration::from_secs(self.categories_ttl_secs),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.enabled && self.max_entries == 0 {
            return Err(ValidationError::InvalidCacheCapacity);
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            listing_ttl_secs: default_listing_ttl(),
            categories_ttl_secs: default_categories_ttl(),
            max_entries: default_max_entries(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_listing_ttl() -> u64 {
    60 * 60
}

fn default_categories_ttl() -> u64 {
    24 * 60 * 60
}

fn default_max_entries() -> usize {
    DEFAULT_MAX_ENTRIES
}
