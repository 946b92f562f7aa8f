//! Catalog paging configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::catalog::DEFAULT_PAGE_SIZE;

/// Catalog paging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Page size used when the request does not name one
    #[serde(default = "default_page_size")]
    pub default_page_size: u32,

    /// Largest page size a request may ask for
    #[serde(default = "default_max_page_size")]
    pub max_page_size: u32,
}

impl CatalogConfig {
    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.default_page_size == 0 || self.max_page_size == 0 {
            return Err(ValidationError::InvalidPageSize);
        }
        if self.default_page_size > self.max_page_size {
            return Err(ValidationError::DefaultPageSizeTooLarge);
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
        }
    }
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_max_page_size() -> u32 {
    100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_config_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.default_page_size, 24);
        assert_eq!(config.max_page_size, 100);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_zero_page_size() {
        let config = CatalogConfig {
            default_page_size: 0,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ValidationError::InvalidPageSize)));
    }

    #[test]
    fn test_validation_default_above_max() {
        let config = CatalogConfig {
            default_page_size: 50,
            max_page_size: 20,
        };
        assert!(matches!(config.validate(), Err(ValidationError::DefaultPageSizeTooLarge)));
    }
}
