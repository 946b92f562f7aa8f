//! PokeAPI Gateway - reqwest implementation of `CatalogGateway`.
//!
//! # Configuration
//!
//! ```ignore
//! let config = PokeApiConfig::new("https://pokeapi.co/api/v2")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let gateway = PokeApiGateway::new(config)?;
//! ```
//!
//! Each operation is a single GET. Non-2xx responses, transport failures and
//! undecodable bodies all become `UpstreamFetchError`. Nothing is retried.

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

use crate::domain::catalog::{CategoryListing, CategoryMembers, Item, ItemId, ItemListing};
use crate::ports::{CatalogGateway, FetchFailure, GatewayOperation, UpstreamFetchError};

use super::wire::{Pokemon, ResourceList, TypeDetail};

/// Configuration for the PokeAPI gateway.
#[derive(Debug, Clone)]
pub struct PokeApiConfig {
    /// Base URL including the API version (e.g. `https://pokeapi.co/api/v2`).
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// User-Agent header sent upstream.
    pub user_agent: String,
}

impl PokeApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}

/// The gateway could not be constructed.
#[derive(Debug, Error)]
pub enum PokeApiGatewayError {
    #[error("Invalid upstream base URL '{0}'")]
    InvalidBaseUrl(String),

    #[error("Failed to create HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

/// PokeAPI-backed catalog gateway.
pub struct PokeApiGateway {
    base_url: Url,
    client: Client,
}

impl PokeApiGateway {
    pub fn new(config: PokeApiConfig) -> Result<Self, PokeApiGatewayError> {
        let base_url = Url::parse(&config.base_url)
            .ok()
            .filter(|url| !url.cannot_be_a_base() && matches!(url.scheme(), "http" | "https"))
            .ok_or_else(|| PokeApiGatewayError::InvalidBaseUrl(config.base_url.clone()))?;

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent)
            .build()?;

        Ok(Self { base_url, client })
    }

    /// Appends path segments to the base URL, percent-encoding each one.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// GETs `url` and decodes the JSON body.
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        operation: GatewayOperation,
        identifier: &str,
        url: Url,
    ) -> Result<T, UpstreamFetchError> {
        tracing::debug!(%operation, identifier, %url, "Fetching from upstream");

        let fail = |cause: FetchFailure| {
            tracing::warn!(%operation, identifier, %cause, "Upstream fetch failed");
            UpstreamFetchError::new(operation, identifier, cause)
        };

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                fail(FetchFailure::Timeout)
            } else if e.is_connect() {
                fail(FetchFailure::Network(format!("Connection failed: {}", e)))
            } else {
                fail(FetchFailure::Network(e.to_string()))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(fail(FetchFailure::Status(status.as_u16())));
        }

        response.json::<T>().await.map_err(|e| {
            if e.is_timeout() {
                fail(FetchFailure::Timeout)
            } else {
                fail(FetchFailure::Decode(e.to_string()))
            }
        })
    }
}

#[async_trait]
impl CatalogGateway for PokeApiGateway {
    async fn list_items(&self, limit: u32, offset: u64) -> Result<ItemListing, UpstreamFetchError> {
        let mut url = self.endpoint(&["pokemon"]);
        url.query_pairs_mut()
            .append_pair("limit", &limit.to_string())
            .append_pair("offset", &offset.to_string());

        let identifier = format!("limit={}&offset={}", limit, offset);
        let list: ResourceList = self
            .fetch_json(GatewayOperation::ListItems, &identifier, url)
            .await?;
        Ok(list.into_item_listing())
    }

    async fn get_item(&self, id: ItemId) -> Result<Item, UpstreamFetchError> {
        let identifier = id.to_string();
        let url = self.endpoint(&["pokemon", &identifier]);
        let pokemon: Pokemon = self
            .fetch_json(GatewayOperation::GetItem, &identifier, url)
            .await?;

        pokemon.into_item().ok_or_else(|| {
            UpstreamFetchError::new(
                GatewayOperation::GetItem,
                identifier,
                FetchFailure::Decode("item id must be positive".to_string()),
            )
        })
    }

    async fn list_categories(&self) -> Result<CategoryListing, UpstreamFetchError> {
        let url = self.endpoint(&["type"]);
        let list: ResourceList = self
            .fetch_json(GatewayOperation::ListCategories, "all", url)
            .await?;
        Ok(list.into_category_listing())
    }

    async fn get_category_members(
        &self,
        name: &str,
    ) -> Result<CategoryMembers, UpstreamFetchError> {
        let url = self.endpoint(&["type", name]);
        let detail: TypeDetail = self
            .fetch_json(GatewayOperation::GetCategoryMembers, name, url)
            .await?;
        Ok(detail.into())
    }
}
