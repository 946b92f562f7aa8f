//! CatalogGateway port - Read-only access to the upstream creature database.
//!
//! The upstream exposes four listing/detail reads and nothing else; in
//! particular there is no multi-category query. Everything above this port
//! is built from these four calls.
//!
//! Implementations must not retry or cache on their own. Callers that want
//! caching wrap a gateway in a decorator.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

use crate::domain::catalog::{CategoryListing, CategoryMembers, Item, ItemId, ItemListing};

/// Read-only port for the upstream catalog.
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Lists item references in upstream order, starting at `offset`.
    async fn list_items(&self, limit: u32, offset: u64) -> Result<ItemListing, UpstreamFetchError>;

    /// Fetches one item with its categories and sprites.
    async fn get_item(&self, id: ItemId) -> Result<Item, UpstreamFetchError>;

    /// Lists every category.
    async fn list_categories(&self) -> Result<CategoryListing, UpstreamFetchError>;

    /// Fetches a category with all of its members.
    async fn get_category_members(&self, name: &str)
        -> Result<CategoryMembers, UpstreamFetchError>;
}

/// The upstream read that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatewayOperation {
    ListItems,
    GetItem,
    ListCategories,
    GetCategoryMembers,
}

impl fmt::Display for GatewayOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GatewayOperation::ListItems => "list-items",
            GatewayOperation::GetItem => "get-item",
            GatewayOperation::ListCategories => "list-categories",
            GatewayOperation::GetCategoryMembers => "get-category-members",
        };
        write!(f, "{}", s)
    }
}

/// Why an upstream read failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchFailure {
    #[error("upstream returned status {0}")]
    Status(u16),

    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("could not decode response: {0}")]
    Decode(String),
}

/// An upstream read did not succeed.
///
/// `identifier` names what was asked for: the item id, the category name,
/// or the `limit/offset` pair of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Upstream {operation} failed for '{identifier}': {cause}")]
pub struct UpstreamFetchError {
    pub operation: GatewayOperation,
    pub identifier: String,
    pub cause: FetchFailure,
}

impl UpstreamFetchError {
    pub fn new(
        operation: GatewayOperation,
        identifier: impl Into<String>,
        cause: FetchFailure,
    ) -> Self {
        Self {
            operation,
            identifier: identifier.into(),
            cause,
        }
    }

    /// Shorthand for a missing category or item.
    pub fn not_found(operation: GatewayOperation, identifier: impl Into<String>) -> Self {
        Self::new(operation, identifier, FetchFailure::Status(404))
    }

    /// True when the upstream reported the resource does not exist.
    pub fn is_not_found(&self) -> bool {
        self.cause == FetchFailure::Status(404)
    }
}
