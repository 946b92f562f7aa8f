//! ItemDetailResolver - Materializes a page of ids into full items.

use std::sync::Arc;

use futures::future::try_join_all;

use crate::domain::catalog::{Item, ItemId};
use crate::ports::{CatalogGateway, UpstreamFetchError};

/// Fetches full records for a list of ids.
///
/// All fetches are issued at once and joined positionally, so the output
/// order matches the input order whatever order the responses arrive in.
/// The first failure aborts the whole resolution.
pub struct ItemDetailResolver {
    gateway: Arc<dyn CatalogGateway>,
}

impl ItemDetailResolver {
    pub fn new(gateway: Arc<dyn CatalogGateway>) -> Self {
        Self { gateway }
    }

    pub async fn resolve(&self, ids: &[ItemId]) -> Result<Vec<Item>, UpstreamFetchError> {
        let fetches = ids.iter().map(|id| self.gateway.get_item(*id));
        let items = try_join_all(fetches).await.inspect_err(|e| {
            tracing::warn!(error = %e, "Item detail resolution failed");
        })?;
        Ok(items)
    }
}
