//! ListCategoriesHandler - Every category, for building the filter controls.

use std::sync::Arc;

use crate::domain::catalog::CategoryListing;
use crate::ports::{CatalogGateway, UpstreamFetchError};

/// Result of listing categories.
pub type ListCategoriesResult = CategoryListing;

pub struct ListCategoriesHandler {
    gateway: Arc<dyn CatalogGateway>,
}

impl ListCategoriesHandler {
    pub fn new(gateway: Arc<dyn CatalogGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self) -> Result<ListCategoriesResult, UpstreamFetchError> {
        self.gateway.list_categories().await
    }
}
