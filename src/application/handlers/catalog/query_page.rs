//! QueryPageHandler - One page of items matching a category filter.
//!
//! This is the entry point every caller uses. With no categories selected it
//! is plain offset pagination over the upstream listing. With categories it
//! intersects member lists, slices the intersection and resolves only the
//! ids on the requested page.

use std::sync::Arc;

use crate::domain::catalog::{paginate, ItemRef, PageRequest, PageResult};
use crate::ports::CatalogGateway;

use super::{CatalogQueryError, CategoryIntersection, ItemDetailResolver};

/// Query for one page of the catalog.
pub type QueryPageQuery = PageRequest;

/// Result of a successful page query.
pub type QueryPageResult = PageResult;

/// Handler answering page queries. Holds no state between calls.
pub struct QueryPageHandler {
    gateway: Arc<dyn CatalogGateway>,
    intersection: CategoryIntersection,
    details: ItemDetailResolver,
}

impl QueryPageHandler {
    pub fn new(gateway: Arc<dyn CatalogGateway>) -> Self {
        Self {
            intersection: CategoryIntersection::new(gateway.clone()),
            details: ItemDetailResolver::new(gateway.clone()),
            gateway,
        }
    }

    pub async fn handle(&self, query: QueryPageQuery) -> Result<QueryPageResult, CatalogQueryError> {
        let result = if query.selection.is_empty() {
            self.unfiltered_page(&query).await?
        } else {
            self.filtered_page(&query).await?
        };

        tracing::info!(
            categories = %query.selection.to_query(),
            page = query.page(),
            page_size = query.page_size(),
            returned = result.items.len(),
            total = result.total_count,
            "Catalog page served"
        );
        Ok(result)
    }

    /// Offset pagination straight off the upstream listing. The listing's
    /// own count is the total.
    async fn unfiltered_page(&self, query: &PageRequest) -> Result<PageResult, CatalogQueryError> {
        let listing = self
            .gateway
            .list_items(query.page_size(), query.offset())
            .await?;

        let ids = listing
            .items
            .iter()
            .map(ItemRef::id)
            .collect::<Result<Vec<_>, _>>()?;
        let items = self.details.resolve(&ids).await?;

        Ok(PageResult {
            items,
            total_count: listing.count,
            page: query.page(),
            page_size: query.page_size(),
        })
    }

    async fn filtered_page(&self, query: &PageRequest) -> Result<PageResult, CatalogQueryError> {
        let ids = self.intersection.resolve(&query.selection).await?;
        let slice = paginate(&ids, query.page(), query.page_size());
        let items = self.details.resolve(&slice.page_items).await?;

        Ok(PageResult {
            items,
            total_count: slice.total_count,
            page: query.page(),
            page_size: query.page_size(),
        })
    }
}
