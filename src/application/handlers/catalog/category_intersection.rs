//! CategoryIntersection - Ids of items that belong to every selected category.

use std::sync::Arc;

use futures::future::try_join_all;

use crate::domain::catalog::{intersect_ordered, CategorySelection, ItemId};
use crate::ports::CatalogGateway;

use super::CatalogQueryError;

/// Computes the ordered intersection of category member lists.
///
/// Result order is the first-appearance order in the first selected
/// category. Every call refetches member lists.
pub struct CategoryIntersection {
    gateway: Arc<dyn CatalogGateway>,
}

impl CategoryIntersection {
    pub fn new(gateway: Arc<dyn CatalogGateway>) -> Self {
        Self { gateway }
    }

    /// Fetches all member lists concurrently and intersects them.
    ///
    /// An empty selection yields no ids; callers treat "no filter" separately.
    pub async fn resolve(
        &self,
        selection: &CategorySelection,
    ) -> Result<Vec<ItemId>, CatalogQueryError> {
        if selection.is_empty() {
            return Ok(Vec::new());
        }

        let fetches = selection
            .iter()
            .map(|name| self.gateway.get_category_members(name));
        let categories = try_join_all(fetches).await?;

        let member_lists = categories
            .iter()
            .map(|category| category.member_ids())
            .collect::<Result<Vec<_>, _>>()?;

        let ids = intersect_ordered(&member_lists);
        tracing::debug!(
            categories = %selection.to_query(),
            matches = ids.len(),
            "Resolved category intersection"
        );
        Ok(ids)
    }
}
