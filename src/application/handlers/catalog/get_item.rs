//! GetItemHandler - A single item by id.

use std::sync::Arc;

use crate::domain::catalog::{Item, ItemId};
use crate::ports::{CatalogGateway, UpstreamFetchError};

/// Query for one item.
#[derive(Debug, Clone, Copy)]
pub struct GetItemQuery {
    pub id: ItemId,
}

pub type GetItemResult = Item;

pub struct GetItemHandler {
    gateway: Arc<dyn CatalogGateway>,
}

impl GetItemHandler {
    pub fn new(gateway: Arc<dyn CatalogGateway>) -> Self {
        Self { gateway }
    }

    pub async fn handle(&self, query: GetItemQuery) -> Result<GetItemResult, UpstreamFetchError> {
        self.gateway.get_item(query.id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCatalogGateway;

    fn handler() -> GetItemHandler {
        let gateway = InMemoryCatalogGateway::new().with_item(25, "pikachu", &["electric"]);
        GetItemHandler::new(Arc::new(gateway))
    }

    #[tokio::test]
    async fn test_returns_item() {
        let item = handler()
            .handle(GetItemQuery { id: ItemId::new(25).unwrap() })
            .await
            .unwrap();
        assert_eq!(item.name, "pikachu");
        assert!(item.has_category("electric"));
    }

    #[tokio::test]
    async fn test_missing_item_is_not_found() {
        let err = handler()
            .handle(GetItemQuery { id: ItemId::new(26).unwrap() })
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
