//! In-Memory Catalog Gateway
//!
//! Serves a fixed set of items and categories built up front. References use
//! the same URL shapes as the real upstream so id parsing is exercised.
//! Every call is recorded, which lets tests assert how many upstream reads a
//! query performed.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use crate::domain::catalog::{
    CategoryListing, CategoryMember, CategoryMembers, CategoryRef, CategorySlot, Item, ItemId,
    ItemListing, ItemRef, Sprites,
};
use crate::ports::{
    CatalogGateway, FetchFailure, GatewayOperation, UpstreamFetchError,
};

const FIXTURE_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Fixture-backed gateway.
#[derive(Debug, Default)]
pub struct InMemoryCatalogGateway {
    items: Vec<Item>,
    categories: Vec<CategoryMembers>,
    failing_items: HashSet<ItemId>,
    calls: Mutex<HashMap<GatewayOperation, usize>>,
}

impl InMemoryCatalogGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item belonging to `categories`, in slot order.
    ///
    /// The item is appended to each category's member list, creating the
    /// category when needed. Id 0 is not a valid item id and is ignored.
    pub fn with_item(mut self, id: u32, name: &str, categories: &[&str]) -> Self {
        let Some(id) = ItemId::new(id) else {
            return self;
        };
        let item_ref = item_ref(id, name);

        let mut slots = Vec::with_capacity(categories.len());
        for (index, category) in categories.iter().enumerate() {
            let slot = (index + 1) as u8;
            slots.push(CategorySlot {
                slot,
                category: category_ref(category),
            });
            self.category_mut(category).members.push(CategoryMember {
                item: item_ref.clone(),
                slot,
            });
        }

        let sprites = Sprites {
            front_default: Some(format!("https://img.example/sprites/{}.png", id)),
            showdown_front_default: None,
        };
        self.items.push(Item::new(id, name, slots, sprites));
        self
    }

    /// Adds a category with no members yet.
    pub fn with_category(mut self, name: &str) -> Self {
        self.category_mut(name);
        self
    }

    /// Replaces a category's member list with `ids`, in that order.
    ///
    /// Ids may repeat and need not refer to known items.
    pub fn with_members(mut self, name: &str, ids: &[u32]) -> Self {
        let members = ids
            .iter()
            .filter_map(|id| ItemId::new(*id))
            .map(|id| {
                let name = self
                    .items
                    .iter()
                    .find(|item| item.id == id)
                    .map(|item| item.name.clone())
                    .unwrap_or_else(|| format!("item-{}", id));
                CategoryMember {
                    item: item_ref(id, &name),
                    slot: 1,
                }
            })
            .collect();
        self.category_mut(name).members = members;
        self
    }

    /// Adds a raw member reference, which need not be well formed.
    pub fn with_raw_member(mut self, category: &str, name: &str, url: &str) -> Self {
        self.category_mut(category).members.push(CategoryMember {
            item: ItemRef::new(name, url),
            slot: 1,
        });
        self
    }

    /// Makes `get_item` fail with a server error for this id.
    pub fn with_failing_item(mut self, id: u32) -> Self {
        if let Some(id) = ItemId::new(id) {
            self.failing_items.insert(id);
        }
        self
    }

    /// Number of calls made to one operation so far.
    pub fn call_count(&self, operation: GatewayOperation) -> usize {
        self.calls
            .lock()
            .map(|calls| calls.get(&operation).copied().unwrap_or(0))
            .unwrap_or(0)
    }

    /// Raw member ids of a category, for assertions.
    pub fn member_ids(&self, name: &str) -> Vec<ItemId> {
        self.categories
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.members.iter().filter_map(|m| m.item.id().ok()).collect())
            .unwrap_or_default()
    }

    fn category_mut(&mut self, name: &str) -> &mut CategoryMembers {
        if let Some(index) = self.categories.iter().position(|c| c.name == name) {
            return &mut self.categories[index];
        }
        let id = self.categories.len() as u32 + 1;
        self.categories.push(CategoryMembers {
            id,
            name: name.to_string(),
            members: Vec::new(),
        });
        let last = self.categories.len() - 1;
        &mut self.categories[last]
    }

    fn record(&self, operation: GatewayOperation) {
        if let Ok(mut calls) = self.calls.lock() {
            *calls.entry(operation).or_insert(0) += 1;
        }
    }
}

fn item_ref(id: ItemId, name: &str) -> ItemRef {
    ItemRef::new(name, format!("{}/pokemon/{}/", FIXTURE_BASE_URL, id))
}

fn category_ref(name: &str) -> CategoryRef {
    CategoryRef::new(name, format!("{}/type/{}/", FIXTURE_BASE_URL, name))
}

#[async_trait]
impl CatalogGateway for InMemoryCatalogGateway {
    async fn list_items(&self, limit: u32, offset: u64) -> Result<ItemListing, UpstreamFetchError> {
        self.record(GatewayOperation::ListItems);

        let items = self
            .items
            .iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(limit as usize)
            .map(|item| item_ref(item.id, &item.name))
            .collect();

        Ok(ItemListing {
            count: self.items.len() as u64,
            items,
        })
    }

    async fn get_item(&self, id: ItemId) -> Result<Item, UpstreamFetchError> {
        self.record(GatewayOperation::GetItem);

        if self.failing_items.contains(&id) {
            return Err(UpstreamFetchError::new(
                GatewayOperation::GetItem,
                id.to_string(),
                FetchFailure::Status(500),
            ));
        }

        self.items
            .iter()
            .find(|item| item.id == id)
            .cloned()
            .ok_or_else(|| UpstreamFetchError::not_found(GatewayOperation::GetItem, id.to_string()))
    }

    async fn list_categories(&self) -> Result<CategoryListing, UpstreamFetchError> {
        self.record(GatewayOperation::ListCategories);

        Ok(CategoryListing {
            count: self.categories.len() as u64,
            categories: self.categories.iter().map(|c| category_ref(&c.name)).collect(),
        })
    }

    async fn get_category_members(
        &self,
        name: &str,
    ) -> Result<CategoryMembers, UpstreamFetchError> {
        self.record(GatewayOperation::GetCategoryMembers);

        self.categories
            .iter()
            .find(|c| c.name == name)
            .cloned()
            .ok_or_else(|| UpstreamFetchError::not_found(GatewayOperation::GetCategoryMembers, name))
    }
}
