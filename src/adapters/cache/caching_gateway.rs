//! Caching Gateway
//!
//! Wraps any `CatalogGateway` and keeps successful responses for a fixed
//! time. Categories change rarely and get a longer TTL than listings, items
//! and member lists. Failures are never stored, so a failed read is retried
//! on the next request. Listing pages past the end are not stored either.
//!
//! The number of entries is bounded. When full, the oldest entry makes room.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

use crate::domain::catalog::{CategoryListing, CategoryMembers, Item, ItemId, ItemListing};
use crate::ports::{CatalogGateway, UpstreamFetchError};

/// Entry limit used unless `with_max_entries` says otherwise.
pub const DEFAULT_MAX_ENTRIES: usize = 4096;

/// Time-to-live per kind of upstream read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheTtls {
    /// Item listings, item details and category member lists.
    pub listing: Duration,
    /// The category listing.
    pub categories: Duration,
}

impl Default for CacheTtls {
    fn default() -> Self {
        Self {
            listing: Duration::from_secs(60 * 60),
            categories: Duration::from_secs(24 * 60 * 60),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
enum CacheKey {
    Listing { limit: u32, offset: u64 },
    Item(ItemId),
    Categories,
    Members(String),
}

#[derive(Debug, Clone)]
enum CachedValue {
    Listing(ItemListing),
    Item(Item),
    Categories(CategoryListing),
    Members(CategoryMembers),
}

#[derive(Debug)]
struct Entry {
    value: CachedValue,
    stored_at: Instant,
    /// Insertion order, for eviction. Instants can tie.
    seq: u64,
}

/// TTL cache in front of another gateway.
pub struct CachingGateway {
    inner: Arc<dyn CatalogGateway>,
    ttls: CacheTtls,
    max_entries: usize,
    next_seq: AtomicU64,
    entries: RwLock<HashMap<CacheKey, Entry>>,
}

impl CachingGateway {
    pub fn new(inner: Arc<dyn CatalogGateway>, ttls: CacheTtls) -> Self {
        Self {
            inner,
            ttls,
            max_entries: DEFAULT_MAX_ENTRIES,
            next_seq: AtomicU64::new(0),
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Caps the number of stored entries. A cap of 0 is treated as 1.
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries.max(1);
        self
    }

    /// Number of stored entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Drops every stored entry.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    fn ttl_for(&self, key: &CacheKey) -> Duration {
        match key {
            CacheKey::Categories => self.ttls.categories,
            _ => self.ttls.listing,
        }
    }

    async fn lookup(&self, key: &CacheKey) -> Option<CachedValue> {
        let entries = self.entries.read().await;
        let entry = entries.get(key)?;
        if entry.stored_at.elapsed() < self.ttl_for(key) {
            tracing::debug!(?key, "Upstream cache hit");
            Some(entry.value.clone())
        } else {
            None
        }
    }

    async fn store(&self, key: CacheKey, value: CachedValue) {
        let mut entries = self.entries.write().await;
        entries.retain(|k, e| e.stored_at.elapsed() < self.ttl_for(k));

        if entries.len() >= self.max_entries && !entries.contains_key(&key) {
            let oldest = entries
                .iter()
                .min_by_key(|(_, e)| e.seq)
                .map(|(k, _)| k.clone());
            if let Some(oldest) = oldest {
                tracing::debug!(key = ?oldest, "Upstream cache full, evicting oldest entry");
                entries.remove(&oldest);
            }
        }

        entries.insert(
            key,
            Entry {
                value,
                stored_at: Instant::now(),
                seq: self.next_seq.fetch_add(1, Ordering::Relaxed),
            },
        );
    }
}

#[async_trait]
impl CatalogGateway for CachingGateway {
    async fn list_items(&self, limit: u32, offset: u64) -> Result<ItemListing, UpstreamFetchError> {
        let key = CacheKey::Listing { limit, offset };
        if let Some(CachedValue::Listing(listing)) = self.lookup(&key).await {
            return Ok(listing);
        }
        let listing = self.inner.list_items(limit, offset).await?;
        if !listing.items.is_empty() {
            self.store(key, CachedValue::Listing(listing.clone())).await;
        }
        Ok(listing)
    }

    async fn get_item(&self, id: ItemId) -> Result<Item, UpstreamFetchError> {
        let key = CacheKey::Item(id);
        if let Some(CachedValue::Item(item)) = self.lookup(&key).await {
            return Ok(item);
        }
        let item = self.inner.get_item(id).await?;
        self.store(key, CachedValue::Item(item.clone())).await;
        Ok(item)
    }

    async fn list_categories(&self) -> Result<CategoryListing, UpstreamFetchError> {
        let key = CacheKey::Categories;
        if let Some(CachedValue::Categories(listing)) = self.lookup(&key).await {
            return Ok(listing);
        }
        let listing = self.inner.list_categories().await?;
        self.store(key, CachedValue::Categories(listing.clone())).await;
        Ok(listing)
    }

    async fn get_category_members(
        &self,
        name: &str,
    ) -> Result<CategoryMembers, UpstreamFetchError> {
        let key = CacheKey::Members(name.to_string());
        if let Some(CachedValue::Members(members)) = self.lookup(&key).await {
            return Ok(members);
        }
        let members = self.inner.get_category_members(name).await?;
        self.store(key, CachedValue::Members(members.clone())).await;
        Ok(members)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryCatalogGateway;
    use crate::ports::GatewayOperation;

    fn inner() -> Arc<InMemoryCatalogGateway> {
        Arc::new(
            InMemoryCatalogGateway::new()
                .with_item(4, "charmander", &["fire"])
                .with_item(6, "charizard", &["fire", "flying"])
                .with_failing_item(7),
        )
    }

    #[tokio::test]
    async fn test_repeated_reads_hit_cache() {
        let inner = inner();
        let cache = CachingGateway::new(inner.clone(), CacheTtls::default());

        for _ in 0..3 {
            cache.get_category_members("fire").await.unwrap();
            cache.list_categories().await.unwrap();
            cache.get_item(ItemId::new(6).unwrap()).await.unwrap();
            cache.list_items(24, 0).await.unwrap();
        }

        assert_eq!(inner.call_count(GatewayOperation::GetCategoryMembers), 1);
        assert_eq!(inner.call_count(GatewayOperation::ListCategories), 1);
        assert_eq!(inner.call_count(GatewayOperation::GetItem), 1);
        assert_eq!(inner.call_count(GatewayOperation::ListItems), 1);
        assert_eq!(cache.len().await, 4);
    }

    #[tokio::test]
    async fn test_distinct_keys_are_cached_separately() {
        let inner = inner();
        let cache = CachingGateway::new(inner.clone(), CacheTtls::default());

        cache.list_items(24, 0).await.unwrap();
        cache.list_items(24, 24).await.unwrap();
        cache.get_category_members("fire").await.unwrap();
        cache.get_category_members("flying").await.unwrap();

        assert_eq!(inner.call_count(GatewayOperation::ListItems), 2);
        assert_eq!(inner.call_count(GatewayOperation::GetCategoryMembers), 2);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let inner = inner();
        let cache = CachingGateway::new(inner.clone(), CacheTtls::default());

        assert!(cache.get_item(ItemId::new(7).unwrap()).await.is_err());
        assert!(cache.get_item(ItemId::new(7).unwrap()).await.is_err());
        assert_eq!(inner.call_count(GatewayOperation::GetItem), 2);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_expired_entries_are_refetched() {
        let inner = inner();
        let ttls = CacheTtls {
            listing: Duration::ZERO,
            categories: Duration::from_secs(3600),
        };
        let cache = CachingGateway::new(inner.clone(), ttls);

        cache.get_category_members("fire").await.unwrap();
        cache.get_category_members("fire").await.unwrap();
        cache.list_categories().await.unwrap();
        cache.list_categories().await.unwrap();

        assert_eq!(inner.call_count(GatewayOperation::GetCategoryMembers), 2);
        assert_eq!(inner.call_count(GatewayOperation::ListCategories), 1);
    }

    #[tokio::test]
    async fn test_listing_pages_past_the_end_are_not_cached() {
        let inner = inner();
        let cache = CachingGateway::new(inner.clone(), CacheTtls::default());

        for offset in [100, 200, 300] {
            let listing = cache.list_items(24, offset).await.unwrap();
            assert!(listing.items.is_empty());
            assert_eq!(listing.count, 2);
        }
        assert!(cache.is_empty().await);
        assert_eq!(inner.call_count(GatewayOperation::ListItems), 3);
    }

    #[tokio::test]
    async fn test_entry_count_is_capped() {
        let inner = inner();
        let cache = CachingGateway::new(inner.clone(), CacheTtls::default()).with_max_entries(2);

        cache.get_category_members("fire").await.unwrap();
        cache.get_category_members("flying").await.unwrap();
        cache.list_categories().await.unwrap();
        assert_eq!(cache.len().await, 2);

        // "fire" was stored first, so it was evicted
        cache.get_category_members("flying").await.unwrap();
        cache.get_category_members("fire").await.unwrap();
        assert_eq!(inner.call_count(GatewayOperation::GetCategoryMembers), 3);
        assert_eq!(cache.len().await, 2);
    }

    #[tokio::test]
    async fn test_refreshing_a_key_does_not_evict() {
        let inner = inner();
        let ttls = CacheTtls {
            listing: Duration::ZERO,
            categories: Duration::from_secs(3600),
        };
        let cache = CachingGateway::new(inner.clone(), ttls).with_max_entries(1);

        cache.list_categories().await.unwrap();
        cache.list_categories().await.unwrap();
        assert_eq!(inner.call_count(GatewayOperation::ListCategories), 1);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_clear() {
        let cache = CachingGateway::new(inner(), CacheTtls::default());
        cache.list_categories().await.unwrap();
        cache.clear().await;
        assert!(cache.is_empty().await);
    }
}
