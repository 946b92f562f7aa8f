//! HTTP DTOs for catalog endpoints.
//!
//! The catalog is read-only, so there are only response DTOs. Items are
//! flattened to what a card needs: id, name, one image and category names.

use serde::Serialize;

use crate::domain::catalog::{CategoryListing, Item, PageInfo, PageResult};

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// An item as shown in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemView {
    pub id: u32,
    pub name: String,
    pub image_url: Option<String>,
    /// Category names in slot order.
    pub categories: Vec<String>,
}

impl From<Item> for ItemView {
    fn from(item: Item) -> Self {
        Self {
            id: item.id.get(),
            image_url: item.display_image().map(str::to_string),
            categories: item.category_names().map(str::to_string).collect(),
            name: item.name,
        }
    }
}

/// One page of items.
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse {
    pub items: Vec<ItemView>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
    pub selected_categories: Vec<String>,
    pub pagination: PageInfo,
}

impl PageResponse {
    pub fn new(result: PageResult, selected_categories: Vec<String>) -> Self {
        let pagination = result.info();
        Self {
            items: result.items.into_iter().map(ItemView::from).collect(),
            total_count: result.total_count,
            page: result.page,
            page_size: result.page_size,
            selected_categories,
            pagination,
        }
    }
}

/// Category names for the filter controls.
#[derive(Debug, Clone, Serialize)]
pub struct CategoriesResponse {
    pub count: u64,
    pub categories: Vec<String>,
}

impl From<CategoryListing> for CategoriesResponse {
    fn from(listing: CategoryListing) -> Self {
        Self {
            count: listing.count,
            categories: listing.categories.into_iter().map(|c| c.name).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }

    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: "NOT_FOUND".to_string(),
            message: format!("{} not found: {}", resource_type, id),
        }
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self {
            code: "UPSTREAM_ERROR".to_string(),
            message: message.into(),
        }
    }
}
