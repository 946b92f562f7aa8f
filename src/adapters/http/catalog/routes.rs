//! Route configuration for catalog endpoints.

use axum::routing::get;
use axum::Router;

use super::handlers::{get_item, health, list_categories, list_items, CatalogAppState};

/// Creates the catalog router with all endpoints.
///
/// Routes:
/// - `GET /api/items` - Filtered, paginated items
/// - `GET /api/items/:id` - One item
/// - `GET /api/categories` - All categories
/// - `GET /health` - Liveness probe
pub fn catalog_router() -> Router<CatalogAppState> {
    Router::new()
        .route("/api/items", get(list_items))
        .route("/api/items/:id", get(get_item))
        .route("/api/categories", get(list_categories))
        .route("/health", get(health))
}
