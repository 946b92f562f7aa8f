//! HTTP adapter for the catalog.
//!
//! # Endpoints
//!
//! - `GET /api/items?types=fire,flying&page=1&page_size=24` - Filtered page
//! - `GET /api/items/{id}` - Single item
//! - `GET /api/categories` - All categories
//! - `GET /health` - Liveness probe

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::ErrorResponse;
pub use handlers::{CatalogApiError, CatalogAppState};
pub use routes::catalog_router;
