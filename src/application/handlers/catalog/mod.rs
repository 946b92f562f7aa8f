//! Catalog query handlers.
//!
//! Read-only handlers that compose upstream reads into catalog pages.

mod category_intersection;
mod error;
mod get_item;
mod item_details;
mod list_categories;
mod query_page;

pub use category_intersection::CategoryIntersection;
pub use error::CatalogQueryError;
pub use get_item::{GetItemHandler, GetItemQuery, GetItemResult};
pub use item_details::ItemDetailResolver;
pub use list_categories::{ListCategoriesHandler, ListCategoriesResult};
pub use query_page::{QueryPageHandler, QueryPageQuery, QueryPageResult};
