//! Application handlers.
//!
//! Query handlers that orchestrate upstream reads through the ports.

pub mod catalog;

pub use catalog::{
    CatalogQueryError, CategoryIntersection, GetItemHandler, GetItemQuery, GetItemResult,
    ItemDetailResolver, ListCategoriesHandler, ListCategoriesResult, QueryPageHandler,
    QueryPageQuery, QueryPageResult,
};
