//! Catalog module - Items, categories and the pure filtering/paging rules.
//!
//! Nothing here performs I/O. The application layer feeds these functions
//! with data fetched through the `CatalogGateway` port.

mod ids;
mod intersection;
mod item;
mod page;
mod reference;
mod selection;

pub use ids::ItemId;
pub use intersection::intersect_ordered;
pub use item::{
    CategoryListing, CategoryMember, CategoryMembers, CategoryRef, CategorySlot, Item,
    ItemListing, ItemRef, Sprites,
};
pub use page::{paginate, PageError, PageInfo, PageRequest, PageResult, PageSlice, DEFAULT_PAGE_SIZE};
pub use reference::{parse_reference_id, MalformedReferenceError};
pub use selection::CategorySelection;
