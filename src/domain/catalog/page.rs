//! Page requests, page slicing and pagination metadata.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{CategorySelection, Item};

/// Page size used by the catalog UI.
pub const DEFAULT_PAGE_SIZE: u32 = 24;

/// Number of page links shown around the current page.
const PAGE_WINDOW: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("Page size must be greater than zero")]
    InvalidPageSize,

    #[error("Page size {requested} exceeds the maximum of {max}")]
    PageSizeTooLarge { requested: u32, max: u32 },
}

/// What the caller wants: a category filter and one page of the result.
///
/// Pages are 1-indexed. Page numbers below 1 are clamped to 1 so an offset
/// can never go negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPageRequest")]
pub struct PageRequest {
    pub selection: CategorySelection,
    page: u32,
    page_size: u32,
}

/// Unchecked wire form; every deserialized request goes through `PageRequest::new`.
#[derive(Deserialize)]
struct RawPageRequest {
    #[serde(default)]
    selection: CategorySelection,
    #[serde(default = "first_page")]
    page: i64,
    #[serde(default = "default_page_size")]
    page_size: u32,
}

fn first_page() -> i64 {
    1
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl TryFrom<RawPageRequest> for PageRequest {
    type Error = PageError;

    fn try_from(raw: RawPageRequest) -> Result<Self, Self::Error> {
        Self::new(raw.selection, raw.page, raw.page_size)
    }
}

impl PageRequest {
    pub fn new(
        selection: CategorySelection,
        page: i64,
        page_size: u32,
    ) -> Result<Self, PageError> {
        if page_size == 0 {
            return Err(PageError::InvalidPageSize);
        }
        let page = page.clamp(1, i64::from(u32::MAX)) as u32;
        Ok(Self {
            selection,
            page,
            page_size,
        })
    }

    /// First page of the selection at the default page size.
    pub fn first(selection: CategorySelection) -> Self {
        Self {
            selection,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Zero-based index of the first item on this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Same filter, different page.
    pub fn with_page(&self, page: i64) -> Self {
        Self {
            selection: self.selection.clone(),
            page: page.clamp(1, i64::from(u32::MAX)) as u32,
            page_size: self.page_size,
        }
    }

    /// Changing the filter always starts over at page 1.
    pub fn with_selection(&self, selection: CategorySelection) -> Self {
        Self {
            selection,
            page: 1,
            page_size: self.page_size,
        }
    }
}

/// The part of an ordered collection that falls on one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSlice<T> {
    pub page_items: Vec<T>,
    pub total_count: u64,
}

/// Slices `items` for a 1-indexed page.
///
/// Never fails: pages past the end yield an empty slice with the full count.
/// Page 0 is read as page 1 and a page size of 0 yields an empty slice.
pub fn paginate<T: Clone>(items: &[T], page: u32, page_size: u32) -> PageSlice<T> {
    let total_count = items.len() as u64;
    let start = u64::from(page.max(1) - 1) * u64::from(page_size);
    let end = start.saturating_add(u64::from(page_size)).min(total_count);
    let start = start.min(total_count);

    PageSlice {
        page_items: items[start as usize..end as usize].to_vec(),
        total_count,
    }
}

/// One page of resolved items plus the size of the whole filtered set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult {
    pub items: Vec<Item>,
    pub total_count: u64,
    pub page: u32,
    pub page_size: u32,
}

impl PageResult {
    pub fn info(&self) -> PageInfo {
        PageInfo::new(self.page, self.page_size, self.total_count)
    }
}

/// Navigation metadata for rendering "page X of Y" style controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
    /// 1-based position of the first item on the page, 0 when the page is empty.
    pub first_item: u64,
    /// 1-based position of the last item on the page, 0 when the page is empty.
    pub last_item: u64,
    /// Page numbers to offer as direct links.
    pub window: Vec<u64>,
    /// Offer a jump to page 1 ahead of the window.
    pub show_first: bool,
    /// Pages are skipped between page 1 and the window.
    pub leading_gap: bool,
    /// Offer a jump to the last page after the window.
    pub show_last: bool,
    /// Pages are skipped between the window and the last page.
    pub trailing_gap: bool,
}

impl PageInfo {
    pub fn new(page: u32, page_size: u32, total_count: u64) -> Self {
        let page = u64::from(page.max(1));
        let page_size = u64::from(page_size.max(1));
        let total_pages = total_count.div_ceil(page_size);

        let start = (page - 1) * page_size;
        let (first_item, last_item) = if start < total_count {
            (start + 1, (page * page_size).min(total_count))
        } else {
            (0, 0)
        };

        let window_start = page.saturating_sub(2).max(1);
        let window = (window_start..window_start + total_pages.min(u64::from(PAGE_WINDOW)))
            .filter(|p| *p <= total_pages)
            .collect();

        let jumps = total_pages > 1;
        Self {
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
            first_item,
            last_item,
            window,
            show_first: jumps && page > 3,
            leading_gap: jumps && page > 4,
            show_last: jumps && page + 2 < total_pages,
            trailing_gap: jumps && page + 3 < total_pages,
        }
    }
}
