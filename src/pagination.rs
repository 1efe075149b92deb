//! Response envelope for paginated listings.

use serde::Serialize;

/// Page size used when the caller does not supply a usable one.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 10;
/// Largest page size accepted at the HTTP boundary.
pub const MAX_ITEMS_PER_PAGE: usize = 100;

/// Number of pages needed for `total_items`, never less than one.
pub fn total_pages(total_items: usize, per_page: usize) -> usize {
    let per_page = if per_page == 0 {
        DEFAULT_ITEMS_PER_PAGE
    } else {
        per_page
    };
    total_items.div_ceil(per_page).max(1)
}

/// One page of results plus the metadata needed to request the others.
///
/// Serializes as `{data, page, perPage, totalItems, totalPages}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    /// Wraps `items` in an envelope. A zero page becomes 1 and a zero page
    /// size becomes [`DEFAULT_ITEMS_PER_PAGE`].
    pub fn new(items: Vec<T>, total_items: usize, page: usize, per_page: usize) -> Self {
        let page = if page == 0 { 1 } else { page };
        let per_page = if per_page == 0 {
            DEFAULT_ITEMS_PER_PAGE
        } else {
            per_page
        };

        Self {
            data: items,
            page,
            per_page,
            total_items,
            total_pages: total_pages(total_items, per_page),
        }
    }
}
