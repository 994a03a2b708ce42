//! The paginator: fixed-size page slicing with page metadata.

use serde::{Deserialize, Serialize};

/// A page request: 1-based page number and page size.
///
/// `page >= 1` and `page_size > 0` are caller preconditions (the caller
/// clamps page changes to `[1, total_pages]` before asking). The
/// paginator degrades rather than panicking when they are violated:
/// page 0 behaves as page 1, size 0 as size 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSpec {
    /// 1-based page number.
    pub page: usize,
    /// Records per page.
    pub page_size: usize,
}

impl PageSpec {
    /// Creates a page request.
    pub fn new(page: usize, page_size: usize) -> Self {
        PageSpec { page, page_size }
    }

    /// Creates a request for the first page.
    pub fn first(page_size: usize) -> Self {
        PageSpec::new(1, page_size)
    }
}

/// One page of results plus the metadata a pager widget needs.
///
/// `total_pages` is at least 1 even for an empty collection: an empty
/// result is a valid single page, not an error.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    /// The records on this page, in order.
    pub items: Vec<T>,
    /// The page these items belong to (1-based).
    pub page: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Total number of records across all pages.
    pub total_count: usize,
}

impl<T> PageResult<T> {
    /// Returns `true` if a previous page exists.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Returns `true` if a further page exists.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Number of records on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if this page holds no records.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a, T: Clone> PageResult<&'a T> {
    /// Clones the page's records into an owned result.
    pub fn cloned(self) -> PageResult<T> {
        PageResult {
            items: self.items.into_iter().cloned().collect(),
            page: self.page,
            total_pages: self.total_pages,
            total_count: self.total_count,
        }
    }
}

/// Slices `records` into the requested page.
///
/// The slice is `[(page-1)*size, page*size)` clipped to the collection;
/// a page beyond the last yields an empty `items` with the metadata
/// intact, never an error. The paginator does not clamp the requested
/// page; out-of-range requests are answered honestly.
///
/// # Example
///
/// ```
/// use roster_facet::{paginate, PageSpec};
///
/// let records: Vec<u32> = (1..=8).collect();
///
/// let page1 = paginate(&records, &PageSpec::new(1, 5));
/// assert_eq!(page1.items, [&1, &2, &3, &4, &5]);
/// assert_eq!(page1.total_pages, 2);
///
/// let page3 = paginate(&records, &PageSpec::new(3, 5));
/// assert!(page3.items.is_empty());
/// assert_eq!(page3.total_count, 8);
/// ```
pub fn paginate<'a, I, T>(records: I, spec: &PageSpec) -> PageResult<&'a T>
where
    I: IntoIterator<Item = &'a T>,
{
    let all: Vec<&'a T> = records.into_iter().collect();
    let total_count = all.len();
    let size = spec.page_size.max(1);
    let page = spec.page.max(1);
    let total_pages = total_count.div_ceil(size).max(1);

    let start = (page - 1).saturating_mul(size);
    let items = if start >= total_count {
        Vec::new()
    } else {
        all[start..(start + size).min(total_count)].to_vec()
    };

    PageResult {
        items,
        page,
        total_pages,
        total_count,
    }
}
