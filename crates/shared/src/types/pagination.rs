//! Pagination types for listing responses.

use serde::{Deserialize, Serialize};

/// Upper bound on page size, regardless of what the client asks for.
pub const MAX_PER_PAGE: u32 = 100;

/// Request parameters for paginated queries.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number (1-indexed).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Number of items per page.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    25
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl PageRequest {
    /// Returns a copy with page and per_page forced into valid ranges.
    ///
    /// Page numbers start at 1; per_page is clamped to `1..=MAX_PER_PAGE`.
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            page: self.page.max(1),
            per_page: self.per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    /// Calculates the offset for the upstream query.
    #[must_use]
    pub fn offset(self) -> u64 {
        let normalized = self.normalized();
        u64::from(normalized.page - 1) * u64::from(normalized.per_page)
    }

    /// Returns the limit for the upstream query.
    #[must_use]
    pub fn limit(self) -> u64 {
        u64::from(self.normalized().per_page)
    }
}

/// Pagination metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Current page number.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
    /// Total number of items across all pages.
    pub total_items: u64,
    /// Total number of pages.
    pub total_pages: u32,
    /// Whether another page follows this one.
    pub has_next: bool,
}

/// A single page of items plus its metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items in the current page.
    pub items: Vec<T>,
    /// Pagination metadata.
    pub meta: PageMeta,
}

impl<T> Page<T> {
    /// Creates a page from items, the originating request, and the total count.
    #[must_use]
    pub fn new(items: Vec<T>, request: PageRequest, total_items: u64) -> Self {
        let request = request.normalized();
        let total_pages = total_items
            .div_ceil(u64::from(request.per_page))
            .max(1)
            .try_into()
            .unwrap_or(u32::MAX);

        Self {
            items,
            meta: PageMeta {
                page: request.page,
                per_page: request.per_page,
                total_items,
                total_pages,
                has_next: request.page < total_pages,
            },
        }
    }

    /// Maps the items to a different type, keeping the metadata.
    ///
    /// Lets the listing layer replace raw views with redacted views without
    /// recomputing page bookkeeping.
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}
