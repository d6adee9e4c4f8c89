//! Page-window types shared by list endpoints and the storage layer.

use serde::{Deserialize, Serialize};

/// Hard cap on how many rows a single page may request.
const MAX_PAGE_SIZE: u64 = 100;

/// A 1-based page window. Out-of-range input is clamped, never rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    pub fn new(page: u64, page_size: u64) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Row offset of the first item in this window.
    pub fn offset(&self) -> u64 {
        self.page_size * self.page.saturating_sub(1)
    }

    /// Row count for the window, for use as a SQL `LIMIT`.
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 25,
        }
    }
}

/// One page of results plus the bookkeeping clients need to walk the rest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    pub items: Vec<T>,
    pub page: u64,
    pub page_size: u64,
    pub total_items: u64,
    pub total_pages: u64,
    pub has_next: bool,
    pub has_previous: bool,
}

impl<T: Serialize> PageResponse<T> {
    /// Wrap a page of items. An empty result set still reports one page
    /// so that `page <= total_pages` holds for the first request.
    pub fn new(items: Vec<T>, page: u64, page_size: u64, total_items: u64) -> Self {
        let total_pages = match total_items {
            0 => 1,
            n => n.div_ceil(page_size),
        };
        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }
}
