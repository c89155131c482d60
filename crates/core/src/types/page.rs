//! Pagination request and result envelope

use serde::{Deserialize, Serialize};

/// Page number used when the caller does not supply one
pub const DEFAULT_PAGE: u32 = 1;

/// Page size used when the caller does not supply one
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A windowed, optionally filtered read of the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    page_size: u32,
    search: String,
}

impl PageRequest {
    /// Builds a request as given; range checks belong to the caller
    ///
    /// A page of 0 reads like page 1 and a page size of 0 yields an empty
    /// window with zero total pages.
    pub fn new(page: u32, page_size: u32, search: impl Into<String>) -> Self {
        Self {
            page,
            page_size,
            search: search.into(),
        }
    }

    /// 1-based page number
    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Search term; empty means no filter
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Number of matching items skipped before this page starts
    pub fn offset(&self) -> u64 {
        crate::gateway::window_offset(self.page, self.page_size)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            search: String::new(),
        }
    }
}

/// One page of results plus pagination metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageResult<T> {
    pub data: Vec<T>,
    pub page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u64,
}

impl<T> PageResult<T> {
    /// Assembles a page; `page` and `page_size` are echoed from the request unchanged
    pub fn new(data: Vec<T>, request: &PageRequest, total_items: u64) -> Self {
        Self {
            data,
            page: request.page(),
            page_size: request.page_size(),
            total_items,
            total_pages: total_pages(total_items, request.page_size()),
        }
    }
}

/// `ceil(total_items / page_size)`, or 0 when either side is 0
pub fn total_pages(total_items: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(u64::from(page_size))
}
