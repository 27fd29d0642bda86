//! Pagination types
//!
//! A page is a fixed 10-item, 1-indexed slice of an ordered result set.
//! The page number comes from the `?page=` query parameter.

use serde::Deserialize;

/// Items per page, fixed by the API contract
pub const QUESTIONS_PER_PAGE: u32 = 10;

/// 1-indexed page number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(u32);

impl Page {
    /// Page numbers below 1 clamp to 1.
    pub fn new(number: u32) -> Self {
        Self(number.max(1))
    }

    pub fn number(self) -> u32 {
        self.0
    }

    /// SQL OFFSET of the first item on this page.
    pub fn offset(self) -> i64 {
        (i64::from(self.0) - 1) * i64::from(QUESTIONS_PER_PAGE)
    }

    /// SQL LIMIT.
    pub fn limit(self) -> i64 {
        i64::from(QUESTIONS_PER_PAGE)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self(1)
    }
}

/// Query parameters carrying the page number
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<u32>,
}

impl From<PageParams> for Page {
    fn from(params: PageParams) -> Self {
        Self::new(params.page.unwrap_or(1))
    }
}

/// One page of results plus the total match count
#[derive(Debug, Clone)]
pub struct Paginated<T> {
    /// Items on the requested page
    pub items: Vec<T>,
    /// Total matches across all pages
    pub total: i64,
}
