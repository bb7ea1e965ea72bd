//! Pagination utilities shared by the list endpoints
//!
//! `Pagination` carries the 1-based request values, `PageMeta` the numbers
//! reported back to the caller.

use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_PER_PAGE: u64 = 10;
pub const DEFAULT_MAX_PER_PAGE: u64 = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("page must be >= 1")]
    Page,
    #[error("page is out of range")]
    PageOutOfRange,
    #[error("per_page must be between 1 and {max}")]
    PerPage { max: u64 },
}

/// Configured bounds for caller supplied page sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageLimits {
    pub default_per_page: u64,
    pub max_per_page: u64,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self { default_per_page: DEFAULT_PER_PAGE, max_per_page: DEFAULT_MAX_PER_PAGE }
    }
}

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based page index
    pub page: u64,
    /// items per page
    pub per_page: u64,
}

impl Pagination {
    /// Build from optional request values, rejecting anything outside `1..=max_per_page`.
    pub fn from_request(
        page: Option<u64>,
        per_page: Option<u64>,
        limits: PageLimits,
    ) -> Result<Self, PaginationError> {
        let page = page.unwrap_or(1);
        let per_page = per_page.unwrap_or(limits.default_per_page);
        if page == 0 {
            return Err(PaginationError::Page);
        }
        if per_page == 0 || per_page > limits.max_per_page {
            return Err(PaginationError::PerPage { max: limits.max_per_page });
        }
        // SQLite binds OFFSET as a signed 64-bit integer.
        match (page - 1).checked_mul(per_page) {
            Some(offset) if offset <= i64::MAX as u64 => Ok(Self { page, per_page }),
            _ => Err(PaginationError::PageOutOfRange),
        }
    }

    /// Zero-based page index as expected by SeaORM paginators.
    pub fn page_index(&self) -> u64 {
        self.page - 1
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { page: 1, per_page: DEFAULT_PER_PAGE } }
}

/// Metadata returned next to a page of records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub total: u64,
    pub pages: u64,
    pub current_page: u64,
    pub next_page: Option<u64>,
    pub prev_page: Option<u64>,
}

impl PageMeta {
    pub fn new(total: u64, opts: Pagination) -> Self {
        let pages = total.div_ceil(opts.per_page);
        let page = opts.page;
        Self {
            total,
            pages,
            current_page: page,
            next_page: (page < pages).then(|| page + 1),
            prev_page: (page > 1).then(|| page - 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIMITS: PageLimits = PageLimits { default_per_page: 10, max_per_page: 100 };

    #[test]
    fn defaults_apply_when_absent() {
        let p = Pagination::from_request(None, None, LIMITS).unwrap();
        assert_eq!(p, Pagination { page: 1, per_page: 10 });
        assert_eq!(p.page_index(), 0);
    }

    #[test]
    fn zero_page_is_rejected() {
        assert_eq!(Pagination::from_request(Some(0), None, LIMITS), Err(PaginationError::Page));
    }

    #[test]
    fn per_page_bounds_are_enforced() {
        assert_eq!(
            Pagination::from_request(None, Some(0), LIMITS),
            Err(PaginationError::PerPage { max: 100 })
        );
        assert_eq!(
            Pagination::from_request(None, Some(101), LIMITS),
            Err(PaginationError::PerPage { max: 100 })
        );
        assert!(Pagination::from_request(None, Some(100), LIMITS).is_ok());
    }

    #[test]
    fn offset_must_fit_in_sqlite_integer() {
        assert_eq!(
            Pagination::from_request(Some(u64::MAX), None, LIMITS),
            Err(PaginationError::PageOutOfRange)
        );
        assert_eq!(
            Pagination::from_request(Some(1_000_000_000_000_000_000), None, LIMITS),
            Err(PaginationError::PageOutOfRange)
        );
        let last_ok = i64::MAX as u64 / 10 + 1;
        assert!(Pagination::from_request(Some(last_ok), Some(10), LIMITS).is_ok());
        assert!(Pagination::from_request(Some(last_ok + 1), Some(10), LIMITS).is_err());
    }

    #[test]
    fn meta_for_three_items_two_per_page() {
        let first = PageMeta::new(3, Pagination { page: 1, per_page: 2 });
        assert_eq!(first.pages, 2);
        assert_eq!(first.next_page, Some(2));
        assert_eq!(first.prev_page, None);

        let last = PageMeta::new(3, Pagination { page: 2, per_page: 2 });
        assert_eq!(last.next_page, None);
        assert_eq!(last.prev_page, Some(1));
    }

    #[test]
    fn empty_result_has_zero_pages() {
        let meta = PageMeta::new(0, Pagination::default());
        assert_eq!(meta.pages, 0);
        assert_eq!(meta.current_page, 1);
        assert_eq!(meta.next_page, None);
    }

    #[test]
    fn page_past_the_end_keeps_prev_link() {
        let meta = PageMeta::new(3, Pagination { page: 5, per_page: 2 });
        assert_eq!(meta.next_page, None);
        assert_eq!(meta.prev_page, Some(4));
    }
}
