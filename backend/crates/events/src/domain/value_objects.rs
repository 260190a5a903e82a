//! Listing Filters and Pagination

use serde::Serialize;

/// Filter options for the event listing
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Include events whose date has passed
    pub show_past: bool,
    /// `Some(true)` = free only, `Some(false)` = paid only
    pub is_free: Option<bool>,
    /// Case-insensitive substring match over name and location
    pub search: Option<String>,
}

/// A page request, sanitized to at least page 1 / limit 1
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub page: u32,
    pub limit: u32,
}

impl Page {
    pub const DEFAULT_LIMIT: u32 = 10;

    pub fn new(page: Option<u32>, limit: Option<u32>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(Self::DEFAULT_LIMIT).max(1),
        }
    }

    /// Row offset for the query. Both factors are client-controlled, so
    /// the arithmetic is widened to u64 rather than trusted to fit u32.
    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.limit as u64
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Pagination block returned alongside a listing page
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u32,
    pub total_pages: u32,
    pub total_events: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl Pagination {
    pub fn compute(page: Page, total: u64) -> Self {
        let total_pages = total.div_ceil(page.limit as u64) as u32;
        Self {
            current_page: page.page,
            total_pages,
            total_events: total,
            has_next_page: page.page < total_pages,
            has_prev_page: page.page > 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_defaults_and_sanitizing() {
        let page = Page::new(None, None);
        assert_eq!((page.page, page.limit), (1, 10));
        assert_eq!(page.offset(), 0);

        let page = Page::new(Some(0), Some(0));
        assert_eq!((page.page, page.limit), (1, 1));

        let page = Page::new(Some(3), Some(10));
        assert_eq!(page.offset(), 20);
    }

    #[test]
    fn test_offset_does_not_overflow_on_huge_page_numbers() {
        let page = Page::new(Some(u32::MAX), Some(u32::MAX));
        assert_eq!(
            page.offset(),
            (u32::MAX as u64 - 1) * u32::MAX as u64
        );

        let page = Page::new(Some(429_496_731), Some(10));
        assert_eq!(page.offset(), 4_294_967_300);
    }

    #[test]
    fn test_pagination_compute() {
        let p = Pagination::compute(Page::new(Some(2), Some(10)), 25);
        assert_eq!(p.total_pages, 3);
        assert_eq!(p.total_events, 25);
        assert!(p.has_next_page);
        assert!(p.has_prev_page);

        let p = Pagination::compute(Page::new(Some(1), Some(10)), 0);
        assert_eq!(p.total_pages, 0);
        assert!(!p.has_next_page);
        assert!(!p.has_prev_page);
    }
}
