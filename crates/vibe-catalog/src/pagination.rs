//! Pagination math for the product list.

use serde::Serialize;

/// Number of page buttons shown at once.
pub const PAGE_WINDOW: usize = 5;

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
    /// Total number of items.
    pub total: u64,
    /// Total number of pages, at least 1.
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info. `page` and `per_page` are raised to 1.
    pub fn new(page: u32, per_page: u32, total: u64) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let total_pages = if total == 0 {
            1
        } else {
            total.div_ceil(per_page as u64).min(u32::MAX as u64) as u32
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Offset of the first item on this page.
    pub fn offset(&self) -> u64 {
        (self.page as u64 - 1) * self.per_page as u64
    }

    /// Page numbers to show as buttons.
    ///
    /// At most `max_visible` consecutive pages, centred on the current page
    /// and shifted to stay inside `1..=total_pages`.
    pub fn page_numbers(&self, max_visible: usize) -> Vec<u32> {
        let total = self.total_pages as i64;
        let max_visible = max_visible.max(1) as i64;

        if total <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = (self.page as i64 - half).max(1);
        let end = (start + max_visible - 1).min(total);
        let start = (end - max_visible + 1).max(1);

        (start as u32..=end as u32).collect()
    }

    /// Only worth rendering with more than one page.
    pub fn should_render(&self) -> bool {
        self.total_pages > 1
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 9, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_basic() {
        let p = Pagination::new(2, 10, 45);
        assert_eq!(p.total_pages, 5);
        assert!(p.has_next);
        assert!(p.has_prev);
        assert_eq!(p.offset(), 10);
    }

    #[test]
    fn test_pagination_empty() {
        let p = Pagination::new(1, 9, 0);
        assert_eq!(p.total_pages, 1);
        assert!(!p.should_render());
        assert!(!p.has_prev && !p.has_next);
    }

    #[test]
    fn test_few_pages_show_all_from_one() {
        for total_pages in 1..=5u64 {
            let p = Pagination::new(1, 10, total_pages * 10);
            let expected: Vec<u32> = (1..=total_pages as u32).collect();
            assert_eq!(p.page_numbers(PAGE_WINDOW), expected);
        }
    }

    #[test]
    fn test_window_clamps_at_start() {
        for page in 1..=3 {
            let p = Pagination::new(page, 10, 200);
            assert_eq!(p.page_numbers(PAGE_WINDOW), vec![1, 2, 3, 4, 5]);
        }
    }

    #[test]
    fn test_window_clamps_at_end() {
        for page in 18..=20 {
            let p = Pagination::new(page, 10, 200);
            assert_eq!(p.page_numbers(PAGE_WINDOW), vec![16, 17, 18, 19, 20]);
        }
    }

    #[test]
    fn test_window_centres_in_middle() {
        let p = Pagination::new(10, 10, 200);
        assert_eq!(p.page_numbers(PAGE_WINDOW), vec![8, 9, 10, 11, 12]);
    }

    #[test]
    fn test_page_past_end_stays_in_range() {
        let p = Pagination::new(40, 10, 200);
        assert_eq!(p.page_numbers(PAGE_WINDOW), vec![16, 17, 18, 19, 20]);
        assert!(!p.has_next);
    }

    #[test]
    fn test_window_always_within_bounds() {
        for total in [51u64, 60, 99, 194] {
            let p0 = Pagination::new(1, 9, total);
            for page in 1..=p0.total_pages {
                let numbers = Pagination::new(page, 9, total).page_numbers(PAGE_WINDOW);
                assert_eq!(numbers.len(), PAGE_WINDOW.min(p0.total_pages as usize));
                assert!(numbers.contains(&page));
                assert!(*numbers.first().unwrap() >= 1);
                assert!(*numbers.last().unwrap() <= p0.total_pages);
            }
        }
    }
}
