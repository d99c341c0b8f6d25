//! Results of offset-paginated collection queries.

/// One page of records plus the total count of records matching the filter.
#[derive(Debug, Clone)]
pub struct Page<T> {
    /// The records in this page.
    pub items: Vec<T>,
    /// Total count of records matching the query across all pages.
    pub total: u64,
}

impl<T> Page<T> {
    /// Creates a new page.
    #[inline]
    pub fn new(items: Vec<T>, total: u64) -> Self {
        Self { items, total }
    }

    /// Creates an empty page.
    #[inline]
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
        }
    }

    /// Maps the items to a different type, keeping the total.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
        }
    }

    /// Total number of pages at the given page size; 0 when nothing matched.
    #[inline]
    pub fn total_pages(&self, limit: u64) -> u64 {
        self.total.div_ceil(limit.max(1))
    }

    /// Whether records exist beyond the given 1-based page.
    ///
    /// Saturates the consumed-record count so that out-of-range pages
    /// compare as exhausted rather than wrapping around.
    #[inline]
    pub fn has_next(&self, page: u64, limit: u64) -> bool {
        page.saturating_mul(limit) < self.total
    }

    /// Whether the given 1-based page has predecessors.
    #[inline]
    pub fn has_previous(&self, page: u64) -> bool {
        page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        let page: Page<i32> = Page::new(vec![], 25);
        assert_eq!(page.total_pages(10), 3);

        let page: Page<i32> = Page::new(vec![], 30);
        assert_eq!(page.total_pages(10), 3);

        let page: Page<i32> = Page::new(vec![], 31);
        assert_eq!(page.total_pages(10), 4);
    }

    #[test]
    fn empty_page_has_zero_pages() {
        let page: Page<i32> = Page::empty();
        assert_eq!(page.total_pages(10), 0);
        assert!(!page.has_next(1, 10));
        assert!(!page.has_previous(1));
    }

    #[test]
    fn has_next_compares_consumed_records() {
        let page: Page<i32> = Page::new(vec![], 25);
        assert!(page.has_next(2, 10));
        assert!(!page.has_next(3, 10));
    }

    #[test]
    fn has_next_saturates_for_huge_pages() {
        let page: Page<i32> = Page::new(vec![], 25);
        assert!(!page.has_next(u64::MAX, 10));
        assert!(!page.has_next(u64::MAX, 50));
    }

    #[test]
    fn has_previous_ignores_total() {
        let page: Page<i32> = Page::empty();
        assert!(page.has_previous(2));
        assert!(!page.has_previous(1));
    }

    #[test]
    fn map_preserves_total() {
        let page = Page::new(vec![1, 2, 3], 9);
        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.items, vec!["1", "2", "3"]);
        assert_eq!(mapped.total, 9);
    }
}
