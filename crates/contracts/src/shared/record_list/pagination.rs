use std::ops::Range;

/// Number of pages for `total` items; never less than one
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Current page window (1-based page index)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page: usize,
    page_size: usize,
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Lower bound is enforced here, upper bound by `clamp` once the total is known
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }

    pub fn reset(&mut self) {
        self.page = 1;
    }

    pub fn total_pages(&self, total: usize) -> usize {
        total_pages(total, self.page_size)
    }

    /// Page index clamped to `[1, total_pages]` without mutating
    pub fn effective_page(&self, total: usize) -> usize {
        self.page.clamp(1, self.total_pages(total))
    }

    /// Write the clamped page back; returns the page count
    pub fn clamp(&mut self, total: usize) -> usize {
        self.page = self.effective_page(total);
        self.total_pages(total)
    }

    /// Index range of the effective page inside a list of `total` items
    pub fn window(&self, total: usize) -> Range<usize> {
        let start = (self.effective_page(total) - 1) * self.page_size;
        let end = (start + self.page_size).min(total);
        start.min(total)..end
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_minimum_one() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(12, 5), 3);
        assert_eq!(total_pages(3, 0), 3);
    }

    #[test]
    fn test_window_last_page() {
        let mut p = Pagination::new(5);
        p.set_page(3);
        assert_eq!(p.window(12), 10..12);
    }

    #[test]
    fn test_empty_window() {
        let p = Pagination::new(5);
        assert_eq!(p.window(0), 0..0);
        assert_eq!(p.effective_page(0), 1);
    }

    #[test]
    fn test_clamp_down_after_shrink() {
        let mut p = Pagination::new(5);
        p.set_page(3);
        assert_eq!(p.clamp(10), 2);
        assert_eq!(p.page(), 2);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut p = Pagination::new(5);
        p.set_page(3);
        p.set_page_size(25);
        assert_eq!(p.page(), 1);
        assert_eq!(p.page_size(), 25);
    }

    #[test]
    fn test_set_page_zero_is_first_page() {
        let mut p = Pagination::new(5);
        p.set_page(0);
        assert_eq!(p.page(), 1);
    }
}
