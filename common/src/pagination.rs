//! Page arithmetic for result lists.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// One-based.
    pub current_page: u32,
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self { current_page: 1, total_pages: 0 }
    }
}

impl Pagination {
    pub fn from_results(current_page: u32, results: u64, page_size: u32) -> Self {
        Self { current_page: current_page.max(1), total_pages: total_pages(results, page_size) }
    }

    pub fn can_go_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Clamps a requested page into `1..=total_pages`; unknown totals only clamp the lower bound.
    pub fn clamp(&self, page: u32) -> u32 {
        let page = page.max(1);
        if self.total_pages == 0 { page } else { page.min(self.total_pages) }
    }

    /// Zero-based offset of the first item on the current page.
    pub fn first_item_offset(&self, page_size: u32) -> u64 {
        (self.current_page.max(1) as u64 - 1) * page_size as u64
    }
}

pub fn total_pages(results: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = results.div_ceil(page_size as u64);
    u32::try_from(pages).unwrap_or(u32::MAX)
}
