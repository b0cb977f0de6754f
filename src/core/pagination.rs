//! # Pagination Engine
//!
//! Slices query results into fixed-size pages. There is always at least one
//! page, even for an empty list, and the requested page is clamped rather
//! than rejected.

pub const DEFAULT_PAGE_SIZE: usize = 12;

#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// The page actually used after clamping, 1-based.
    pub current_page: usize,
    pub total_pages: usize,
    /// Size of the full result list, before slicing.
    pub total_items: usize,
}

/// `max(1, ceil(len / page_size))`. A zero page size is treated as 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

pub fn paginate<T>(items: Vec<T>, page_size: usize, current_page: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_pages(total_items, page_size);
    let current_page = clamp_page(current_page, total_pages);

    let start = (current_page - 1) * page_size;
    let items = items.into_iter().skip(start).take(page_size).collect();

    Page {
        items,
        current_page,
        total_pages,
        total_items,
    }
}
