//! Client-side pagination over an already-filtered result list
//!
//! The server returns the full filtered set in one response; slicing it into
//! pages is purely a client concern.

use serde::Serialize;

/// Pagination metadata for a result list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Current page number (starts at 1, already clamped)
    pub page: usize,

    /// Number of items per page
    pub page_size: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages, never less than 1
    pub total_pages: usize,

    pub has_next: bool,
    pub has_prev: bool,
}

impl PageMeta {
    pub fn new(page: usize, page_size: usize, total: usize) -> Self {
        let page_size = page_size.max(1);
        let total_pages = total_pages(total, page_size);
        let page = clamp_page(page, total_pages);

        Self {
            page,
            page_size,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }
}

/// `max(1, ceil(total / page_size))`
///
/// An empty list still has one (empty) page, so a current-page value of 1 is
/// always valid.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1)).max(1)
}

/// Clamp a requested page into `[1, total_pages]`
///
/// When a filter narrows the list so that the current page falls past the
/// end, the page is pulled back to the last valid page rather than producing
/// an empty slice.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Slice one page out of a result list
///
/// Out-of-range pages are clamped, not rejected. Returns the page slice and
/// its metadata.
pub fn paginate<T: Clone>(items: &[T], page_size: usize, page: usize) -> (Vec<T>, PageMeta) {
    let meta = PageMeta::new(page, page_size, items.len());
    let start = (meta.page - 1) * meta.page_size;
    let end = (start + meta.page_size).min(items.len());
    let slice = if start >= items.len() {
        Vec::new()
    } else {
        items[start..end].to_vec()
    };
    (slice, meta)
}

/// Visible page numbers around the current page, at most `max_visible` wide
///
/// Used by pagination controls to render a bounded run of page buttons.
pub fn page_window(current: usize, total_pages: usize, max_visible: usize) -> Vec<usize> {
    if total_pages == 0 || max_visible == 0 {
        return Vec::new();
    }
    let current = clamp_page(current, total_pages);
    let mut start = current.saturating_sub(max_visible / 2).max(1);
    let mut end = start + max_visible - 1;
    if end > total_pages {
        end = total_pages;
        start = end.saturating_sub(max_visible - 1).max(1);
    }
    (start..=end).collect()
}
