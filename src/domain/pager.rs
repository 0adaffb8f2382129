//! Pager - Pagination Calculator
//!
//! Pure computation of a pager descriptor from the size of the cached
//! result set. Recomputed on every page change or list refresh, never
//! mutated in place.

use serde::Serialize;

/// Computed descriptor for a paginated view.
///
/// `start_index` / `end_index` are 0-based inclusive bounds into the full
/// result set. They are signed: an empty collection yields
/// `end_index == -1` with an empty `pages` sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Pager {
    pub total_items: usize,
    /// Current page, clamped to `[1, total_pages]` (0 when the collection
    /// is empty)
    pub current_page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    /// First page number rendered as a link
    pub start_page: usize,
    /// Last page number rendered as a link
    pub end_page: usize,
    pub start_index: i64,
    pub end_index: i64,
    /// Ordered page numbers to render as links
    pub pages: Vec<usize>,
}

/// Compute the pager descriptor for `current_page` over `total_items`.
///
/// `max_pages == 0` is a sentinel for "unbounded" (show all page links).
/// Note that the link range always spans `1..=total_pages` regardless of a
/// non-zero `max_pages`; the parameter is accepted for compatibility but
/// the window is never narrowed. Kept as-is from the shipped behavior.
///
/// Total over all inputs with `page_size >= 1`. `page_size == 0` is a
/// caller contract violation.
pub fn paginate(
    total_items: usize,
    current_page: usize,
    page_size: usize,
    max_pages: usize,
) -> Pager {
    debug_assert!(page_size > 0, "page_size must be positive");

    let total_pages = total_items.div_ceil(page_size);

    let current_page = if current_page > total_pages {
        total_pages
    } else {
        current_page
    };

    // max_pages == 0 means "all pages"; a non-zero value would bound the
    // link window, but the window below always spans the full range, so
    // the sentinel is the only case that matters.
    let _ = max_pages;

    let start_page = 1;
    let end_page = total_pages;

    let start_index = (current_page as i64 - 1) * page_size as i64;
    let end_index = (start_index + page_size as i64 - 1).min(total_items as i64 - 1);

    let pages: Vec<usize> = (start_page..=end_page).collect();

    Pager {
        total_items,
        current_page,
        page_size,
        total_pages,
        start_page,
        end_page,
        start_index,
        end_index,
        pages,
    }
}
