//! Pagination Engine.
//!
//! Pure slicing over an already ordered sequence. Numbered pages are strictly
//! validated: anything outside `1..=total_pages` is rejected, never clamped.

use crate::error::ListingError;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Page size of the blog index and its numbered pages.
pub const BLOG_POSTS_PER_PAGE: usize = 5;

/// Page size of tag listings and their numbered pages.
pub const TAG_POSTS_PER_PAGE: usize = 10;

/// How many articles the home page shows.
pub const HOME_MAX_DISPLAY: usize = 10;

/// One page of a listing, as handed to the renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            current_page: self.current_page,
            total_pages: self.total_pages,
        }
    }
}

/// Number of pages needed for `count` items; 0 for an empty set.
///
/// # Panics
/// Panics if `page_size` is 0.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    assert!(page_size > 0, "page_size must be > 0");
    count.div_ceil(page_size)
}

/// Every valid page number for `count` items, in order.
pub fn page_numbers(count: usize, page_size: usize) -> RangeInclusive<usize> {
    1..=total_pages(count, page_size)
}

/// Parse a page number from a URL segment.
///
/// The whole segment must be an integer; `"2abc"` and `""` are rejected.
/// Range checking is left to [`paginate`].
pub fn parse_page_number(raw: &str) -> Result<i64, ListingError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ListingError::PageOutOfRange(raw.to_string()))
}

/// Slice page `page_number` (1-based) out of `sorted`.
pub fn paginate<T: Clone>(
    sorted: &[T],
    page_size: usize,
    page_number: i64,
) -> Result<Page<T>, ListingError> {
    let total = total_pages(sorted.len(), page_size);

    let current = usize::try_from(page_number)
        .ok()
        .filter(|page| (1..=total).contains(page))
        .ok_or_else(|| ListingError::PageOutOfRange(page_number.to_string()))?;

    let start = page_size * (current - 1);
    let end = (page_size * current).min(sorted.len());

    Ok(Page {
        items: sorted[start..end].to_vec(),
        current_page: current,
        total_pages: total,
    })
}

/// The unnumbered first page of a listing.
///
/// Unlike [`paginate`], this never fails: an empty set yields an empty page
/// with `total_pages == 0`.
pub fn first_page<T: Clone>(sorted: &[T], page_size: usize) -> Page<T> {
    Page {
        items: sorted.iter().take(page_size).cloned().collect(),
        current_page: 1,
        total_pages: total_pages(sorted.len(), page_size),
    }
}
