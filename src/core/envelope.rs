//! Uniform response envelope shapes
//!
//! Every successful handler output maps to exactly one of these shapes:
//! a single [`Item`], a plain [`Collection`] or a [`Paginated`] collection
//! with page metadata. Errors are shaped by [`crate::core::error`].

use serde::Serialize;

/// A single transformed record
#[derive(Debug, Serialize)]
pub struct Item<T> {
    pub data: T,
}

/// An ordered sequence of transformed records
///
/// Part of the envelope contract for non-paginated collections. The current
/// handlers always paginate their list output, so nothing constructs this
/// today; it is the shape to reach for when an endpoint returns an unpaged
/// sequence.
#[derive(Debug, Serialize)]
pub struct Collection<T> {
    pub data: Vec<T>,
}

/// A page of transformed records with pagination metadata
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PageMeta,
}

/// Pagination metadata
#[derive(Debug, Serialize)]
pub struct PageMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub per_page: usize,

    /// Total number of items
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PageMeta {
    /// Create pagination metadata from calculation
    ///
    /// `page` comes straight from the query string; the offset math
    /// saturates so arbitrarily large page numbers stay valid input.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(per_page) };
        let start = page.saturating_sub(1).saturating_mul(per_page);

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: start.saturating_add(per_page) < total,
            has_prev: page > 1,
        }
    }
}
