//! Pagination constants and arithmetic.
//!
//! This module lives in `core` (zero internal deps) so it can be used by
//! both the repository layer and the API handlers. All functions are pure;
//! the repository combines them with a listing window and a total count to
//! build a page collection.

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Default number of pages per listing window.
pub const DEFAULT_PAGE_LIMIT: i64 = 50;

/// Maximum number of pages per listing window.
pub const MAX_PAGE_LIMIT: i64 = 50;

/// Clamp a requested limit into `1..=max`, falling back to `default` when
/// absent or non-positive.
pub fn clamp_limit(requested: Option<i64>, default: i64, max: i64) -> i64 {
    match requested {
        Some(limit) if limit > 0 => limit.min(max),
        _ => default,
    }
}

/// Row offset for a 1-based results page number. Page numbers below 1 are
/// treated as page 1; offsets saturate at `i64::MAX` rather than overflow,
/// since page numbers arrive straight from query strings.
pub fn offset_for(page: i64, limit: i64) -> i64 {
    (page.max(1) - 1).saturating_mul(limit)
}

// ---------------------------------------------------------------------------
// Page-number metadata
// ---------------------------------------------------------------------------

/// The 1-based results page number implied by a row offset.
///
/// Floor division: any offset inside a window maps to that window's page
/// number. Non-positive offsets and limits both map to page 1.
pub fn page_number(offset: i64, limit: i64) -> i64 {
    if offset <= 0 || limit <= 0 {
        return 1;
    }
    (offset / limit).saturating_add(1)
}

/// The previous page number, floored at 0. Callers must not render a
/// "previous" link when the current page is 1 or lower.
pub fn previous_page(page: i64) -> i64 {
    (page - 1).max(0)
}

/// The next page number, unconditional. Callers gate the "next" link on
/// [`at_last_page`] instead.
pub fn next_page(page: i64) -> i64 {
    page.saturating_add(1)
}

/// Whether a window ending at `page` exhausts the store.
///
/// True iff the rows before this window plus the rows in it account for
/// every row counted.
pub fn at_last_page(page: i64, limit: i64, window_len: i64, count: i64) -> bool {
    (page - 1)
        .saturating_mul(limit)
        .saturating_add(window_len)
        >= count
}
