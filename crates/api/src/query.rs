//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Listing parameters (`?page=&limit=`).
///
/// `page` is a 1-based results page number; values below 1 fall back to 1.
/// `limit` is clamped in the handler via `quill_core::pagination`.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub page: Option<i64>,
    pub limit: Option<i64>,
}
