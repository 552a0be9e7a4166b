//! Page row model, DTOs, and the derived pagination collection.

use serde::{Deserialize, Serialize, Serializer};
use sqlx::FromRow;

use quill_core::types::{DbId, Timestamp};

/// A row from the `pages` table.
///
/// `body` is arbitrary byte content (BYTEA). For API responses it is
/// serialized as a UTF-8 string, lossily; bodies arrive from text forms so
/// replacement characters only appear for content that was never valid text.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Page {
    pub id: DbId,
    pub title: String,
    #[serde(serialize_with = "body_as_text")]
    pub body: Vec<u8>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

fn body_as_text<S: Serializer>(body: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&String::from_utf8_lossy(body))
}

/// DTO for creating a page. A missing `id` is generated server-side; a
/// caller-supplied `id` makes the create idempotent by key.
#[derive(Debug, Deserialize)]
pub struct CreatePage {
    pub id: Option<DbId>,
    pub title: String,
    pub body: String,
}

/// DTO for saving edits to an existing page. Both fields are required.
#[derive(Debug, Deserialize)]
pub struct UpdatePage {
    pub title: String,
    pub body: String,
}

/// Outcome of a page create.
///
/// Inserts are idempotent by id: a colliding id is not an error, but the
/// collision is surfaced explicitly so callers can branch on it, and the
/// carried row is always the canonical stored one.
#[derive(Debug)]
pub enum PageCreated {
    /// A new row was inserted.
    Created(Page),
    /// A row with this id already existed; nothing was written.
    AlreadyExists(Page),
}

impl PageCreated {
    /// The canonical stored row, whichever way the create went.
    pub fn into_page(self) -> Page {
        match self {
            PageCreated::Created(page) | PageCreated::AlreadyExists(page) => page,
        }
    }
}

/// A paginated window over pages plus derived page-number metadata.
///
/// `count` is the total number of rows in the store, independent of the
/// window. Invariant: `at_last_page` is true iff
/// `(results_page_number - 1) * limit + pages.len() >= count`.
#[derive(Debug, Serialize)]
pub struct PageCollection {
    pub pages: Vec<Page>,
    pub count: i64,
    pub results_page_number: i64,
    pub limit: i64,
    pub next_page: i64,
    pub previous_page: i64,
    pub at_last_page: bool,
}
