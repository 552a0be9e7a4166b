//! Repository for the `pages` table.
//!
//! Also assembles the paginated [`PageCollection`] from a listing window
//! and a total count.

use sqlx::PgPool;

use quill_core::pagination;
use quill_core::types::DbId;

use crate::models::page::{Page, PageCollection, PageCreated};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, body, created_at, updated_at";

/// Provides CRUD and pagination operations for pages.
pub struct PageRepo;

impl PageRepo {
    /// Insert a new page under a caller-supplied id.
    ///
    /// Idempotent by key: when a row with this id already exists the insert
    /// is a no-op and the existing row is read back and returned as
    /// [`PageCreated::AlreadyExists`]. `created_at` and `updated_at` come
    /// from the store's clock.
    pub async fn create(
        pool: &PgPool,
        id: DbId,
        title: &str,
        body: &[u8],
    ) -> Result<PageCreated, sqlx::Error> {
        let query = format!(
            "INSERT INTO pages (id, title, body)
             VALUES ($1, $2, $3)
             ON CONFLICT (id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        let inserted = sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .bind(title)
            .bind(body)
            .fetch_optional(pool)
            .await?;

        match inserted {
            Some(page) => Ok(PageCreated::Created(page)),
            None => {
                // The conflicting row is canonical; hand it back untouched.
                tracing::debug!(%id, "Page insert collided with an existing id");
                let existing = Self::find(pool, id).await?.ok_or(sqlx::Error::RowNotFound)?;
                Ok(PageCreated::AlreadyExists(existing))
            }
        }
    }

    /// Find a page by id.
    pub async fn find(pool: &PgPool, id: DbId) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE id = $1");
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite a page's title and body, refreshing `updated_at`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        title: &str,
        body: &[u8],
    ) -> Result<Option<Page>, sqlx::Error> {
        let query = format!(
            "UPDATE pages
             SET title = $2, body = $3, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .bind(title)
            .bind(body)
            .fetch_optional(pool)
            .await
    }

    /// List pages ordered by creation time, newest first.
    ///
    /// Skips `offset` rows and returns at most `limit` rows; an exhausted
    /// store yields an empty vec, not an error.
    pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> Result<Vec<Page>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM pages
             ORDER BY created_at DESC
             OFFSET $1 LIMIT $2"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(offset)
            .bind(limit)
            .fetch_all(pool)
            .await
    }

    /// Total number of page rows, independent of any pagination window.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM pages")
            .fetch_one(pool)
            .await
    }

    /// Build the paginated collection for a window: list, count, then derive
    /// page-number metadata. Two reads, no mutation.
    pub async fn collection(
        pool: &PgPool,
        offset: i64,
        limit: i64,
    ) -> Result<PageCollection, sqlx::Error> {
        let pages = Self::list(pool, offset, limit).await?;
        let count = Self::count(pool).await?;

        let results_page_number = pagination::page_number(offset, limit);
        let at_last_page =
            pagination::at_last_page(results_page_number, limit, pages.len() as i64, count);

        Ok(PageCollection {
            next_page: pagination::next_page(results_page_number),
            previous_page: pagination::previous_page(results_page_number),
            results_page_number,
            limit,
            count,
            at_last_page,
            pages,
        })
    }
}
