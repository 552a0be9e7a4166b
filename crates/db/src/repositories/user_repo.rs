//! Repository for the `users` table.
//!
//! Lookups return the public columns only; the password hash is reachable
//! solely through [`UserRepo::password_hash`].

use sqlx::PgPool;
use uuid::Uuid;

use quill_core::types::DbId;

use crate::models::user::{CreateUser, User, UserCreated};

/// Public column list shared across queries. The password column is
/// deliberately absent.
const COLUMNS: &str = "id, username, role, created_at, updated_at";

/// Postgres error code for unique constraint violations.
const UNIQUE_VIOLATION: &str = "23505";

/// Provides account operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user under a freshly generated id.
    ///
    /// A duplicate username surfaces as [`UserCreated::UsernameTaken`]
    /// rather than an error. The returned row carries no password hash.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> Result<UserCreated, sqlx::Error> {
        let id: DbId = Uuid::new_v4();
        let query = format!(
            "INSERT INTO users (id, username, password, role)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let result = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&input.username)
            .bind(&input.password_hash)
            .bind(&input.role)
            .fetch_one(pool)
            .await;

        match result {
            Ok(user) => Ok(UserCreated::Created(user)),
            Err(sqlx::Error::Database(db_err))
                if db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
                    && db_err.constraint() == Some("uq_users_username") =>
            {
                Ok(UserCreated::UsernameTaken)
            }
            Err(err) => Err(err),
        }
    }

    /// Find a user by id.
    pub async fn find(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE username = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Fetch the stored password hash for a user. Used only by the
    /// authentication path.
    pub async fn password_hash(pool: &PgPool, id: DbId) -> Result<Option<Vec<u8>>, sqlx::Error> {
        sqlx::query_scalar("SELECT password FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
