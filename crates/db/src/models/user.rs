//! User row model and DTOs.
//!
//! [`User`] deliberately carries no password hash: lookups select the
//! public columns only, and the hash is fetched separately by the
//! authentication path.

use serde::Serialize;
use sqlx::FromRow;

use quill_core::types::{DbId, Timestamp};

/// The public columns of a row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub username: String,
    pub role: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a user. The hash is an argon2id PHC string as bytes.
#[derive(Debug)]
pub struct CreateUser {
    pub username: String,
    pub password_hash: Vec<u8>,
    pub role: String,
}

/// Outcome of a user create. A taken username is a distinct result rather
/// than a generic storage failure, so sign-up can report it to the client.
#[derive(Debug)]
pub enum UserCreated {
    Created(User),
    UsernameTaken,
}
