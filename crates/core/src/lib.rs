//! Domain layer for the Quill blog backend.
//!
//! Zero internal dependencies so it can be used by both the repository
//! layer and the HTTP layer: error taxonomy, shared type aliases, page
//! and user validation rules, and pure pagination arithmetic.

pub mod error;
pub mod pages;
pub mod pagination;
pub mod types;
pub mod users;
