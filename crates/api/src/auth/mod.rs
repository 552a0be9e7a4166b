//! Authentication building blocks.
//!
//! Only password hashing and verification live here; there is no session
//! or token layer (login is stateless and simply verifies credentials).

pub mod password;
