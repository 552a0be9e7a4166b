//! Route definitions for the `/users` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// POST /        -> sign_up
/// GET  /{id}    -> get_user
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(users::sign_up))
        .route("/{id}", get(users::get_user))
}
