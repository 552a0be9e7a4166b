pub mod auth;
pub mod health;
pub mod pages;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /pages              list (GET), create (POST)
/// /pages/{id}         view (GET), save (PUT)
/// /users              sign up (POST)
/// /users/{id}         public record (GET)
/// /auth/login         verify credentials (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/pages", pages::router())
        .nest("/users", users::router())
        .nest("/auth", auth::router())
}
