//! Route definitions for the `/pages` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Routes mounted at `/pages`.
///
/// ```text
/// GET  /        -> list_pages (paginated)
/// POST /        -> create_page
/// GET  /{id}    -> get_page
/// PUT  /{id}    -> save_page
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::list_pages).post(pages::create_page))
        .route("/{id}", get(pages::get_page).put(pages::save_page))
}
