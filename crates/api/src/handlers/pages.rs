//! Handlers for the `/pages` resource.
//!
//! Blank required fields are rejected before the store is touched; a
//! missing row on direct lookup is a 404; an id collision on create is an
//! idempotent success carrying the canonical stored row.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use uuid::Uuid;

use quill_core::error::CoreError;
use quill_core::pages::{validate_body, validate_title};
use quill_core::pagination::{clamp_limit, offset_for, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use quill_db::models::page::{CreatePage, PageCreated, UpdatePage};
use quill_db::repositories::PageRepo;

use crate::error::{AppError, AppResult};
use crate::query::ListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /pages
///
/// Paginated collection of pages, newest first. `page` defaults to 1 and
/// floors at 1; `limit` is clamped to the window maximum.
pub async fn list_pages(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    let page = params.page.filter(|p| *p > 0).unwrap_or(1);
    let offset = offset_for(page, limit);

    let collection = PageRepo::collection(&state.pool, offset, limit).await?;

    Ok(Json(DataResponse { data: collection }))
}

/// POST /pages
///
/// Create a page. A missing id is generated here (the store never assigns
/// ids). 201 for a fresh insert, 200 with the existing row for a collision.
pub async fn create_page(
    State(state): State<AppState>,
    Json(input): Json<CreatePage>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(AppError::Core)?;
    validate_body(&input.body).map_err(AppError::Core)?;

    let id = input.id.unwrap_or_else(Uuid::new_v4);

    match PageRepo::create(&state.pool, id, &input.title, input.body.as_bytes()).await? {
        PageCreated::Created(page) => {
            tracing::info!(page_id = %page.id, "Page created");
            Ok((StatusCode::CREATED, Json(DataResponse { data: page })))
        }
        PageCreated::AlreadyExists(page) => {
            Ok((StatusCode::OK, Json(DataResponse { data: page })))
        }
    }
}

/// GET /pages/{id}
pub async fn get_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let page = PageRepo::find(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Page", id }))?;

    Ok(Json(DataResponse { data: page }))
}

/// PUT /pages/{id}
///
/// Save edits: overwrites title and body and refreshes `updated_at`.
pub async fn save_page(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(input): Json<UpdatePage>,
) -> AppResult<impl IntoResponse> {
    validate_title(&input.title).map_err(AppError::Core)?;
    validate_body(&input.body).map_err(AppError::Core)?;

    let page = PageRepo::update(&state.pool, id, &input.title, input.body.as_bytes())
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Page", id }))?;

    Ok(Json(DataResponse { data: page }))
}
