//! Handlers for the `/users` resource (sign-up and public lookup).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use uuid::Uuid;

use quill_core::error::CoreError;
use quill_core::users::{validate_password, validate_username, DEFAULT_ROLE};
use quill_db::models::user::{CreateUser, UserCreated};
use quill_db::repositories::UserRepo;

use crate::auth::password::hash_password;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /users`.
#[derive(Debug, Deserialize)]
pub struct SignUpRequest {
    pub username: String,
    pub password: String,
}

/// POST /users
///
/// Sign up a new account. Every account gets the single `user` role. A
/// taken username is a 409 with a distinct message; the plaintext password
/// never leaves this handler un-hashed.
pub async fn sign_up(
    State(state): State<AppState>,
    Json(input): Json<SignUpRequest>,
) -> AppResult<impl IntoResponse> {
    validate_username(&input.username).map_err(AppError::Core)?;
    validate_password(&input.password).map_err(AppError::Core)?;

    let hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        username: input.username.trim().to_string(),
        password_hash: hash.into_bytes(),
        role: DEFAULT_ROLE.to_string(),
    };

    match UserRepo::create(&state.pool, &create).await? {
        UserCreated::Created(user) => {
            tracing::info!(user_id = %user.id, "User signed up");
            Ok((StatusCode::CREATED, Json(DataResponse { data: user })))
        }
        UserCreated::UsernameTaken => Err(AppError::Core(CoreError::Conflict(format!(
            "Username '{}' is already taken",
            create.username
        )))),
    }
}

/// GET /users/{id}
///
/// Public account record; never includes password material.
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<impl IntoResponse> {
    let user = UserRepo::find(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    Ok(Json(DataResponse { data: user }))
}
