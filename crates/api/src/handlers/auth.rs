//! Handler for `/auth/login` (credential verification).

use axum::extract::State;
use axum::Json;
use serde::Deserialize;

use quill_core::error::CoreError;
use quill_db::models::user::User;
use quill_db::repositories::UserRepo;

use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// POST /auth/login
///
/// Verify credentials and return the public user record. Every failure
/// cause (unknown user, empty password, wrong password, missing hash)
/// produces the same response; the specific cause is only logged.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<DataResponse<User>>> {
    let user = authenticate(&state, &input).await?;
    Ok(Json(DataResponse { data: user }))
}

/// Generic credential-failure error. Deliberately cause-free.
fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}

async fn authenticate(state: &AppState, input: &LoginRequest) -> AppResult<User> {
    if input.username.trim().is_empty() || input.password.is_empty() {
        tracing::warn!("Login attempt with blank credentials");
        return Err(invalid_credentials());
    }

    // Usernames are stored trimmed at sign-up; trim here so the same
    // string a user signed up with always resolves.
    let username = input.username.trim();
    let user = UserRepo::find_by_username(&state.pool, username)
        .await?
        .ok_or_else(|| {
            tracing::warn!(username = %username, "Login attempt for unknown username");
            invalid_credentials()
        })?;

    let stored = UserRepo::password_hash(&state.pool, user.id)
        .await?
        .ok_or_else(|| {
            tracing::warn!(user_id = %user.id, "No stored password hash for user");
            invalid_credentials()
        })?;

    let hash = std::str::from_utf8(&stored)
        .map_err(|e| AppError::InternalError(format!("Stored hash is not valid UTF-8: {e}")))?;

    let verified = verify_password(&input.password, hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !verified {
        tracing::warn!(user_id = %user.id, "Password verification failed");
        return Err(invalid_credentials());
    }

    Ok(user)
}
