//! HTTP-level integration tests for sign-up and login.
//!
//! Covers the sign-up flow, the duplicate-username conflict, and the
//! requirement that every login failure cause looks identical to the
//! client.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json};
use serde_json::json;
use sqlx::PgPool;

/// Sign up a user via the API and return the public record.
async fn sign_up(pool: &PgPool, username: &str, password: &str) -> serde_json::Value {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/users",
        json!({ "username": username, "password": password }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

async fn login(pool: &PgPool, username: &str, password: &str) -> axum::response::Response {
    post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/auth/login",
        json!({ "username": username, "password": password }),
    )
    .await
}

// ---------------------------------------------------------------------------
// Sign-up
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn sign_up_returns_public_record_without_password(pool: PgPool) {
    let user = sign_up(&pool, "gopher", "correct horse battery staple").await;

    assert_eq!(user["username"], "gopher");
    assert_eq!(user["role"], "user");
    assert!(user.get("password").is_none());
    assert!(user.get("password_hash").is_none());

    // The record is publicly retrievable by id.
    let id = user["id"].as_str().unwrap();
    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/users/{id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_username_is_a_409(pool: PgPool) {
    sign_up(&pool, "gopher", "first password").await;

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/v1/users",
        json!({ "username": "gopher", "password": "second password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert!(json["error"].as_str().unwrap().contains("gopher"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn blank_sign_up_fields_are_a_400(pool: PgPool) {
    for body in [
        json!({ "username": "", "password": "some password" }),
        json!({ "username": "gopher", "password": "" }),
    ] {
        let response = post_json(common::build_test_app(pool.clone()), "/api/v1/users", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn missing_user_lookup_is_a_404(pool: PgPool) {
    let response = get(
        common::build_test_app(pool.clone()),
        &format!("/api/v1/users/{}", uuid::Uuid::new_v4()),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_correct_credentials_succeeds(pool: PgPool) {
    sign_up(&pool, "gopher", "correct horse battery staple").await;

    let response = login(&pool, "gopher", "correct horse battery staple").await;
    assert_eq!(response.status(), StatusCode::OK);

    let user = body_json(response).await["data"].clone();
    assert_eq!(user["username"], "gopher");
    assert!(user.get("password").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_accepts_the_padded_username_it_signed_up_with(pool: PgPool) {
    // Sign-up stores the trimmed username, so a user who signed up with
    // stray whitespace must still be able to log in with either form.
    sign_up(&pool, "  gopher ", "correct horse battery staple").await;

    for username in ["  gopher ", "gopher"] {
        let response = login(&pool, username, "correct horse battery staple").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["data"]["username"], "gopher");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn every_login_failure_cause_looks_identical(pool: PgPool) {
    sign_up(&pool, "gopher", "correct horse battery staple").await;

    // Wrong password, unknown user, and empty password must be
    // indistinguishable from each other.
    let mut bodies = Vec::new();
    for (username, password) in [
        ("gopher", "wrong password"),
        ("nobody", "correct horse battery staple"),
        ("gopher", ""),
    ] {
        let response = login(&pool, username, password).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        bodies.push(body_json(response).await);
    }

    assert_eq!(bodies[0], bodies[1]);
    assert_eq!(bodies[1], bodies[2]);
    assert_eq!(bodies[0]["code"], "UNAUTHORIZED");
}
