//! Integration tests for registration, login, refresh, and logout.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json, register_user};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_then_login_round_trips(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/auth/register",
        None,
        serde_json::json!({ "email": "ada@example.com", "password": "integration-pw-1" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // The registration response reflects the freshly created row.
    let json = body_json(response).await;
    assert!(json["user"]["id"].as_i64().unwrap() > 0);
    assert_eq!(json["user"]["email"], "ada@example.com");
    assert_eq!(json["user"]["is_pro"], false);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        None,
        serde_json::json!({ "email": "ada@example.com", "password": "integration-pw-1" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert_eq!(json["user"]["email"], "ada@example.com");
    assert_eq!(json["user"]["is_pro"], false);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_normalizes_email_case(pool: PgPool) {
    let app = common::build_test_app(pool);

    register_user(app.clone(), "  Grace@Example.COM ").await;

    // Login with the lowercased form must find the same account.
    let response = post_json(
        app,
        "/api/v1/auth/login",
        None,
        serde_json::json!({ "email": "grace@example.com", "password": "integration-pw-1" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_email_is_a_conflict(pool: PgPool) {
    let app = common::build_test_app(pool);

    register_user(app.clone(), "dup@example.com").await;

    let response = post_json(
        app,
        "/api/v1/auth/register",
        None,
        serde_json::json!({ "email": "dup@example.com", "password": "another-pw-99" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn register_rejects_bad_email_and_short_password(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = post_json(
        app.clone(),
        "/api/v1/auth/register",
        None,
        serde_json::json!({ "email": "not-an-email", "password": "long-enough-pw" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = post_json(
        app,
        "/api/v1/auth/register",
        None,
        serde_json::json!({ "email": "ok@example.com", "password": "short" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn wrong_password_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);

    register_user(app.clone(), "bob@example.com").await;

    let response = post_json(
        app,
        "/api/v1/auth/login",
        None,
        serde_json::json!({ "email": "bob@example.com", "password": "wrong-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn refresh_rotates_the_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let (_, _, refresh_token) = register_user(app.clone(), "rot@example.com").await;

    // First exchange succeeds and hands back a new pair.
    let response = post_json(
        app.clone(),
        "/api/v1/auth/refresh",
        None,
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let new_refresh = json["refresh_token"].as_str().unwrap();
    assert_ne!(new_refresh, refresh_token);

    // Replaying the old token must fail: the session was revoked.
    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        None,
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn logout_revokes_all_sessions(pool: PgPool) {
    let app = common::build_test_app(pool);

    let (_, access_token, refresh_token) = register_user(app.clone(), "out@example.com").await;

    let response = post_json(
        app.clone(),
        "/api/v1/auth/logout",
        Some(&access_token),
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = post_json(
        app,
        "/api/v1/auth/refresh",
        None,
        serde_json::json!({ "refresh_token": refresh_token }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn protected_route_requires_a_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(app.clone(), "/api/v1/profile", None).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = common::get(app, "/api/v1/profile", Some("not-a-jwt")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
