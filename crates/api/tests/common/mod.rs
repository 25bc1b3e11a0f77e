//! Shared helpers for API integration tests.
//!
//! `build_test_app` mirrors the router construction in `main.rs` so tests
//! exercise the same middleware stack (CORS, request ID, timeout, tracing,
//! panic recovery) that production uses.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;

use vault_api::auth::jwt::JwtConfig;
use vault_api::config::{BillingConfig, ServerConfig};
use vault_api::router::build_app_router;
use vault_api::state::AppState;
use vault_core::types::DbId;

/// Webhook secret used by every test; must match what tests sign with.
pub const TEST_WEBHOOK_SECRET: &str = "whsec_test_secret";

/// Build a test `ServerConfig` with fixed secrets and safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-jwt-secret".to_string(),
            access_token_expiry_mins: 15,
            refresh_token_expiry_days: 7,
        },
        billing: BillingConfig {
            webhook_secret: TEST_WEBHOOK_SECRET.to_string(),
            signature_tolerance_secs: 300,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a request and return the raw response.
pub async fn request(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    request(app, Method::GET, uri, token, None).await
}

pub async fn post_json(
    app: Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    request(app, Method::POST, uri, token, Some(body)).await
}

pub async fn put_json(
    app: Router,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    request(app, Method::PUT, uri, token, Some(body)).await
}

pub async fn delete(app: Router, uri: &str, token: Option<&str>) -> Response<Body> {
    request(app, Method::DELETE, uri, token, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    use http_body_util::BodyExt;
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as a UTF-8 string.
pub async fn body_text(response: Response<Body>) -> String {
    use http_body_util::BodyExt;
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Register a fresh user through the API, returning
/// `(profile_id, access_token, refresh_token)`.
pub async fn register_user(app: Router, email: &str) -> (DbId, String, String) {
    let response = post_json(
        app,
        "/api/v1/auth/register",
        None,
        serde_json::json!({
            "email": email,
            "password": "integration-pw-1",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    (
        json["user"]["id"].as_i64().unwrap(),
        json["access_token"].as_str().unwrap().to_string(),
        json["refresh_token"].as_str().unwrap().to_string(),
    )
}

/// Flip a profile to the Pro tier directly in the database, as the billing
/// reconciler would.
pub async fn make_pro(pool: &PgPool, profile_id: DbId) {
    sqlx::query(
        "UPDATE profiles SET is_pro = true, subscription_status = 'active' WHERE id = $1",
    )
    .bind(profile_id)
    .execute(pool)
    .await
    .unwrap();
}

/// Attach a billing customer reference to a profile, as a checkout flow
/// would have.
pub async fn set_stripe_customer(pool: &PgPool, profile_id: DbId, customer_id: &str) {
    sqlx::query("UPDATE profiles SET stripe_customer_id = $2 WHERE id = $1")
        .bind(profile_id)
        .bind(customer_id)
        .execute(pool)
        .await
        .unwrap();
}

/// Send a billing webhook event with a valid signature over `body`.
pub async fn post_signed_webhook(app: Router, body: &str) -> Response<Body> {
    let signature = vault_core::billing::signature_header(
        TEST_WEBHOOK_SECRET,
        chrono::Utc::now().timestamp(),
        body.as_bytes(),
    );
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/webhooks/billing")
        .header("content-type", "application/json")
        .header("stripe-signature", signature)
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}
