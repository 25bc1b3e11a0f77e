//! Integration tests for folder CRUD and its tier gating.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, make_pro, post_json, put_json, register_user};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn free_tier_is_denied_with_upgrade_required(pool: PgPool) {
    let app = common::build_test_app(pool);
    let (_, token, _) = register_user(app.clone(), "free@example.com").await;

    // Every folder endpoint must deny a free user, never return partial data.
    let response = get(app.clone(), "/api/v1/folders", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UPGRADE_REQUIRED");

    let response = post_json(
        app.clone(),
        "/api/v1/folders",
        Some(&token),
        serde_json::json!({ "name": "Ideas" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = delete(app, "/api/v1/folders/1", Some(&token)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn pro_user_can_crud_folders(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (id, token, _) = register_user(app.clone(), "pro@example.com").await;
    make_pro(&pool, id).await;

    // Create.
    let response = post_json(
        app.clone(),
        "/api/v1/folders",
        Some(&token),
        serde_json::json!({ "name": "Ideas", "description": "raw sparks" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let folder = body_json(response).await["data"].clone();
    let folder_id = folder["id"].as_i64().unwrap();
    assert_eq!(folder["name"], "Ideas");

    // Rename.
    let response = put_json(
        app.clone(),
        &format!("/api/v1/folders/{folder_id}"),
        Some(&token),
        serde_json::json!({ "name": "Sparks" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Sparks");
    assert_eq!(json["data"]["description"], "raw sparks");

    // List.
    let response = get(app.clone(), "/api/v1/folders", Some(&token)).await;
    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 1);

    // Delete.
    let response = delete(
        app.clone(),
        &format!("/api/v1/folders/{folder_id}"),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(app, "/api/v1/folders", Some(&token)).await;
    let json = body_json(response).await;
    assert!(json["data"].as_array().unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn empty_folder_name_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (id, token, _) = register_user(app.clone(), "pro@example.com").await;
    make_pro(&pool, id).await;

    let response = post_json(
        app,
        "/api/v1/folders",
        Some(&token),
        serde_json::json!({ "name": "   " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_a_folder_keeps_its_prompts(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (id, token, _) = register_user(app.clone(), "pro@example.com").await;
    make_pro(&pool, id).await;

    let response = post_json(
        app.clone(),
        "/api/v1/folders",
        Some(&token),
        serde_json::json!({ "name": "Doomed" }),
    )
    .await;
    let folder_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    // Two prompts filed into the folder.
    for title in ["first", "second"] {
        let response = post_json(
            app.clone(),
            "/api/v1/prompts",
            Some(&token),
            serde_json::json!({ "title": title, "content": "text", "folder_id": folder_id }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = delete(
        app.clone(),
        &format!("/api/v1/folders/{folder_id}"),
        Some(&token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Both prompts survive with their folder reference cleared.
    let response = get(app, "/api/v1/prompts", Some(&token)).await;
    let prompts = body_json(response).await["data"].clone();
    let prompts = prompts.as_array().unwrap();
    assert_eq!(prompts.len(), 2);
    for prompt in prompts {
        assert!(prompt["folder_id"].is_null());
        assert!(prompt["folder_name"].is_null());
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn folders_are_owner_scoped(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let (alice_id, alice_token, _) = register_user(app.clone(), "alice@example.com").await;
    let (bob_id, bob_token, _) = register_user(app.clone(), "bob@example.com").await;
    make_pro(&pool, alice_id).await;
    make_pro(&pool, bob_id).await;

    let response = post_json(
        app.clone(),
        "/api/v1/folders",
        Some(&alice_token),
        serde_json::json!({ "name": "Private" }),
    )
    .await;
    let folder_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    // Bob cannot see, rename, or delete Alice's folder.
    let response = put_json(
        app.clone(),
        &format!("/api/v1/folders/{folder_id}"),
        Some(&bob_token),
        serde_json::json!({ "name": "Mine now" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(
        app,
        &format!("/api/v1/folders/{folder_id}"),
        Some(&bob_token),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
