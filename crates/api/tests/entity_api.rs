//! HTTP-level tests for the name-only resources (users, categories,
//! payment methods). The five-route shape is identical across the three,
//! so users get the full treatment and the other two a round trip each.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, post_json, put_json};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_user_returns_row_with_id(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(app, "/users/", serde_json::json!({"name": "Me"})).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Me");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_user_by_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/users/", serde_json::json!({"name": "Me"})).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Me");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_user_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/users/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_user(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/users/", serde_json::json!({"name": "Me"})).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/users/{id}"),
        serde_json::json!({"name": "Spouse"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Spouse");
    assert_eq!(json["id"].as_i64().unwrap(), id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_nonexistent_user_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = put_json(app, "/users/999999", serde_json::json!({"name": "Nobody"})).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_rejects_unknown_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/users/", serde_json::json!({"name": "Me"})).await).await;
    let id = created["id"].as_i64().unwrap();

    // `id` is immutable and not part of the patch DTO.
    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/users/{id}"),
        serde_json::json!({"id": 42, "name": "Hijack"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_user(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(post_json(app, "/users/", serde_json::json!({"name": "Me"})).await).await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["ok"], true);

    // Subsequent GET and DELETE both 404.
    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let app = common::build_test_app(pool);
    let response = delete(app, &format!("/users/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_users_with_paging(pool: PgPool) {
    for name in ["A", "B", "C"] {
        let app = common::build_test_app(pool.clone());
        post_json(app, "/users/", serde_json::json!({"name": name})).await;
    }

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/users/").await).await;
    assert_eq!(json.as_array().unwrap().len(), 3);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/users/?skip=1&limit=1").await).await;
    let page = json.as_array().unwrap();
    assert_eq!(page.len(), 1);
    assert_eq!(page[0]["name"], "B");
}

// ---------------------------------------------------------------------------
// Categories and payment methods
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_category_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/categories/", serde_json::json!({"name": "Grocery"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/categories/{id}")).await).await;
    assert_eq!(json["name"], "Grocery");

    let app = common::build_test_app(pool);
    let json = body_json(delete(app, &format!("/categories/{id}")).await).await;
    assert_eq!(json["ok"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_payment_method_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/payment-methods/",
            serde_json::json!({"name": "Cash"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, &format!("/payment-methods/{id}")).await).await;
    assert_eq!(json["name"], "Cash");

    let app = common::build_test_app(pool);
    let response = get(app, "/payment-methods/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
