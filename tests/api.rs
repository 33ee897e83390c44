// tests/api.rs

//! HTTP-level tests for the cookbook server
//!
//! Each test builds the router around a fresh in-memory store and drives it
//! with `tower::ServiceExt::oneshot`, no listening socket involved.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use larder::{create_router, CookbookStore, ServerState};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    create_router(Arc::new(ServerState::new(CookbookStore::new())))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_entry_then_summary_end_to_end() {
    let app = app();

    for entry in [
        json!({"type": "ingredient", "name": "Flour", "cookTime": 2}),
        json!({"type": "ingredient", "name": "Sugar", "cookTime": 1}),
        json!({
            "type": "recipe",
            "name": "Cookie",
            "requiredItems": [
                {"name": "Flour", "quantity": 2},
                {"name": "Sugar", "quantity": 1}
            ]
        }),
    ] {
        let response = app.clone().oneshot(post_json("/entry", entry)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app
        .clone()
        .oneshot(get("/summary?name=Cookie"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let summary = body_json(response).await;
    assert_eq!(summary["name"], "Cookie");
    assert_eq!(summary["cookTime"], 5);
    assert_eq!(
        summary["ingredients"],
        json!([
            {"name": "Flour", "quantity": 2},
            {"name": "Sugar", "quantity": 1}
        ])
    );
}

#[tokio::test]
async fn test_duplicate_entry_is_rejected() {
    let app = app();
    let flour = json!({"type": "ingredient", "name": "Flour", "cookTime": 2});

    let first = app.clone().oneshot(post_json("/entry", flour.clone())).await.unwrap();
    assert_eq!(first.status(), StatusCode::OK);

    let second = app.clone().oneshot(post_json("/entry", flour)).await.unwrap();
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(second).await["error"], "duplicate_name");
}

#[tokio::test]
async fn test_negative_cook_time_is_invalid_field() {
    let response = app()
        .oneshot(post_json(
            "/entry",
            json!({"type": "ingredient", "name": "Flour", "cookTime": -1}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "invalid_field");
}

#[tokio::test]
async fn test_unknown_type_tag_is_rejected() {
    let response = app()
        .oneshot(post_json(
            "/entry",
            json!({"type": "pan", "name": "Skillet"}),
        ))
        .await
        .unwrap();

    // The closed sum type rejects the tag during body extraction
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_duplicate_required_items_are_rejected() {
    let response = app()
        .oneshot(post_json(
            "/entry",
            json!({
                "type": "recipe",
                "name": "Dough",
                "requiredItems": [
                    {"name": "Flour", "quantity": 1},
                    {"name": "Flour", "quantity": 2}
                ]
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "duplicate_required_item");
}

#[tokio::test]
async fn test_summary_of_missing_recipe_is_404() {
    let response = app().oneshot(get("/summary?name=Ghost")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "not_found");
}

#[tokio::test]
async fn test_summary_of_ingredient_is_not_a_recipe() {
    let app = app();
    let response = app
        .clone()
        .oneshot(post_json(
            "/entry",
            json!({"type": "ingredient", "name": "Flour", "cookTime": 2}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/summary?name=Flour")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "not_a_recipe");
}

#[tokio::test]
async fn test_cyclic_cookbook_reports_cycle_not_crash() {
    let app = app();

    for entry in [
        json!({
            "type": "recipe",
            "name": "Chicken",
            "requiredItems": [{"name": "Egg", "quantity": 1}]
        }),
        json!({
            "type": "recipe",
            "name": "Egg",
            "requiredItems": [{"name": "Chicken", "quantity": 1}]
        }),
    ] {
        let response = app.clone().oneshot(post_json("/entry", entry)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.oneshot(get("/summary?name=Chicken")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "cyclic_dependency");
}

#[tokio::test]
async fn test_parse_normalizes_handwriting() {
    let response = app()
        .oneshot(post_json("/parse", json!({"input": "Riz@z RISO00tto!"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["msg"], "Rizz Risotto");
}

#[tokio::test]
async fn test_parse_rejects_unusable_input() {
    let response = app()
        .oneshot(post_json("/parse", json!({"input": "123 !@#"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["message"],
        "this string is cooked"
    );
}
