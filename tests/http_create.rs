//! Create endpoints against a live MySQL database.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use sqlx::MySqlPool;
use tower::ServiceExt;

use mini_erp::api::{router, AppState};
use mini_erp::db;

async fn state() -> AppState {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let db = MySqlPool::connect(&url).await.expect("failed to connect");
    db::migrate(&db).await.expect("failed to migrate");
    AppState { db }
}

async fn send(state: &AppState, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.map_or_else(Body::empty, |b| Body::from(b.to_string())))
        .unwrap();
    let response = router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
#[ignore = "Requires a running MySQL database (DATABASE_URL)"]
async fn test_created_entities_carry_timestamps() {
    let state = state().await;

    let (status, product) = send(&state, Method::POST, "/api/products", Some(json!({ "name": "  Lamp ", "price": 45.5 }))).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(product["name"], "Lamp");
    assert!(product["created_at"].is_string());

    let (status, order) = send(
        &state,
        Method::POST,
        "/api/orders",
        Some(json!({ "total": 45.5, "shipping": 5, "address": "Rua A, 10", "zip": "01001-000" })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(order["status"], "pending");
    assert!(order["created_at"].is_string());

    let (status, _) = send(&state, Method::DELETE, &format!("/api/orders/{}", order["id"]), None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&state, Method::DELETE, &format!("/api/products/{}", product["id"]), None).await;
    assert_eq!(status, StatusCode::OK);
}
