//! Liveness endpoint tests.
//!
//! Run with: `cargo test -p chromia-api --test health_test`

mod helpers;

use helpers::setup_test_app;

#[tokio::test]
async fn test_liveness_returns_status_message() {
    let app = setup_test_app().await;

    let response = app.client().get("/").await;

    assert_eq!(response.status_code(), 200);
    let body: serde_json::Value = response.json();
    assert_eq!(
        body,
        serde_json::json!({ "status": "Image Color Analyzer API is alive ✅" })
    );
}

#[tokio::test]
async fn test_liveness_allows_any_origin() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .get("/")
        .add_header("Origin", "http://frontend.example")
        .await;

    assert_eq!(response.status_code(), 200);
    assert_eq!(response.header("access-control-allow-origin"), "*");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = setup_test_app().await;

    let response = app.client().get("/nope").await;

    assert_eq!(response.status_code(), 404);
}
