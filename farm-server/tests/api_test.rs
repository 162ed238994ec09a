//! Router tests for the API stub.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use farm_server::{create_router, AppState};
use serde_json::Value;
use tower::Service;

async fn get(uri: &str) -> (StatusCode, Value) {
    get_with(AppState::new(), uri).await
}

async fn get_with(state: AppState, uri: &str) -> (StatusCode, Value) {
    let mut app = create_router(state);
    let response = app
        .call(Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_root_banner() {
    let (status, json) = get("/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "🌱 Smart Farming API - String Beans Edition");
    assert_eq!(json["status"], "Running");
    assert_eq!(json["version"], "1.0.0");
    let ts = json["timestamp"].as_str().unwrap();
    assert!(ts.ends_with('Z'));
    assert!(chrono::DateTime::parse_from_rfc3339(ts).is_ok());
}

#[tokio::test]
async fn test_health() {
    let (status, json) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "OK");
    assert!(json["uptime"].as_f64().unwrap() >= 0.0);
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_health_uptime_counts_from_state_creation() {
    let state = AppState::new();
    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    let (_, json) = get_with(state, "/health").await;
    assert!(json["uptime"].as_f64().unwrap() >= 0.05);
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let (status, _) = get("/api/sensors").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_headers_present() {
    let mut app = create_router(AppState::new());
    let response = app
        .call(
            Request::builder()
                .method("GET")
                .uri("/health")
                .header("Origin", "http://localhost:8080")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(response.headers().contains_key("access-control-allow-origin"));
}
