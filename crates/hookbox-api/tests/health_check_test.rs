//! Integration tests for the health and liveness probes.

use std::{sync::Arc, time::Duration};

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::{DateTime, Utc};
use hookbox_api::server::{create_router, AppState};
use hookbox_core::{Clock, TestClock, WebhookStore};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    let start = DateTime::<Utc>::from_timestamp(1_700_000_000, 0).expect("valid timestamp");
    let clock: Arc<dyn Clock> = Arc::new(TestClock::with_start_time(start));
    let store = Arc::new(WebhookStore::with_clock(5, clock.clone()));
    create_router(AppState::new(store, clock), Duration::from_secs(30))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes =
        axum::body::to_bytes(response.into_body(), usize::MAX).await.expect("read response body");
    serde_json::from_slice(&bytes).expect("parse response json")
}

#[tokio::test]
async fn health_reports_status_version_and_store_occupancy() {
    let app = app();

    let request = Request::builder().uri("/health").body(Body::empty()).expect("build request");
    let response = app.clone().oneshot(request).await.expect("execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["store"]["count"], json!(0));
    assert_eq!(body["store"]["capacity"], json!(5));
    assert!(body["version"].is_string());
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn health_occupancy_tracks_the_store() {
    let app = app();

    let request = Request::builder()
        .method("POST")
        .uri("/webhook")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"event":"ping"}"#))
        .expect("build request");
    app.clone().oneshot(request).await.expect("execute request");

    let request = Request::builder().uri("/health").body(Body::empty()).expect("build request");
    let response = app.oneshot(request).await.expect("execute request");

    let body = body_json(response).await;
    assert_eq!(body["store"]["count"], json!(1));
}

#[tokio::test]
async fn liveness_answers_alive() {
    let app = app();

    let request = Request::builder().uri("/live").body(Body::empty()).expect("build request");
    let response = app.oneshot(request).await.expect("execute request");

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "alive");
    assert_eq!(body["service"], "hookbox-api");
}
