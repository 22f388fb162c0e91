//! Integration tests for the HTTP API
//!
//! These drive the full router in-process through tower's `oneshot`, so
//! every middleware layer is exercised without binding a socket.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use server::config::ServerConfig;
use server::error::ErrorResponse;
use server::state::ServerState;
use std::sync::Arc;
use tower::util::ServiceExt;

fn test_router() -> Router {
    router_with(ServerConfig::default())
}

fn router_with(config: ServerConfig) -> Router {
    server::build_router(Arc::new(ServerState::new(config)))
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

fn search_request(payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/v1/search")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("request should build")
}

#[tokio::test]
async fn api_info_lists_the_endpoints() {
    let response = test_router()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::OK);

    let info = body_json(response).await;
    assert_eq!(info["name"], "SnipMatch Server");
    assert_eq!(info["api_version"], "v1");
    let endpoints = info["endpoints"].as_array().expect("endpoints array");
    assert!(endpoints.contains(&json!("/api/v1/search")));
}

#[tokio::test]
async fn health_check_reports_healthy() {
    let response = test_router()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::OK);

    let health = body_json(response).await;
    assert_eq!(health["status"], "healthy");
    assert_eq!(health["service"], "snipmatch-server");
    assert!(health["uptime_seconds"].is_u64());
}

#[tokio::test]
async fn readiness_reports_components() {
    let response = test_router()
        .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::OK);

    let ready = body_json(response).await;
    assert_eq!(ready["status"], "ready");
    assert_eq!(ready["components"]["api"], "ready");
    assert_eq!(ready["components"]["engine"], "ready");
}

#[tokio::test]
async fn search_scores_a_batch() {
    let payload = json!({
        "candidates": [
            {"text": "hello world", "filename": "ep1.json", "timestamp": "1m02s", "similarity": 0.8},
            {"text": "nothing relevant", "filename": "ep2.json", "timestamp": "4m40s", "similarity": 0.2}
        ],
        "queryWords": ["hello", "world"],
        "minRatio": 50
    });

    let response = test_router()
        .oneshot(search_request(&payload))
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));

    let reply = body_json(response).await;
    assert_eq!(reply["status"], "success");
    assert_eq!(reply["count"], 1);
    assert_eq!(reply["data"][0]["filename"], "ep1.json");
    assert_eq!(reply["data"][0]["match_ratio"], 100.0);
    assert_eq!(reply["data"][0]["exact_match"], true);
}

#[tokio::test]
async fn search_with_no_hits_returns_the_diagnostic() {
    let payload = json!({
        "candidates": [{"text": "completely unrelated"}],
        "queryWords": ["hello"],
        "minRatio": 90
    });

    let response = test_router()
        .oneshot(search_request(&payload))
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::OK);

    let reply = body_json(response).await;
    assert_eq!(reply["status"], "success");
    assert_eq!(reply["count"], 1);
    assert_eq!(reply["data"][0]["folder"], "subtitle");
    assert_eq!(reply["data"][0]["message"], "No results found for 'hello'");
}

#[tokio::test]
async fn malformed_candidate_is_an_error_envelope_not_an_http_error() {
    let payload = json!({
        "candidates": [{"filename": "no-text.json"}],
        "queryWords": ["hello"],
        "minRatio": 0
    });

    let response = test_router()
        .oneshot(search_request(&payload))
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::OK);

    let reply = body_json(response).await;
    assert_eq!(reply["status"], "error");
    assert_eq!(reply["message"], "malformed candidate: missing text field");
    assert_eq!(reply["count"], 0);
    assert_eq!(reply["suggestions"], json!(["Please try again"]));
}

#[tokio::test]
async fn wrong_request_shape_is_still_http_200() {
    let payload = json!({"candidates": "not an array"});

    let response = test_router()
        .oneshot(search_request(&payload))
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::OK);

    let reply = body_json(response).await;
    assert_eq!(reply["status"], "error");
    let message = reply["message"].as_str().expect("message should be text");
    assert!(message.starts_with("malformed candidate:"));
}

#[tokio::test]
async fn non_json_body_is_a_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/search")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("this is not json"))
        .unwrap();

    let response = test_router()
        .oneshot(request)
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let error: ErrorResponse = serde_json::from_slice(&bytes).expect("error shape");
    assert_eq!(error.error.code, "BAD_REQUEST");
}

#[tokio::test]
async fn unknown_route_is_a_404_with_the_error_shape() {
    let response = test_router()
        .oneshot(Request::get("/api/v1/nope").body(Body::empty()).unwrap())
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let error: ErrorResponse = serde_json::from_slice(&bytes).expect("error shape");
    assert_eq!(error.error.code, "NOT_FOUND");
}

#[tokio::test]
async fn incoming_request_id_is_echoed() {
    let request = Request::get("/health")
        .header("x-request-id", "test-id-123")
        .body(Body::empty())
        .unwrap();

    let response = test_router()
        .oneshot(request)
        .await
        .expect("request should complete");
    assert_eq!(response.headers()["x-request-id"], "test-id-123");
}

#[tokio::test]
async fn cors_headers_follow_the_config() {
    fn cross_origin_request() -> Request<Body> {
        Request::get("/health")
            .header(header::ORIGIN, "http://example.com")
            .body(Body::empty())
            .unwrap()
    }

    let enabled = test_router()
        .oneshot(cross_origin_request())
        .await
        .expect("request should complete");
    assert_eq!(
        enabled.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );

    let mut config = ServerConfig::default();
    config.enable_cors = false;
    let disabled = router_with(config)
        .oneshot(cross_origin_request())
        .await
        .expect("request should complete");
    assert!(!disabled
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let mut config = ServerConfig::default();
    config.max_body_size_mb = 1;

    let request = Request::builder()
        .method("POST")
        .uri("/api/v1/search")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(vec![b'x'; 2 * 1024 * 1024]))
        .unwrap();

    let response = router_with(config)
        .oneshot(request)
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn engine_threshold_from_config_is_applied() {
    // Forcing every batch through the rayon pool must not change replies
    let mut config = ServerConfig::default();
    config.engine.parallel_threshold = 0;

    let payload = json!({
        "candidates": [{"text": "hello world", "filename": "f.json"}],
        "queryWords": ["hello"],
        "minRatio": 0
    });

    let response = router_with(config)
        .oneshot(search_request(&payload))
        .await
        .expect("request should complete");
    assert_eq!(response.status(), StatusCode::OK);

    let reply = body_json(response).await;
    assert_eq!(reply["status"], "success");
    assert_eq!(reply["count"], 1);
}
