//! In-process tests for the HTTP API.

mod test_utils;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use narrtx_models::TextGenerator;
use narrtx_server::{HealthStatus, MAX_BODY_BYTES, NarrativeProcessor, TextCleaner, create_router};
use serde_json::{Value, json};
use std::sync::Arc;
use test_utils::{FailingGenerator, FixedGenerator, PanickingGenerator, processor_with};
use tower::ServiceExt;

fn router_with(generator: impl TextGenerator + 'static) -> Router {
    create_router(Arc::new(processor_with(generator)))
}

fn post_json(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/process-narrative")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .expect("valid request")
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.expect("infallible router");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn test_health_check() {
    let request = Request::builder()
        .uri("/api/health")
        .body(Body::empty())
        .unwrap();

    let (status, body) = send(router_with(FixedGenerator::new("unused")), request).await;

    assert_eq!(status, StatusCode::OK);
    let health: HealthStatus = serde_json::from_value(body).unwrap();
    assert_eq!(health, HealthStatus::default());
    assert_eq!(health.status, "ok");
}

#[tokio::test]
async fn test_process_success() {
    let router = router_with(FixedGenerator::new("Hello world. This is fine."));
    let request = post_json(json!({ "text": "Hello wrld. This is fine." }).to_string());

    let (status, body) = send(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Text processed successfully");
    assert_eq!(body["cleanedText"], "Hello world. This is fine.");
    assert_eq!(body["readabilityScore"], 73);
    assert_eq!(body["originalText"], "Hello wrld. This is fine.");
    assert_eq!(body["wordsRemoved"], 0);
}

#[tokio::test]
async fn test_unreadable_is_still_http_ok() {
    let router = router_with(FixedGenerator::new("UNREADABLE"));
    let request = post_json(json!({ "text": "asdkj qwoeiu zmxn" }).to_string());

    let (status, body) = send(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["cleanedText"], "");
    assert_eq!(body["readabilityScore"], 0);
    assert!(body.get("wordsRemoved").is_none());
}

#[tokio::test]
async fn test_fallback_path_over_http() {
    let router = router_with(FailingGenerator::unreachable());
    let request = post_json(json!({ "text": "We went to the park today." }).to_string());

    let (status, body) = send(router, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["cleanedText"], "We went to the park today.");
}

#[tokio::test]
async fn test_missing_text_is_bad_request() {
    for payload in [json!({}), json!({ "text": null }), json!({ "text": "   " })] {
        let router = router_with(FixedGenerator::new("unused"));
        let (status, body) = send(router, post_json(payload.to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "payload {}", payload);
        assert_eq!(body["error"], "Text is required");
    }
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let router = router_with(FixedGenerator::new("unused"));

    let (status, body) = send(router, post_json("{ not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid request body");
    assert!(body["details"].is_string());
}

#[tokio::test]
async fn test_oversized_body_is_payload_too_large() {
    let generator = Arc::new(FixedGenerator::new("unused"));
    let cleaner = TextCleaner::new(Arc::clone(&generator) as Arc<dyn TextGenerator>);
    let router = create_router(Arc::new(NarrativeProcessor::new(cleaner)));
    let text = "a".repeat(MAX_BODY_BYTES + 1024 * 1024);
    let request = post_json(json!({ "text": text }).to_string());

    let (status, body) = send(router, request).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["error"], "Invalid request body");
    assert!(body["details"].is_string());
    assert!(generator.prompts().is_empty());
}

#[tokio::test]
async fn test_panic_in_pipeline_is_internal_error() {
    let router = router_with(PanickingGenerator);
    let request = post_json(json!({ "text": "This will blow up." }).to_string());

    let (status, body) = send(router, request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Failed to process narrative");
    assert!(body["details"].as_str().unwrap_or_default().contains("panic"));
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let request = Request::builder()
        .uri("/api/nope")
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(router_with(FixedGenerator::new("unused")), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
