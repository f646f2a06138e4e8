//! Tests for the `/summarize` endpoint

use crate::common::MockBackends;
use actix_web::test;
use serde_json::{Value, json};
use voicebrief::core::summarize::{EMPTY_SUMMARY_FALLBACK, SUMMARIZE_MODEL};
use voicebrief::server::build_app;

#[actix_web::test]
async fn test_empty_text_returns_400() {
    let backends = MockBackends::start().await;
    let app = test::init_service(build_app(backends.state())).await;

    for body in [json!({ "text": "" }), json!({ "text": "   \n\t " })] {
        let req = test::TestRequest::post()
            .uri("/summarize")
            .set_json(&body)
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 400);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "No text provided");
    }
}

#[actix_web::test]
async fn test_missing_text_field_returns_400() {
    let backends = MockBackends::start().await;
    let app = test::init_service(build_app(backends.state())).await;

    let req = test::TestRequest::post()
        .uri("/summarize")
        .set_json(json!({}))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_returns_mocked_summary() {
    let backends = MockBackends::start().await;
    backends.mock_summary(SUMMARIZE_MODEL, "X").await;
    let app = test::init_service(build_app(backends.state())).await;

    let req = test::TestRequest::post()
        .uri("/summarize")
        .set_json(json!({ "text": "A long article about foxes." }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "summary": "X" }));
}

#[actix_web::test]
async fn test_falls_back_when_api_returns_no_text() {
    let backends = MockBackends::start().await;
    backends.mock_summary_without_text(SUMMARIZE_MODEL).await;
    let app = test::init_service(build_app(backends.state())).await;

    let req = test::TestRequest::post()
        .uri("/summarize")
        .set_json(json!({ "text": "Some text." }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["summary"], EMPTY_SUMMARY_FALLBACK);
}

#[actix_web::test]
async fn test_upstream_failure_returns_500_with_message() {
    let backends = MockBackends::start().await;
    backends
        .mock_gemini_failure(SUMMARIZE_MODEL, 500, "model exploded")
        .await;
    let app = test::init_service(build_app(backends.state())).await;

    let req = test::TestRequest::post()
        .uri("/summarize")
        .set_json(json!({ "text": "Some text." }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 500);
    let body: Value = test::read_body_json(resp).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Failed to generate summary:"), "got: {error}");
    assert!(error.contains("model exploded"), "got: {error}");
}
