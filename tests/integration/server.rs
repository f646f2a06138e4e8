//! Tests for server assembly: health, CORS, and the static index page

use crate::common::MockBackends;
use actix_web::http::Method;
use actix_web::test;
use serde_json::Value;
use voicebrief::server::build_app;
use voicebrief::server::state::AppState;

#[actix_web::test]
async fn test_health_check() {
    let backends = MockBackends::start().await;
    let app = test::init_service(build_app(backends.state())).await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn test_cors_preflight() {
    let backends = MockBackends::start().await;
    let app = test::init_service(build_app(backends.state())).await;

    for uri in ["/summarize", "/processAudio"] {
        let req = test::TestRequest::default()
            .method(Method::OPTIONS)
            .uri(uri)
            .insert_header(("Origin", "https://example.com"))
            .insert_header(("Access-Control-Request-Method", "POST"))
            .insert_header(("Access-Control-Request-Headers", "content-type"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success(), "preflight failed for {uri}");
        assert!(
            resp.headers()
                .contains_key("access-control-allow-origin"),
            "missing allow-origin for {uri}"
        );

        let body = test::read_body(resp).await;
        assert!(body.is_empty());
    }
}

#[actix_web::test]
async fn test_plain_options_is_not_rejected() {
    let backends = MockBackends::start().await;
    let app = test::init_service(build_app(backends.state())).await;

    // No Origin header, so the CORS middleware passes it through
    let req = test::TestRequest::default()
        .method(Method::OPTIONS)
        .uri("/summarize")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body = test::read_body(resp).await;
    assert!(body.is_empty());
}

#[actix_web::test]
async fn test_serves_static_index_page() {
    let static_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        static_dir.path().join("index.html"),
        "<!DOCTYPE html><title>voicebrief</title>",
    )
    .unwrap();

    let backends = MockBackends::start().await;
    let mut config = backends.config();
    config.server.static_dir = static_dir.path().to_string_lossy().into_owned();

    let state = actix_web::web::Data::new(AppState::from_config(config));
    let app = test::init_service(build_app(state)).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body = test::read_body(resp).await;
    assert!(String::from_utf8_lossy(&body).contains("voicebrief"));
}
