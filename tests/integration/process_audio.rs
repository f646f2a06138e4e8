//! Tests for the `/processAudio` endpoint

use crate::common::{MockBackends, multipart_body, multipart_content_type};
use actix_web::test;
use serde_json::{Value, json};
use voicebrief::core::audio::{NO_TRANSCRIPT_NOTICE, TRANSCRIPT_SUMMARIZE_MODEL};
use voicebrief::server::build_app;

const FAKE_AUDIO: &[u8] = b"RIFF....WAVEfmt fake audio payload";

fn audio_request(filename: Option<&str>, content: &[u8]) -> actix_web::test::TestRequest {
    test::TestRequest::post()
        .uri("/processAudio")
        .insert_header(("content-type", multipart_content_type()))
        .set_payload(multipart_body("audio", filename, content))
}

#[actix_web::test]
async fn test_missing_audio_field_returns_400() {
    let backends = MockBackends::start().await;
    let app = test::init_service(build_app(backends.state())).await;

    // A well-formed multipart body whose only field is not named "audio"
    let req = test::TestRequest::post()
        .uri("/processAudio")
        .insert_header(("content-type", multipart_content_type()))
        .set_payload(multipart_body("file", Some("clip.wav"), FAKE_AUDIO))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "No audio file provided");
}

#[actix_web::test]
async fn test_unnamed_file_returns_400() {
    let backends = MockBackends::start().await;
    let app = test::init_service(build_app(backends.state())).await;

    let req = audio_request(None, FAKE_AUDIO).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "No audio file selected");
}

#[actix_web::test]
async fn test_empty_file_returns_400() {
    let backends = MockBackends::start().await;
    let app = test::init_service(build_app(backends.state())).await;

    let req = audio_request(Some("clip.wav"), b"").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Empty audio file");
}

#[actix_web::test]
async fn test_empty_transcript_returns_notice_without_summarizing() {
    let backends = MockBackends::start().await;
    backends.mock_transcript("").await;
    let app = test::init_service(build_app(backends.state())).await;

    let req = audio_request(Some("clip.wav"), FAKE_AUDIO).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["transcript"], "");
    assert_eq!(body["summary"], NO_TRANSCRIPT_NOTICE);

    // The generative-text API must not have been called
    let gemini_requests = backends.gemini.received_requests().await.unwrap();
    assert!(gemini_requests.is_empty());
}

#[actix_web::test]
async fn test_transcribes_and_summarizes() {
    let backends = MockBackends::start().await;
    backends.mock_transcript("hello world").await;
    backends
        .mock_summary(TRANSCRIPT_SUMMARIZE_MODEL, "summary X")
        .await;
    let app = test::init_service(build_app(backends.state())).await;

    let req = audio_request(Some("clip.wav"), FAKE_AUDIO).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({ "transcript": "hello world", "summary": "summary X" })
    );
}

#[actix_web::test]
async fn test_transcript_is_trimmed() {
    let backends = MockBackends::start().await;
    backends.mock_transcript("  hello world \n").await;
    backends
        .mock_summary(TRANSCRIPT_SUMMARIZE_MODEL, "summary X")
        .await;
    let app = test::init_service(build_app(backends.state())).await;

    let req = audio_request(Some("clip.wav"), FAKE_AUDIO).to_request();
    let resp = test::call_service(&app, req).await;

    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["transcript"], "hello world");
}

#[actix_web::test]
async fn test_transcription_failure_returns_500_with_message() {
    let backends = MockBackends::start().await;
    backends.mock_whisper_failure(500, "speech engine offline").await;
    let app = test::init_service(build_app(backends.state())).await;

    let req = audio_request(Some("clip.wav"), FAKE_AUDIO).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 500);
    let body: Value = test::read_body_json(resp).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Failed to process audio:"), "got: {error}");
    assert!(error.contains("speech engine offline"), "got: {error}");
}

#[actix_web::test]
async fn test_summarization_failure_in_chain_returns_500() {
    let backends = MockBackends::start().await;
    backends.mock_transcript("hello world").await;
    backends
        .mock_gemini_failure(TRANSCRIPT_SUMMARIZE_MODEL, 500, "quota exhausted")
        .await;
    let app = test::init_service(build_app(backends.state())).await;

    let req = audio_request(Some("clip.wav"), FAKE_AUDIO).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 500);
    let body: Value = test::read_body_json(resp).await;
    let error = body["error"].as_str().unwrap();
    assert!(error.starts_with("Failed to process audio:"), "got: {error}");
    assert!(error.contains("quota exhausted"), "got: {error}");
}
