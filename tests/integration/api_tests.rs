/*!
 * End-to-end API tests
 *
 * These tests drive the real router - routes, extractors, validation and
 * handlers - with scripted providers behind the service seam, so the only
 * thing faked is the network call to the upstream models.
 */

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use translation_gateway::app_config::Config;
use translation_gateway::server::{AppState, build_router};
use translation_gateway::translation::retry::RetryPolicy;

use crate::common::mock_providers::{MockErrorType, MockGenerator};

/// Build a router over scripted chat and generative providers
fn test_router(chat: Arc<MockGenerator>, text: Arc<MockGenerator>) -> Router {
    let state = AppState::new(chat, text, RetryPolicy::new(2, Duration::from_millis(1)));
    build_router(state, &Config::default())
}

/// POST a JSON body and decode the JSON response
async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

/// Test the health route
#[tokio::test]
async fn test_health_withGetRequest_shouldReportHealthy() {
    let router = test_router(
        Arc::new(MockGenerator::always("unused")),
        Arc::new(MockGenerator::always("unused")),
    );

    let response = router
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["message"], "Translation API is running");
}

/// Test the chat translation happy path
#[tokio::test]
async fn test_translate_withWorkingProvider_shouldReturnTranslation() {
    let router = test_router(
        Arc::new(MockGenerator::always("నమస్కారం")),
        Arc::new(MockGenerator::always("unused")),
    );

    let (status, body) = post_json(
        router,
        "/translate",
        json!({"text": "Hello", "source_language": "English", "target_language": "Telugu"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["translated_text"], "నమస్కారం");
    assert_eq!(body["original_text"], "Hello");
    assert_eq!(body["source_language"], "English");
    assert_eq!(body["target_language"], "Telugu");
    assert_eq!(body["error_message"], Value::Null);
}

/// Test that validation failures surface as 422 with field detail
#[tokio::test]
async fn test_translate_withWhitespaceText_shouldReturn422() {
    let router = test_router(
        Arc::new(MockGenerator::always("unused")),
        Arc::new(MockGenerator::always("unused")),
    );

    let (status, body) = post_json(router, "/translate", json!({"text": "   "})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["success"], false);
    assert_eq!(body["field"], "text");
}

/// Test that a provider failure folds into a success:false payload
#[tokio::test]
async fn test_translate_withFailingProvider_shouldReturnStructuredFailure() {
    let router = test_router(
        Arc::new(MockGenerator::failing(MockErrorType::Api)),
        Arc::new(MockGenerator::always("unused")),
    );

    let (status, body) = post_json(router, "/translate", json!({"text": "Hello"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["translated_text"], Value::Null);
    assert!(body["error_message"].as_str().unwrap().contains("500"));
}

/// Test the canonical subtitle translation scenario
#[tokio::test]
async fn test_translate_subtitle_withTwoCues_shouldReturnTranslatedCues() {
    let generator = Arc::new(MockGenerator::always("[\"Hola\", \"Mundo\"]"));
    let router = test_router(Arc::new(MockGenerator::always("unused")), generator);

    let (status, body) = post_json(
        router,
        "/translate/subtitle",
        json!({
            "cues": [
                {"id": "1", "text": "Hello"},
                {"id": "2", "text": "World"}
            ],
            "source_language": "English",
            "target_language": "Spanish",
            "batch_size": 25
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["translated_cues"],
        json!([
            {"id": "1", "text": "Hello", "translated_text": "Hola"},
            {"id": "2", "text": "World", "translated_text": "Mundo"}
        ])
    );
}

/// Test that a malformed upstream response exhausts retries and then
/// reports a structured request failure
#[tokio::test]
async fn test_translate_subtitle_withProseResponse_shouldReportFailureAfterRetries() {
    let generator = Arc::new(MockGenerator::always("I'd be happy to translate that!"));
    let router = test_router(
        Arc::new(MockGenerator::always("unused")),
        generator.clone(),
    );

    let (status, body) = post_json(
        router,
        "/translate/subtitle",
        json!({"cues": [{"id": "1", "text": "Hello"}]}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["translated_cues"], json!([]));
    assert!(body["error_message"].as_str().unwrap().contains("parse"));
    // The test router's retry policy allows two attempts
    assert_eq!(generator.call_count(), 2);
}

/// Test the batch size boundary at the HTTP layer
#[tokio::test]
async fn test_translate_subtitle_withBatchSizeZero_shouldReturn422() {
    let router = test_router(
        Arc::new(MockGenerator::always("unused")),
        Arc::new(MockGenerator::always("[]")),
    );

    let (status, body) = post_json(
        router,
        "/translate/subtitle",
        json!({"cues": [{"id": "1", "text": "Hello"}], "batch_size": 0}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["field"], "batch_size");
}

/// Test the generative text translation route with its auto-detect default
#[tokio::test]
async fn test_translate_text_withDefaultSource_shouldEchoAutoDetect() {
    let router = test_router(
        Arc::new(MockGenerator::always("unused")),
        Arc::new(MockGenerator::always("Hello")),
    );

    let (status, body) = post_json(
        router,
        "/translate/text",
        json!({"text": "Hola", "target_language": "English"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["translated_text"], "Hello");
    assert_eq!(body["source_language"], "Auto-detect");
    assert_eq!(body["target_language"], "English");
}

/// Test the language detection route
#[tokio::test]
async fn test_detect_language_withFrenchText_shouldReturnDetection() {
    let router = test_router(
        Arc::new(MockGenerator::always("unused")),
        Arc::new(MockGenerator::always(
            "{\"language\": \"French\", \"confidence\": 0.97}",
        )),
    );

    let (status, body) = post_json(router, "/detect/language", json!({"text": "Bonjour"})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["detected_language"], "French");
    assert_eq!(body["confidence"], 0.97);
}

/// Test the transliteration route, including the detected-script echo
#[tokio::test]
async fn test_transliterate_withDetectedScript_shouldEchoDetectedScript() {
    let router = test_router(
        Arc::new(MockGenerator::always("unused")),
        Arc::new(MockGenerator::always(
            "{\"source_script\": \"Devanagari\", \"result\": \"namaste\"}",
        )),
    );

    let (status, body) = post_json(
        router,
        "/transliterate",
        json!({"text": "नमस्ते", "target_script": "Latin"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["transliterated_text"], "namaste");
    assert_eq!(body["source_script"], "Devanagari");
    assert_eq!(body["target_script"], "Latin");
}

/// Test that a transliteration failure echoes the requested script back
#[tokio::test]
async fn test_transliterate_withFailingProvider_shouldEchoRequestedScript() {
    let router = test_router(
        Arc::new(MockGenerator::always("unused")),
        Arc::new(MockGenerator::failing(MockErrorType::Connection)),
    );

    let (status, body) = post_json(
        router,
        "/transliterate",
        json!({"text": "hello", "source_script": "Latin", "target_script": "Katakana"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["transliterated_text"], Value::Null);
    assert_eq!(body["source_script"], "Latin");
    assert_eq!(body["target_script"], "Katakana");
}
