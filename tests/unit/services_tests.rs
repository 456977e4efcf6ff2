/*!
 * Tests for the single-call services
 *
 * Each service makes exactly one transport call per request and never
 * retries; these tests pin both the payloads and the call counts.
 */

use std::sync::Arc;

use translation_gateway::errors::ProviderError;
use translation_gateway::translation::core::{
    LanguageDetectionService, TextTranslationService, TranslationService, TransliterationService,
};

use crate::common::mock_providers::{MockErrorType, MockGenerator};

/// Test the chat translation happy path
#[test]
fn test_translation_service_withWorkingProvider_shouldReturnTranslation() {
    let generator = Arc::new(MockGenerator::always("Buenos días"));
    let service = TranslationService::new(generator.clone());

    let result = tokio_test::block_on(async {
        service.translate("Good morning", "English", "Spanish").await
    });

    assert_eq!(result.unwrap(), "Buenos días");
    assert_eq!(generator.call_count(), 1);
    let prompts = generator.prompts();
    assert!(prompts[0].contains("Good morning"));
    assert!(prompts[0].contains("from English to Spanish"));
}

/// Test that chat translation surfaces provider errors without retrying
#[tokio::test]
async fn test_translation_service_withFailingProvider_shouldReturnErrorAfterOneCall() {
    let generator = Arc::new(MockGenerator::failing(MockErrorType::Api));
    let service = TranslationService::new(generator.clone());

    let result = service.translate("Hello", "English", "Telugu").await;

    assert!(matches!(result, Err(ProviderError::ApiError { .. })));
    assert_eq!(generator.call_count(), 1);
}

/// Test that text translation trims the model's response
#[tokio::test]
async fn test_text_translation_withPaddedResponse_shouldTrimResult() {
    let generator = Arc::new(MockGenerator::always("  Bonjour le monde \n"));
    let service = TextTranslationService::new(generator);

    let result = service
        .translate("Hello world", "English", "French")
        .await
        .unwrap();

    assert_eq!(result, "Bonjour le monde");
}

/// Test that the auto-detect sentinel reaches the prompt unchanged
#[tokio::test]
async fn test_text_translation_withAutoDetectSource_shouldOmitSourceFromPrompt() {
    let generator = Arc::new(MockGenerator::always("Hallo"));
    let service = TextTranslationService::new(generator.clone());

    service
        .translate("Hello", "Auto-detect", "German")
        .await
        .unwrap();

    let prompts = generator.prompts();
    assert!(!prompts[0].contains("from Auto-detect"));
    assert!(prompts[0].contains("to German"));
}

/// Test the canonical detection scenario
#[tokio::test]
async fn test_language_detection_withFrenchText_shouldReturnLanguageAndConfidence() {
    let generator = Arc::new(
        MockGenerator::always("{\"language\": \"French\", \"confidence\": 0.97}"),
    );
    let service = LanguageDetectionService::new(generator.clone());

    let detection = service.detect("Bonjour").await.unwrap();

    assert_eq!(detection.language, "French");
    assert_eq!(detection.confidence, 0.97);
    assert_eq!(generator.call_count(), 1);
}

/// Test that a prose detection response becomes a parse error
#[tokio::test]
async fn test_language_detection_withProseResponse_shouldFailWithParseError() {
    let generator = Arc::new(MockGenerator::always("It looks like French to me"));
    let service = LanguageDetectionService::new(generator.clone());

    let result = service.detect("Bonjour").await;

    assert!(matches!(result, Err(ProviderError::ParseError(_))));
    // Single-call services never retry
    assert_eq!(generator.call_count(), 1);
}

/// Test the transliteration happy path including the detected script
#[tokio::test]
async fn test_transliteration_withFencedResponse_shouldReturnResultAndScript() {
    let generator = Arc::new(MockGenerator::always(
        "```json\n{\"source_script\": \"Devanagari\", \"result\": \"namaste\"}\n```",
    ));
    let service = TransliterationService::new(generator.clone());

    let transliteration = service
        .transliterate("नमस्ते", "Auto-detect", "Latin")
        .await
        .unwrap();

    assert_eq!(transliteration.result, "namaste");
    assert_eq!(transliteration.source_script, "Devanagari");
    let prompts = generator.prompts();
    assert!(prompts[0].contains("नमस्ते"));
}

/// Test that a quota failure propagates as-is from a single-call service
#[tokio::test]
async fn test_transliteration_withQuotaError_shouldPropagateQuotaExceeded() {
    let generator = Arc::new(MockGenerator::failing(MockErrorType::Quota));
    let service = TransliterationService::new(generator);

    let result = service.transliterate("hello", "Latin", "Katakana").await;

    assert!(matches!(result, Err(ProviderError::QuotaExceeded(_))));
}
