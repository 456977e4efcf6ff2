/*!
 * Route handlers for the gateway API.
 *
 * Pipeline failures are folded into `success: false` payloads rather than
 * HTTP-level errors; only boundary validation produces a non-200 status.
 */

use axum::Json;
use axum::extract::State;
use log::{error, info};

use crate::errors::ApiError;
use crate::server::AppState;

use super::models::{
    HealthResponse, LanguageDetectionRequest, LanguageDetectionResponse,
    SubtitleTranslationRequest, SubtitleTranslationResponse, TextTranslationRequest,
    TextTranslationResponse, TranslationRequest, TranslationResponse, TransliterationRequest,
    TransliterationResponse,
};

/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: "Translation API is running".to_string(),
    })
}

/// POST /translate
///
/// Translate text through the chat-completion provider.
pub async fn translate(
    State(state): State<AppState>,
    Json(mut request): Json<TranslationRequest>,
) -> Result<Json<TranslationResponse>, ApiError> {
    request.validate()?;
    info!(
        "Translation request: {} -> {}",
        request.source_language, request.target_language
    );

    let result = state
        .translation
        .translate(
            &request.text,
            &request.source_language,
            &request.target_language,
        )
        .await;

    let response = match result {
        Ok(translated_text) => TranslationResponse {
            success: true,
            translated_text: Some(translated_text),
            source_language: request.source_language,
            target_language: request.target_language,
            original_text: request.text,
            error_message: None,
        },
        Err(e) => {
            error!("Translation failed: {}", e);
            TranslationResponse {
                success: false,
                translated_text: None,
                source_language: request.source_language,
                target_language: request.target_language,
                original_text: request.text,
                error_message: Some(e.to_string()),
            }
        }
    };

    Ok(Json(response))
}

/// POST /translate/subtitle
///
/// Translate subtitle cues in batches through the generative provider,
/// server-side so the key is never exposed.
pub async fn translate_subtitles(
    State(state): State<AppState>,
    Json(mut request): Json<SubtitleTranslationRequest>,
) -> Result<Json<SubtitleTranslationResponse>, ApiError> {
    request.validate()?;
    info!(
        "Subtitle translation: {} cues, {} -> {}",
        request.cues.len(),
        request.source_language,
        request.target_language
    );

    let result = state
        .batch_translator
        .translate_all(
            &request.cues,
            &request.source_language,
            &request.target_language,
            request.batch_size,
        )
        .await;

    let response = match result {
        Ok(translated_cues) => SubtitleTranslationResponse {
            success: true,
            translated_cues,
            error_message: None,
        },
        Err(e) => {
            error!("Subtitle translation failed: {}", e);
            SubtitleTranslationResponse {
                success: false,
                translated_cues: Vec::new(),
                error_message: Some(e.to_string()),
            }
        }
    };

    Ok(Json(response))
}

/// POST /translate/text
///
/// Translate plain text through the generative provider.
pub async fn translate_text(
    State(state): State<AppState>,
    Json(mut request): Json<TextTranslationRequest>,
) -> Result<Json<TextTranslationResponse>, ApiError> {
    request.validate()?;
    info!(
        "Text translation: {} -> {} ({} chars)",
        request.source_language,
        request.target_language,
        request.text.chars().count()
    );

    let result = state
        .text_translation
        .translate(
            &request.text,
            &request.source_language,
            &request.target_language,
        )
        .await;

    let response = match result {
        Ok(translated_text) => TextTranslationResponse {
            success: true,
            translated_text: Some(translated_text),
            source_language: request.source_language,
            target_language: request.target_language,
            error_message: None,
        },
        Err(e) => {
            error!("Text translation failed: {}", e);
            TextTranslationResponse {
                success: false,
                translated_text: None,
                source_language: request.source_language,
                target_language: request.target_language,
                error_message: Some(e.to_string()),
            }
        }
    };

    Ok(Json(response))
}

/// POST /detect/language
pub async fn detect_language(
    State(state): State<AppState>,
    Json(mut request): Json<LanguageDetectionRequest>,
) -> Result<Json<LanguageDetectionResponse>, ApiError> {
    request.validate()?;
    info!(
        "Language detection request ({} chars)",
        request.text.chars().count()
    );

    let response = match state.language_detection.detect(&request.text).await {
        Ok(detection) => LanguageDetectionResponse {
            success: true,
            detected_language: Some(detection.language),
            confidence: Some(detection.confidence),
            error_message: None,
        },
        Err(e) => {
            error!("Language detection failed: {}", e);
            LanguageDetectionResponse {
                success: false,
                detected_language: None,
                confidence: None,
                error_message: Some(e.to_string()),
            }
        }
    };

    Ok(Json(response))
}

/// POST /transliterate
pub async fn transliterate(
    State(state): State<AppState>,
    Json(mut request): Json<TransliterationRequest>,
) -> Result<Json<TransliterationResponse>, ApiError> {
    request.validate()?;
    info!(
        "Transliteration request: {} -> {} ({} chars)",
        request.source_script,
        request.target_script,
        request.text.chars().count()
    );

    let result = state
        .transliteration
        .transliterate(&request.text, &request.source_script, &request.target_script)
        .await;

    let response = match result {
        Ok(transliteration) => TransliterationResponse {
            success: true,
            transliterated_text: Some(transliteration.result),
            source_script: transliteration.source_script,
            target_script: request.target_script,
            error_message: None,
        },
        Err(e) => {
            error!("Transliteration failed: {}", e);
            TransliterationResponse {
                success: false,
                transliterated_text: None,
                source_script: request.source_script,
                target_script: request.target_script,
                error_message: Some(e.to_string()),
            }
        }
    };

    Ok(Json(response))
}
