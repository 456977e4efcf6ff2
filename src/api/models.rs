/*!
 * Request and response schemas for the gateway API.
 *
 * Every string input is trimmed at the boundary; text that is empty after
 * trimming, or over the length cap, is rejected with a field-tagged
 * validation error before anything reaches the translation pipeline.
 */

use serde::{Deserialize, Serialize};

use crate::errors::ApiError;
use crate::translation::batch::{SubtitleCue, TranslatedCue};
use crate::translation::prompts::AUTO_DETECT;

/// Maximum accepted length for any translatable text field, in characters
pub const MAX_TEXT_CHARS: usize = 5000;

/// Valid range for the subtitle batch size
pub const BATCH_SIZE_RANGE: std::ops::RangeInclusive<usize> = 1..=100;

/// Trim a text field in place and enforce the non-empty + length rules.
fn validate_text(value: &mut String, field: &'static str) -> Result<(), ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation {
            field,
            message: "cannot be empty or only whitespace".to_string(),
        });
    }
    if trimmed.chars().count() > MAX_TEXT_CHARS {
        return Err(ApiError::Validation {
            field,
            message: format!("must be at most {} characters", MAX_TEXT_CHARS),
        });
    }
    *value = trimmed.to_string();
    Ok(())
}

/// Trim a language or script name in place and enforce non-emptiness.
fn validate_name(value: &mut String, field: &'static str) -> Result<(), ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation {
            field,
            message: "cannot be empty".to_string(),
        });
    }
    *value = trimmed.to_string();
    Ok(())
}

/// Request for the plain `/translate` endpoint
#[derive(Debug, Deserialize)]
pub struct TranslationRequest {
    /// Text to translate
    pub text: String,

    /// Source language
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language
    #[serde(default = "default_translate_target")]
    pub target_language: String,
}

impl TranslationRequest {
    /// Trim and validate all fields
    pub fn validate(&mut self) -> Result<(), ApiError> {
        validate_text(&mut self.text, "text")?;
        validate_name(&mut self.source_language, "source_language")?;
        validate_name(&mut self.target_language, "target_language")
    }
}

/// Response for the plain `/translate` endpoint
#[derive(Debug, Serialize)]
pub struct TranslationResponse {
    /// Whether the translation was successful
    pub success: bool,
    /// The translated text
    pub translated_text: Option<String>,
    /// Source language used
    pub source_language: String,
    /// Target language used
    pub target_language: String,
    /// Original text that was translated
    pub original_text: String,
    /// Error message if translation failed
    pub error_message: Option<String>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// API version
    pub version: String,
    /// Status message
    pub message: String,
}

/// Request for `/translate/subtitle`
#[derive(Debug, Deserialize)]
pub struct SubtitleTranslationRequest {
    /// Subtitle cues to translate
    pub cues: Vec<SubtitleCue>,

    /// Source language
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language
    #[serde(default = "default_subtitle_target")]
    pub target_language: String,

    /// Cues per batch
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

impl SubtitleTranslationRequest {
    /// Trim and validate all fields
    pub fn validate(&mut self) -> Result<(), ApiError> {
        if self.cues.is_empty() {
            return Err(ApiError::Validation {
                field: "cues",
                message: "at least one cue is required".to_string(),
            });
        }
        if !BATCH_SIZE_RANGE.contains(&self.batch_size) {
            return Err(ApiError::Validation {
                field: "batch_size",
                message: format!(
                    "must be between {} and {}",
                    BATCH_SIZE_RANGE.start(),
                    BATCH_SIZE_RANGE.end()
                ),
            });
        }
        validate_name(&mut self.source_language, "source_language")?;
        validate_name(&mut self.target_language, "target_language")
    }
}

/// Response for `/translate/subtitle`
#[derive(Debug, Serialize)]
pub struct SubtitleTranslationResponse {
    /// Whether all batches translated successfully
    pub success: bool,
    /// Translated cues, in input order
    pub translated_cues: Vec<TranslatedCue>,
    /// Error message if translation failed
    pub error_message: Option<String>,
}

/// Request for `/translate/text`
#[derive(Debug, Deserialize)]
pub struct TextTranslationRequest {
    /// Text to translate
    pub text: String,

    /// Source language, or the auto-detect sentinel
    #[serde(default = "default_auto_detect")]
    pub source_language: String,

    /// Target language
    pub target_language: String,
}

impl TextTranslationRequest {
    /// Trim and validate all fields
    pub fn validate(&mut self) -> Result<(), ApiError> {
        validate_text(&mut self.text, "text")?;
        validate_name(&mut self.source_language, "source_language")?;
        validate_name(&mut self.target_language, "target_language")
    }
}

/// Response for `/translate/text`
#[derive(Debug, Serialize)]
pub struct TextTranslationResponse {
    /// Whether the translation was successful
    pub success: bool,
    /// The translated text
    pub translated_text: Option<String>,
    /// Source language used (possibly the auto-detect sentinel)
    pub source_language: String,
    /// Target language used
    pub target_language: String,
    /// Error message if translation failed
    pub error_message: Option<String>,
}

/// Request for `/detect/language`
#[derive(Debug, Deserialize)]
pub struct LanguageDetectionRequest {
    /// Text to detect the language of
    pub text: String,
}

impl LanguageDetectionRequest {
    /// Trim and validate the text
    pub fn validate(&mut self) -> Result<(), ApiError> {
        validate_text(&mut self.text, "text")
    }
}

/// Response for `/detect/language`
#[derive(Debug, Serialize)]
pub struct LanguageDetectionResponse {
    /// Whether detection succeeded
    pub success: bool,
    /// Full English name of the detected language
    pub detected_language: Option<String>,
    /// Confidence score in [0, 1]
    pub confidence: Option<f64>,
    /// Error message if detection failed
    pub error_message: Option<String>,
}

/// Request for `/transliterate`
#[derive(Debug, Deserialize)]
pub struct TransliterationRequest {
    /// Text to transliterate
    pub text: String,

    /// Source writing system, or the auto-detect sentinel
    #[serde(default = "default_auto_detect")]
    pub source_script: String,

    /// Target writing system
    pub target_script: String,
}

impl TransliterationRequest {
    /// Trim and validate all fields
    pub fn validate(&mut self) -> Result<(), ApiError> {
        validate_text(&mut self.text, "text")?;
        validate_name(&mut self.source_script, "source_script")?;
        validate_name(&mut self.target_script, "target_script")
    }
}

/// Response for `/transliterate`
#[derive(Debug, Serialize)]
pub struct TransliterationResponse {
    /// Whether transliteration succeeded
    pub success: bool,
    /// The transliterated text
    pub transliterated_text: Option<String>,
    /// Detected source script when available, else the requested one
    pub source_script: String,
    /// Target script used
    pub target_script: String,
    /// Error message if transliteration failed
    pub error_message: Option<String>,
}

fn default_source_language() -> String {
    "English".to_string()
}

fn default_translate_target() -> String {
    "Telugu".to_string()
}

fn default_subtitle_target() -> String {
    "Spanish".to_string()
}

fn default_batch_size() -> usize {
    25
}

fn default_auto_detect() -> String {
    AUTO_DETECT.to_string()
}
