/*!
 * Response parsing for generative model output.
 *
 * Models frequently wrap JSON payloads in markdown code fences. This module
 * strips exactly one leading and one trailing fence marker, then decodes the
 * expected JSON shape. A structurally valid but wrong-shaped value fails
 * loudly - it is never coerced.
 */

use log::{error, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::errors::ProviderError;

/// Leading fence: three backticks, an optional language tag, optional newline
static LEADING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^```[a-zA-Z]*\s*\n?").unwrap());

/// Trailing fence: optional newline, three backticks, trailing whitespace
static TRAILING_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n?```\s*$").unwrap());

/// Result of a language detection call
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    /// Full English name of the detected language
    pub language: String,
    /// Confidence score in [0, 1]
    pub confidence: f64,
}

/// Result of a transliteration call
#[derive(Debug, Clone, PartialEq)]
pub struct Transliteration {
    /// The detected or confirmed source script name
    pub source_script: String,
    /// The transliterated text
    pub result: String,
}

/// Strip one leading and one trailing markdown fence marker and trim.
///
/// Input without fences passes through unchanged apart from trimming.
pub fn strip_code_fences(raw: &str) -> String {
    let cleaned = raw.trim();
    let cleaned = LEADING_FENCE.replace(cleaned, "");
    let cleaned = TRAILING_FENCE.replace(&cleaned, "");
    cleaned.trim().to_string()
}

/// Decode the cleaned text as a JSON value.
fn decode(cleaned: &str) -> Result<Value, ProviderError> {
    serde_json::from_str(cleaned).map_err(|e| {
        error!("Response is not valid JSON: {}. Cleaned text: {}", e, cleaned);
        ProviderError::ParseError(format!("response is not valid JSON: {}", e))
    })
}

/// Parse a batch translation response into an ordered list of strings.
///
/// The decoded value must be a JSON array of strings; anything else is a
/// parse error. Length checks are the caller's concern.
pub fn parse_string_array(raw: &str) -> Result<Vec<String>, ProviderError> {
    let cleaned = strip_code_fences(raw);
    let value = decode(&cleaned)?;

    let items = value.as_array().ok_or_else(|| {
        error!("Response is not a JSON array. Cleaned text: {}", cleaned);
        ProviderError::ParseError("response is not a JSON array".to_string())
    })?;

    items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            item.as_str().map(|s| s.to_string()).ok_or_else(|| {
                error!("Array element {} is not a string. Cleaned text: {}", idx, cleaned);
                ProviderError::ParseError(format!("array element {} is not a string", idx))
            })
        })
        .collect()
}

/// Parse a language detection response.
///
/// Requires a JSON object with a string `language` and numeric `confidence`.
/// Out-of-range confidence values are clamped into [0, 1] with a warning.
pub fn parse_detection(raw: &str) -> Result<Detection, ProviderError> {
    let cleaned = strip_code_fences(raw);
    let value = decode(&cleaned)?;

    let language = value.get("language").and_then(Value::as_str);
    let confidence = value.get("confidence").and_then(Value::as_f64);

    match (language, confidence) {
        (Some(language), Some(confidence)) => {
            let clamped = confidence.clamp(0.0, 1.0);
            if clamped != confidence {
                warn!(
                    "Detection confidence {} out of range, clamped to {}",
                    confidence, clamped
                );
            }
            Ok(Detection {
                language: language.to_string(),
                confidence: clamped,
            })
        }
        _ => {
            error!(
                "Detection response missing required keys. Cleaned text: {}",
                cleaned
            );
            Err(ProviderError::ParseError(
                "response must be a JSON object with 'language' and 'confidence' keys".to_string(),
            ))
        }
    }
}

/// Parse a transliteration response.
///
/// Requires a JSON object with string `source_script` and `result` keys.
pub fn parse_transliteration(raw: &str) -> Result<Transliteration, ProviderError> {
    let cleaned = strip_code_fences(raw);
    let value = decode(&cleaned)?;

    let source_script = value.get("source_script").and_then(Value::as_str);
    let result = value.get("result").and_then(Value::as_str);

    match (source_script, result) {
        (Some(source_script), Some(result)) => Ok(Transliteration {
            source_script: source_script.to_string(),
            result: result.to_string(),
        }),
        _ => {
            error!(
                "Transliteration response missing required keys. Cleaned text: {}",
                cleaned
            );
            Err(ProviderError::ParseError(
                "response must be a JSON object with 'result' and 'source_script' keys".to_string(),
            ))
        }
    }
}
