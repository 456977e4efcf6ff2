/*!
 * Single-call translation services.
 *
 * Each service here wraps exactly one prompt build, one transport call and
 * one response parse, with no retry. Handlers fold the resulting errors
 * into structured response payloads.
 */

use std::sync::Arc;

use log::info;

use crate::errors::ProviderError;
use crate::providers::TextGenerator;

use super::parser::{self, Detection, Transliteration};
use super::prompts;

/// Plain translation service backed by the chat-completion provider
#[derive(Debug)]
pub struct TranslationService {
    /// Chat provider transport
    generator: Arc<dyn TextGenerator>,
}

impl TranslationService {
    /// Create a new service over the given transport
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Translate text between two named languages.
    pub async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        let prompt = prompts::chat_translation_prompt(text, source_language, target_language);
        let translated = self.generator.generate(&prompt).await?;
        info!(
            "Translation successful: {} -> {}",
            source_language, target_language
        );
        Ok(translated)
    }
}

/// Text translation service backed by the generative provider
#[derive(Debug)]
pub struct TextTranslationService {
    /// Generative provider transport
    generator: Arc<dyn TextGenerator>,
}

impl TextTranslationService {
    /// Create a new service over the given transport
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Translate plain text, inferring the source language when the caller
    /// passes the auto-detect sentinel.
    pub async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, ProviderError> {
        let prompt = prompts::text_translation_prompt(text, source_language, target_language);
        let translated = self.generator.generate(&prompt).await?;
        info!(
            "Text translation successful: {} -> {}",
            source_language, target_language
        );
        Ok(translated.trim().to_string())
    }
}

/// Language detection service backed by the generative provider
#[derive(Debug)]
pub struct LanguageDetectionService {
    /// Generative provider transport
    generator: Arc<dyn TextGenerator>,
}

impl LanguageDetectionService {
    /// Create a new service over the given transport
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Detect the language of the given text.
    pub async fn detect(&self, text: &str) -> Result<Detection, ProviderError> {
        let prompt = prompts::language_detection_prompt(text);
        let raw = self.generator.generate(&prompt).await?;
        let detection = parser::parse_detection(&raw)?;
        info!(
            "Language detection: {} ({})",
            detection.language, detection.confidence
        );
        Ok(detection)
    }
}

/// Transliteration service backed by the generative provider
#[derive(Debug)]
pub struct TransliterationService {
    /// Generative provider transport
    generator: Arc<dyn TextGenerator>,
}

impl TransliterationService {
    /// Create a new service over the given transport
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Transliterate text between writing systems, converting sound rather
    /// than meaning. The detected source script is surfaced alongside the
    /// result.
    pub async fn transliterate(
        &self,
        text: &str,
        source_script: &str,
        target_script: &str,
    ) -> Result<Transliteration, ProviderError> {
        let prompt = prompts::transliteration_prompt(text, source_script, target_script);
        let raw = self.generator.generate(&prompt).await?;
        let transliteration = parser::parse_transliteration(&raw)?;
        info!(
            "Transliteration successful: {} -> {}",
            transliteration.source_script, target_script
        );
        Ok(transliteration)
    }
}
