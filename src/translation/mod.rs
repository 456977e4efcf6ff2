/*!
 * Translation pipeline built on the upstream AI providers.
 *
 * This module contains the core functionality for brokering translation
 * requests through generative models. It is split into several submodules:
 *
 * - `core`: Single-call services (text translation, detection, transliteration)
 * - `batch`: Batched subtitle translation with retry
 * - `retry`: Bounded retry with exponential backoff
 * - `prompts`: Prompt builders for every request kind
 * - `parser`: Fence stripping and shape-checked response decoding
 */

// Re-export main types for easier usage
pub use self::batch::{BatchTranslator, SubtitleCue, TranslatedCue};
pub use self::core::{
    LanguageDetectionService, TextTranslationService, TranslationService,
    TransliterationService,
};
pub use self::retry::RetryPolicy;

// Submodules
pub mod batch;
pub mod core;
pub mod parser;
pub mod prompts;
pub mod retry;
