/*!
 * Provider implementations for the upstream AI services.
 *
 * This module contains client implementations for the two providers the
 * gateway brokers requests to:
 * - Chipp: chat-completion style endpoint used by the plain translation route
 * - Gemini: generative text endpoint used by subtitle translation,
 *   text translation, language detection and transliteration
 */

use async_trait::async_trait;
use std::fmt::Debug;

use crate::errors::ProviderError;

/// Single-call boundary to a generative text provider.
///
/// Implementations take a finished prompt and return the model's raw text
/// response. The pipeline depends only on this trait, so tests substitute
/// a scripted fake without touching the network.
#[async_trait]
pub trait TextGenerator: Send + Sync + Debug {
    /// Generate a completion for the given prompt
    ///
    /// # Arguments
    /// * `prompt` - The fully built prompt string
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The raw response text or a classified error
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;
}

/// Map a non-success HTTP status onto the provider error taxonomy.
///
/// Classification happens here, at the transport boundary, so callers can
/// ask `is_retryable()` instead of pattern-matching on message text.
pub(crate) fn classify_status(status_code: u16, message: String) -> ProviderError {
    match status_code {
        401 | 403 => ProviderError::AuthenticationError(message),
        429 => ProviderError::QuotaExceeded(message),
        _ => ProviderError::ApiError {
            status_code,
            message,
        },
    }
}

/// Map a reqwest transport failure onto the provider error taxonomy.
pub(crate) fn classify_transport(error: &reqwest::Error) -> ProviderError {
    if error.is_timeout() || error.is_connect() {
        ProviderError::ConnectionError(error.to_string())
    } else {
        ProviderError::RequestFailed(error.to_string())
    }
}

pub mod chipp;
pub mod gemini;
