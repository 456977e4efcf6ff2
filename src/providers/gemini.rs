use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;

use super::{TextGenerator, classify_status, classify_transport};

/// Gemini client for the generative language API.
///
/// The upstream SDK used elsewhere is synchronous; this client talks to the
/// REST endpoint directly with an async reqwest client, so calls suspend on
/// the network instead of occupying a worker thread.
#[derive(Debug)]
pub struct Gemini {
    /// Base URL of the generative language API
    base_url: String,
    /// Model name used in the request path
    model: String,
    /// API key passed as a query parameter
    api_key: String,
    /// HTTP client for making requests
    client: Client,
}

/// Request body for a generateContent call
#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    /// Conversation contents; the gateway always sends a single user turn
    contents: Vec<Content>,
}

/// A single content block
#[derive(Debug, Serialize, Deserialize)]
pub struct Content {
    /// Text parts making up this block
    pub parts: Vec<Part>,
}

/// One part of a content block
#[derive(Debug, Serialize, Deserialize)]
pub struct Part {
    /// The text payload
    pub text: String,
}

/// Response body for a generateContent call
#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    /// Generated candidates, the first of which carries the answer
    #[serde(default)]
    pub candidates: Vec<Candidate>,
}

/// A single response candidate
#[derive(Debug, Deserialize)]
pub struct Candidate {
    /// The generated content
    pub content: Content,
}

impl GenerateContentRequest {
    /// Create a request carrying a single user prompt
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.into(),
                }],
            }],
        }
    }
}

impl Gemini {
    /// Create a new Gemini client
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            model: model.into(),
            api_key: api_key.into(),
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Send a generateContent request and return the concatenated text parts
    /// of the first candidate.
    async fn generate_content(&self, prompt: &str) -> Result<String, ProviderError> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        );

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateContentRequest::new(prompt))
            .send()
            .await
            .map_err(|e| classify_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Gemini API error ({}): {}", status, error_text);
            return Err(classify_status(status.as_u16(), error_text));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let parsed: GenerateContentResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse Gemini API response: {}. Raw response: {}", e, body);
            ProviderError::ParseError(format!("invalid generateContent response: {}", e))
        })?;

        let candidate = parsed.candidates.into_iter().next().ok_or_else(|| {
            error!("Gemini API returned no candidates: {}", body);
            ProviderError::ParseError("no candidates in response".to_string())
        })?;

        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|part| part.text)
            .collect();

        Ok(text)
    }
}

#[async_trait]
impl TextGenerator for Gemini {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.generate_content(prompt).await
    }
}
