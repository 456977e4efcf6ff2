use std::time::Duration;

use async_trait::async_trait;
use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::ProviderError;

use super::{TextGenerator, classify_status, classify_transport};

/// Chipp client for the chat-completions translation endpoint
#[derive(Debug)]
pub struct Chipp {
    /// HTTP client for API requests
    client: Client,
    /// API key sent as a bearer token
    api_key: String,
    /// Chat-completions endpoint URL
    endpoint: String,
    /// Model name sent with every request
    model: String,
}

/// Chat-completion request body
#[derive(Debug, Serialize)]
pub struct ChippRequest {
    /// The model to use
    model: String,

    /// The messages for the conversation
    messages: Vec<ChippMessage>,

    /// Streaming is never used by the gateway
    stream: bool,
}

/// Chat message format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChippMessage {
    /// Role of the message sender (user, assistant)
    pub role: String,

    /// Content of the message
    pub content: String,
}

/// Chat-completion response body
#[derive(Debug, Deserialize)]
pub struct ChippResponse {
    /// Completion choices, the first of which carries the answer
    #[serde(default)]
    pub choices: Vec<ChippChoice>,
}

/// A single completion choice
#[derive(Debug, Deserialize)]
pub struct ChippChoice {
    /// The message produced by the model
    pub message: ChippMessage,
}

impl ChippRequest {
    /// Create a new request for the given model
    pub fn new(model: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            stream: false,
        }
    }

    /// Add a message to the request
    pub fn add_message(mut self, role: impl Into<String>, content: impl Into<String>) -> Self {
        self.messages.push(ChippMessage {
            role: role.into(),
            content: content.into(),
        });
        self
    }
}

impl Chipp {
    /// Create a new Chipp client
    pub fn new(
        api_key: impl Into<String>,
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: model.into(),
        }
    }

    /// Complete a chat request and return the first choice's content.
    pub async fn complete(&self, request: ChippRequest) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| classify_transport(&e))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Chipp API error ({}): {}", status, error_text);
            return Err(classify_status(status.as_u16(), error_text));
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::RequestFailed(e.to_string()))?;

        let parsed: ChippResponse = serde_json::from_str(&body).map_err(|e| {
            error!("Failed to parse Chipp API response: {}. Raw response: {}", e, body);
            ProviderError::ParseError(format!("invalid chat-completion response: {}", e))
        })?;

        match parsed.choices.first() {
            Some(choice) => Ok(choice.message.content.trim().to_string()),
            None => {
                error!("Chipp API returned no choices: {}", body);
                Err(ProviderError::ParseError(format!(
                    "no translation in response: {}",
                    body
                )))
            }
        }
    }
}

#[async_trait]
impl TextGenerator for Chipp {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = ChippRequest::new(self.model.as_str()).add_message("user", prompt);
        self.complete(request).await
    }
}
