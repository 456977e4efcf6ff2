/*!
 * Mock provider implementations for testing
 *
 * This module provides a scripted implementation of the TextGenerator
 * trait so tests never make external API calls. Replies are consumed from
 * a queue; once the queue is empty the default reply repeats. Every call
 * records its prompt for later assertions.
 */

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use translation_gateway::errors::ProviderError;
use translation_gateway::providers::TextGenerator;

/// Type of error to simulate
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockErrorType {
    /// Authentication error (invalid API key)
    Auth,
    /// Quota exhausted
    Quota,
    /// Connection error
    Connection,
    /// API error with a server status
    Api,
}

impl MockErrorType {
    /// Build the provider error this mock kind stands for
    pub fn to_error(self) -> ProviderError {
        match self {
            Self::Auth => ProviderError::AuthenticationError("Invalid API key".into()),
            Self::Quota => ProviderError::QuotaExceeded("Quota exhausted".into()),
            Self::Connection => ProviderError::ConnectionError("Connection failed".into()),
            Self::Api => ProviderError::ApiError {
                status_code: 500,
                message: "Internal error".into(),
            },
        }
    }
}

/// One scripted reply
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Return this text
    Text(String),
    /// Fail with this error kind
    Fail(MockErrorType),
}

impl MockReply {
    fn resolve(&self) -> Result<String, ProviderError> {
        match self {
            Self::Text(text) => Ok(text.clone()),
            Self::Fail(kind) => Err(kind.to_error()),
        }
    }
}

/// Scripted TextGenerator for exercising the pipeline without a network
#[derive(Debug)]
pub struct MockGenerator {
    /// Replies consumed in order before falling back to the default
    queue: Mutex<VecDeque<MockReply>>,
    /// Reply repeated once the queue is empty
    default_reply: MockReply,
    /// Number of generate calls made
    call_count: AtomicUsize,
    /// Every prompt received, in order
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    /// Create a mock that always answers with the same text
    pub fn always(text: impl Into<String>) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            default_reply: MockReply::Text(text.into()),
            call_count: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that always fails with the given error kind
    pub fn failing(kind: MockErrorType) -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            default_reply: MockReply::Fail(kind),
            call_count: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that plays the scripted replies in order, then keeps
    /// repeating the given default
    pub fn with_replies(replies: Vec<MockReply>, default_reply: MockReply) -> Self {
        Self {
            queue: Mutex::new(replies.into()),
            default_reply,
            call_count: AtomicUsize::new(0),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// How many calls were made
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Snapshot of the prompts received so far
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());

        let reply = self
            .queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.default_reply.clone());
        reply.resolve()
    }
}
