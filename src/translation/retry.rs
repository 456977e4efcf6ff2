/*!
 * Bounded retry with exponential backoff.
 *
 * Wraps a single upstream call in a sequential attempt loop. Waits happen
 * through `tokio::time::sleep`, so a retrying request never blocks other
 * requests sharing the runtime.
 */

use std::future::Future;
use std::time::Duration;

use log::{info, warn};

use crate::app_config::RetryConfig;
use crate::errors::ProviderError;

/// Retry policy for a single batch call.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of sequential attempts
    pub max_attempts: u32,
    /// Base unit for the exponential backoff; the sleep before attempt k
    /// is `backoff_base * 2^(k-1)`, so 2, 4, 8... units
    pub backoff_base: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff_base: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    /// Create a policy with explicit bounds
    pub fn new(max_attempts: u32, backoff_base: Duration) -> Self {
        Self {
            max_attempts,
            backoff_base,
        }
    }

    /// Build a policy from the application retry configuration
    pub fn from_config(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.retry_count,
            backoff_base: Duration::from_millis(config.retry_backoff_ms),
        }
    }

    /// Backoff delay inserted before the given attempt (1-indexed).
    fn delay_before(&self, attempt: u32) -> Duration {
        self.backoff_base * (1u32 << (attempt - 1))
    }

    /// Run `op` until it succeeds or the attempt budget is exhausted.
    ///
    /// `op` is called once per attempt and must produce a fresh future each
    /// time. Errors whose `is_retryable()` is false (authentication, quota)
    /// abort the loop immediately; any other error is retried, and the last
    /// one propagates once attempts run out.
    pub async fn run<T, F, Fut>(&self, mut op: F) -> Result<T, ProviderError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, ProviderError>>,
    {
        let mut last_error: Option<ProviderError> = None;

        for attempt in 1..=self.max_attempts {
            if attempt > 1 {
                let delay = self.delay_before(attempt);
                info!(
                    "Retry {}/{} after {:?}",
                    attempt, self.max_attempts, delay
                );
                tokio::time::sleep(delay).await;
            }

            match op().await {
                Ok(value) => return Ok(value),
                Err(e) => {
                    warn!("Attempt {}/{} failed: {}", attempt, self.max_attempts, e);
                    if !e.is_retryable() {
                        return Err(e);
                    }
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            ProviderError::RequestFailed(format!(
                "call failed after {} attempts",
                self.max_attempts
            ))
        }))
    }
}
