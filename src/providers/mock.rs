/*!
 * Mock client implementations for testing.
 *
 * This module provides mock clients that simulate different behaviors:
 * - `MockClient::working()` - Always succeeds with generated text
 * - `MockClient::failing()` - Always fails with an error
 * - `MockClient::malformed()` - Succeeds but returns non-JSON text
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::errors::ProviderError;
use crate::providers::{ModelClient, ModelRequest};
use crate::streaming::SectionSink;

/// Behavior mode for the mock client
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds with generated text
    Working,
    /// Always fails with an error
    Failing,
    /// Fails intermittently (every Nth request)
    Intermittent {
        /// Request period after which one failure is injected
        fail_every: usize,
    },
    /// Succeeds but returns prose where JSON was expected
    Malformed,
    /// Returns an empty response
    Empty,
    /// Simulates slow responses (for concurrency testing)
    Slow {
        /// Per-request delay in milliseconds
        delay_ms: u64,
    },
}

/// Mock model client for testing assistant and dispatcher behavior
///
/// Clones share the request counter, so a cloned handle observes the
/// requests served through the original.
#[derive(Debug, Clone)]
pub struct MockClient {
    /// Behavior mode
    behavior: MockBehavior,
    /// Request counter for intermittent failures
    request_count: Arc<AtomicUsize>,
    /// Custom response generator (optional)
    custom_response: Option<fn(&ModelRequest) -> String>,
}

impl MockClient {
    /// Create a new mock client with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            request_count: Arc::new(AtomicUsize::new(0)),
            custom_response: None,
        }
    }

    /// Create a working mock client that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock client that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create an intermittently failing mock client
    pub fn intermittent(fail_every: usize) -> Self {
        Self::new(MockBehavior::Intermittent { fail_every })
    }

    /// Create a mock that returns prose instead of JSON
    pub fn malformed() -> Self {
        Self::new(MockBehavior::Malformed)
    }

    /// Create a mock that returns empty responses
    pub fn empty() -> Self {
        Self::new(MockBehavior::Empty)
    }

    /// Create a mock with a fixed per-request delay
    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Set a custom response generator
    pub fn with_custom_response(mut self, generator: fn(&ModelRequest) -> String) -> Self {
        self.custom_response = Some(generator);
        self
    }

    /// Number of requests handled so far
    pub fn requests_served(&self) -> usize {
        self.request_count.load(Ordering::SeqCst)
    }

    fn respond(&self, request: &ModelRequest, count: usize) -> Result<String, ProviderError> {
        match self.behavior {
            MockBehavior::Working | MockBehavior::Slow { .. } => {
                if let Some(generator) = self.custom_response {
                    Ok(generator(request))
                } else if request.response_schema.is_some() {
                    // Structured requests get schema-shaped JSON back
                    Ok(format!(
                        r#"{{"translation": "[TRANSLATED] {}", "glossary": []}}"#,
                        request.text_content().replace('"', "'").replace('\n', " ")
                    ))
                } else {
                    Ok(format!("[GENERATED] {}", request.text_content()))
                }
            }

            MockBehavior::Intermittent { fail_every } => {
                if fail_every > 0 && count % fail_every == fail_every - 1 {
                    Err(ProviderError::ApiError {
                        status_code: 503,
                        message: format!("Simulated intermittent failure (request #{})", count + 1),
                    })
                } else {
                    Ok(format!("[GENERATED] {}", request.text_content()))
                }
            }

            MockBehavior::Failing => Err(ProviderError::ApiError {
                status_code: 500,
                message: "Simulated provider failure".to_string(),
            }),

            MockBehavior::Malformed => {
                Ok("I'm sorry, I can only answer in free-form prose.".to_string())
            }

            MockBehavior::Empty => Ok(String::new()),
        }
    }
}

#[async_trait]
impl ModelClient for MockClient {
    async fn generate(&self, request: ModelRequest) -> Result<String, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);
        if let MockBehavior::Slow { delay_ms } = self.behavior {
            tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
        }
        self.respond(&request, count)
    }

    async fn generate_stream(
        &self,
        request: ModelRequest,
        sink: SectionSink,
    ) -> Result<String, ProviderError> {
        let count = self.request_count.fetch_add(1, Ordering::SeqCst);
        let full = self.respond(&request, count)?;

        // Emit word-sized chunks to mimic incremental model output
        for word in full.split_inclusive(' ') {
            if let MockBehavior::Slow { delay_ms } = self.behavior {
                tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
            }
            sink.push(word);
            tokio::task::yield_now().await;
        }

        Ok(full)
    }
}
