/*!
 * Gemini client for the Google generative language API.
 *
 * Supports single-shot generation with structured-output schemas and
 * streaming generation over server-sent events.
 */

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use futures_util::StreamExt;
use log::{debug, error};
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;

use crate::errors::ProviderError;
use crate::providers::{ModelClient, ModelRequest, RequestPart};
use crate::streaming::SectionSink;

/// Default API endpoint for the hosted Gemini service
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default model for general text tasks
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Gemini client for interacting with the generative language API
#[derive(Debug, Clone)]
pub struct Gemini {
    /// HTTP client for API requests
    client: Client,
    /// API key for authentication
    api_key: String,
    /// API endpoint URL (optional, defaults to public API)
    endpoint: String,
    /// Model identifier
    model: String,
}

impl Gemini {
    /// Create a new Gemini client against the public endpoint
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::new_with_config(api_key, model, DEFAULT_ENDPOINT, 120)
    }

    /// Create a new Gemini client with explicit endpoint and timeout
    pub fn new_with_config(
        api_key: impl Into<String>,
        model: impl Into<String>,
        endpoint: impl Into<String>,
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

    /// The configured model identifier
    pub fn model(&self) -> &str {
        &self.model
    }

    fn request_url(&self, method: &str, sse: bool) -> String {
        let base = self.endpoint.trim_end_matches('/');
        if sse {
            format!("{}/v1beta/models/{}:{}?alt=sse", base, self.model, method)
        } else {
            format!("{}/v1beta/models/{}:{}", base, self.model, method)
        }
    }

    /// Build the JSON payload for a request
    fn build_payload(request: &ModelRequest) -> Value {
        let parts: Vec<Value> = request
            .parts
            .iter()
            .map(|part| match part {
                RequestPart::Text(text) => json!({ "text": text }),
                RequestPart::InlineData { mime_type, data } => json!({
                    "inline_data": {
                        "mime_type": mime_type,
                        "data": BASE64.encode(data),
                    }
                }),
            })
            .collect();

        let mut payload = json!({
            "contents": [{ "role": "user", "parts": parts }]
        });

        if let Some(system) = &request.system {
            payload["system_instruction"] = json!({ "parts": [{ "text": system }] });
        }

        let mut generation_config = serde_json::Map::new();
        if let Some(temperature) = request.temperature {
            generation_config.insert("temperature".to_string(), json!(temperature));
        }
        if let Some(schema) = &request.response_schema {
            generation_config.insert(
                "response_mime_type".to_string(),
                json!("application/json"),
            );
            generation_config.insert("response_schema".to_string(), schema.clone());
        }
        if !generation_config.is_empty() {
            payload["generationConfig"] = Value::Object(generation_config);
        }

        payload
    }

    /// Extract the text of the first candidate from a response body
    fn extract_text(body: &Value) -> String {
        body.get("candidates")
            .and_then(|c| c.as_array())
            .and_then(|c| c.first())
            .and_then(|c| c.get("content"))
            .and_then(|c| c.get("parts"))
            .and_then(|p| p.as_array())
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
                    .collect::<String>()
            })
            .unwrap_or_default()
    }

    /// Extract the text payload of one SSE line, if it carries any
    fn sse_line_text(line: &str) -> Option<String> {
        let data = line.trim_end().strip_prefix("data: ")?;
        if data.trim() == "[DONE]" {
            return None;
        }
        let event = serde_json::from_str::<Value>(data).ok()?;
        let text = Self::extract_text(&event);
        (!text.is_empty()).then_some(text)
    }

    async fn post(&self, url: &str, payload: &Value) -> Result<reqwest::Response, ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::AuthenticationError(
                "Gemini API key is not set".to_string(),
            ));
        }

        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                ProviderError::RequestFailed(format!("Failed to send request to Gemini API: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to get error response text".to_string());
            error!("Gemini API error ({}): {}", status, error_text);
            if status.as_u16() == 401 || status.as_u16() == 403 {
                return Err(ProviderError::AuthenticationError(error_text));
            }
            return Err(ProviderError::ApiError {
                status_code: status.as_u16(),
                message: error_text,
            });
        }

        Ok(response)
    }
}

#[async_trait]
impl ModelClient for Gemini {
    async fn generate(&self, request: ModelRequest) -> Result<String, ProviderError> {
        let payload = Self::build_payload(&request);
        let url = self.request_url("generateContent", false);
        debug!("Sending generate request to model {}", self.model);

        let response = self.post(&url, &payload).await?;
        let body: Value = response.json().await.map_err(|e| {
            ProviderError::ParseError(format!("Failed to parse Gemini API response: {}", e))
        })?;

        let text = Self::extract_text(&body);
        if text.is_empty() {
            return Err(ProviderError::ParseError(
                "Gemini response contained no text candidates".to_string(),
            ));
        }

        Ok(text)
    }

    async fn generate_stream(
        &self,
        request: ModelRequest,
        sink: SectionSink,
    ) -> Result<String, ProviderError> {
        let payload = Self::build_payload(&request);
        let url = self.request_url("streamGenerateContent", true);
        debug!(
            "Opening SSE stream to model {} for section {}",
            self.model,
            sink.index()
        );

        let response = self.post(&url, &payload).await?;
        let mut bytes = response.bytes_stream();
        let mut pending = String::new();
        let mut full_text = String::new();

        while let Some(chunk) = bytes.next().await {
            let chunk = chunk
                .map_err(|e| ProviderError::ConnectionError(format!("Gemini stream error: {}", e)))?;
            pending.push_str(&String::from_utf8_lossy(&chunk));

            // SSE events arrive line by line; an incomplete trailing line
            // stays in `pending` until the next chunk completes it.
            while let Some(pos) = pending.find('\n') {
                let line: String = pending.drain(..=pos).collect();
                if let Some(text) = Self::sse_line_text(&line) {
                    full_text.push_str(&text);
                    sink.push(text);
                }
            }
        }

        // A final event without a trailing newline is still a complete line
        // once the stream ends.
        if let Some(text) = Self::sse_line_text(&pending) {
            full_text.push_str(&text);
            sink.push(text);
        }

        Ok(full_text)
    }
}
