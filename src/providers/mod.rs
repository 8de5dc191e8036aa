/*!
 * Provider implementations for the generative model API.
 *
 * This module defines the provider-neutral request type and the `ModelClient`
 * trait, plus the clients that implement it:
 * - Gemini: hosted Google generative language API
 * - Mock: scripted behaviors for testing
 *
 * The client is always an explicitly constructed handle passed to whatever
 * needs it; there is no process-global instance.
 */

use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;
use std::sync::Arc;

use crate::errors::ProviderError;
use crate::prompts;
use crate::response::parse_structured;
use crate::streaming::SectionSink;
use crate::translation::{TranslationResult, Translator};

/// One part of a model request: text or inline binary data
#[derive(Debug, Clone)]
pub enum RequestPart {
    /// Plain text content
    Text(String),

    /// Raw binary content (e.g. an image) with its MIME type
    InlineData {
        /// MIME type of the data, e.g. "image/png"
        mime_type: String,
        /// The raw bytes; encoded for the wire by the client
        data: Vec<u8>,
    },
}

/// Provider-neutral generation request
#[derive(Debug, Clone, Default)]
pub struct ModelRequest {
    /// Ordered request parts
    pub(crate) parts: Vec<RequestPart>,

    /// System instruction to guide the model
    pub(crate) system: Option<String>,

    /// Temperature for generation
    pub(crate) temperature: Option<f32>,

    /// Structured-output schema; when set, the response must be JSON
    pub(crate) response_schema: Option<Value>,
}

impl ModelRequest {
    /// Create an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a text part
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.parts.push(RequestPart::Text(text.into()));
        self
    }

    /// Append an inline binary part
    pub fn inline_data(mut self, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        self.parts.push(RequestPart::InlineData {
            mime_type: mime_type.into(),
            data,
        });
        self
    }

    /// Set the system instruction
    pub fn system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Set the temperature
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Constrain the response to JSON matching `schema`
    pub fn response_schema(mut self, schema: Value) -> Self {
        self.response_schema = Some(schema);
        self
    }

    /// Concatenated text parts, used by mocks and logging
    pub fn text_content(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| match part {
                RequestPart::Text(text) => Some(text.as_str()),
                RequestPart::InlineData { .. } => None,
            })
            .collect()
    }
}

/// Common trait for model API clients
///
/// This trait defines the interface that all client implementations must
/// follow, allowing them to be used interchangeably and substituted in tests.
#[async_trait]
pub trait ModelClient: Send + Sync + Debug {
    /// Complete a request and return the response text
    ///
    /// # Arguments
    /// * `request` - The request to complete
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The response text or an error
    async fn generate(&self, request: ModelRequest) -> Result<String, ProviderError>;

    /// Stream a response, forwarding each text chunk to `sink`
    ///
    /// Resolves with the full concatenated text once the stream is exhausted.
    async fn generate_stream(
        &self,
        request: ModelRequest,
        sink: SectionSink,
    ) -> Result<String, ProviderError>;
}

/// [`Translator`] implementation backed by a [`ModelClient`]
///
/// Builds the translation prompt and schema for each segment, then validates
/// the structured response into a [`TranslationResult`].
#[derive(Debug, Clone)]
pub struct ModelTranslator {
    client: Arc<dyn ModelClient>,
    temperature: Option<f32>,
}

impl ModelTranslator {
    /// Create a translator over the given client
    pub fn new(client: Arc<dyn ModelClient>) -> Self {
        Self {
            client,
            temperature: None,
        }
    }

    /// Set the generation temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

#[async_trait]
impl Translator for ModelTranslator {
    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<TranslationResult, ProviderError> {
        let prompt = prompts::translation_prompt(text, source_language, target_language);
        let mut request = ModelRequest::new()
            .text(prompt)
            .system(prompts::translation_system_instruction())
            .response_schema(prompts::translation_schema(target_language));
        if let Some(temperature) = self.temperature {
            request = request.temperature(temperature);
        }

        let raw = self.client.generate(request).await?;
        parse_structured::<TranslationResult>(&raw)
            .map_err(|e| ProviderError::ParseError(e.to_string()))
    }
}

pub mod gemini;
pub mod mock;
