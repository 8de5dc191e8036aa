/*!
 * High-level assistant operations over an injected model client.
 *
 * The assistant owns no global state: it is constructed from a configuration
 * and an explicit `ModelClient` handle, so tests can substitute a mock client
 * for the hosted API.
 */

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::app_config::Config;
use crate::errors::AppError;
use crate::language_utils::get_language_name;
use crate::prompts;
use crate::providers::{ModelClient, ModelRequest, ModelTranslator};
use crate::response::parse_structured;
use crate::segmenter::segment;
use crate::streaming::SectionSink;
use crate::translation::{translate_all, TranslationAggregate};

/// Generated article content
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedContent {
    /// Compelling article headline
    pub title: String,

    /// Meta description for SEO
    #[serde(rename = "metaDescription")]
    pub meta_description: String,

    /// Detailed outline for the article
    pub outline: Vec<String>,

    /// Full, formatted article content
    pub article: String,

    /// Relevant SEO keywords
    #[serde(rename = "seoKeywords")]
    pub seo_keywords: Vec<String>,

    /// Hashtags for social media
    pub hashtags: Vec<String>,
}

/// One transformation in an image-editing plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditingStep {
    /// Transformation function name, e.g. "remove_background"
    pub name: String,

    /// Human-readable description of the step
    pub description: String,

    /// Key-value parameters as a string, e.g. "contrast: 1.2"
    pub parameters: String,
}

/// Estimated compute cost of a plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputeEstimate {
    /// Estimated GPU seconds for the entire pipeline
    pub gpu_seconds: f64,
}

/// A described (never executed) image-editing pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditingPlan {
    /// The list of editing transformations
    pub steps: Vec<EditingStep>,

    /// Estimated compute for the whole plan
    pub estimated_compute: ComputeEstimate,
}

/// Content brief for article generation
#[derive(Debug, Clone)]
pub struct ArticleBrief {
    /// Subject of the article
    pub topic: String,

    /// Intended readership
    pub audience: String,

    /// Desired length, free-form (e.g. "about 800 words")
    pub length: String,

    /// Tone of voice (e.g. "professional", "friendly")
    pub tone: String,
}

/// Image bytes handed to the edit planner
#[derive(Debug, Clone)]
pub struct ImageInput {
    /// MIME type of the image, e.g. "image/png"
    pub mime_type: String,

    /// Raw image bytes
    pub data: Vec<u8>,
}

/// High-level service exposing the assistant operations
pub struct Assistant {
    client: Arc<dyn ModelClient>,
    config: Config,
}

impl Assistant {
    /// Create an assistant over an explicit client handle
    pub fn new(client: Arc<dyn ModelClient>, config: Config) -> Self {
        Self { client, config }
    }

    /// The active configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn language_names(&self) -> Result<(String, String), AppError> {
        let source = get_language_name(&self.config.source_language)
            .map_err(|e| AppError::Config(e.to_string()))?;
        let target = get_language_name(&self.config.target_language)
            .map_err(|e| AppError::Config(e.to_string()))?;
        Ok((source, target))
    }

    /// Translate text of any length between the configured languages.
    ///
    /// Input longer than the configured per-request character limit is split
    /// at sentence boundaries, the segments are translated concurrently, and
    /// the results are merged into a single aggregate. Any failed segment
    /// fails the whole run; no partial translation is returned.
    pub async fn translate(&self, text: &str) -> Result<TranslationAggregate, AppError> {
        let (source, target) = self.language_names()?;
        let limit = self.config.provider.max_chars_per_request;

        let segments = segment(text, limit)?;
        info!(
            "Translating {} segment(s) from {} to {}",
            segments.len(),
            source,
            target
        );

        let translator = ModelTranslator::new(Arc::clone(&self.client))
            .with_temperature(self.config.provider.temperature);
        let aggregate = translate_all(&translator, &segments, &source, &target).await?;

        debug!(
            "Translation produced {} chars and {} glossary term(s)",
            aggregate.translated_text.chars().count(),
            aggregate.glossary.len()
        );
        Ok(aggregate)
    }

    /// Generate a complete article from a content brief.
    pub async fn write_article(&self, brief: &ArticleBrief) -> Result<GeneratedContent, AppError> {
        let (_, target) = self.language_names()?;
        let prompt =
            prompts::article_prompt(&brief.topic, &brief.audience, &brief.length, &brief.tone, &target);

        let request = ModelRequest::new()
            .text(prompt)
            .response_schema(prompts::article_schema())
            .temperature(self.config.provider.temperature);

        let raw = self.client.generate(request).await?;
        Ok(parse_structured(&raw)?)
    }

    /// Describe an image-editing plan for the given image and instructions.
    ///
    /// The plan is only described; nothing is ever applied to the image.
    pub async fn plan_image_edit(
        &self,
        image: ImageInput,
        instructions: &str,
    ) -> Result<EditingPlan, AppError> {
        let (_, target) = self.language_names()?;
        let prompt = prompts::edit_plan_prompt(instructions, &target);

        let request = ModelRequest::new()
            .inline_data(image.mime_type, image.data)
            .text(prompt)
            .response_schema(prompts::edit_plan_schema());

        let raw = self.client.generate(request).await?;
        Ok(parse_structured(&raw)?)
    }

    /// Stream a free-form draft into the given section sink.
    ///
    /// Each chunk is forwarded through the sink's serialized reducer, so
    /// several drafts can stream concurrently into different sections without
    /// racing. Resolves with the full text once the stream ends.
    pub async fn stream_draft(&self, prompt: &str, sink: SectionSink) -> Result<String, AppError> {
        let request = ModelRequest::new()
            .text(prompt)
            .temperature(self.config.provider.temperature);
        Ok(self.client.generate_stream(request, sink).await?)
    }
}
