/*!
 * # aidesk - AI Desk Assistant
 *
 * A Rust library for AI-assisted text work: long-text translation with
 * sentence-aware segmentation, structured content generation, and streamed
 * drafting.
 *
 * ## Features
 *
 * - Split long text at sentence boundaries into size-bounded segments
 * - Translate segments concurrently and merge results with a deduplicated
 *   glossary
 * - Generate complete articles from a content brief
 * - Describe (never execute) image-editing plans from an image and
 *   free-form instructions
 * - Stream drafts into indexed sections through a serialized reducer
 * - Google Gemini provider plus an offline mock for testing
 * - ISO 639-1 and ISO 639-2 language code support
 *
 * ## Architecture
 *
 * The library is organized in these main modules:
 * - `app_config`: Configuration management
 * - `segmenter`: Sentence-aware text segmentation
 * - `translation`: Concurrent translation dispatch and aggregation:
 *   - `translation::dispatcher`: Fan-out of segment translations
 *   - `translation::aggregate`: Ordered merge and glossary deduplication
 * - `response`: Structured model response validation
 * - `streaming`: Serialized multi-section stream reduction
 * - `prompts`: Prompt and response-schema construction
 * - `assistant`: High-level operations over a model client
 * - `language_utils`: ISO language code utilities
 * - `providers`: Client implementations for model providers:
 *   - `providers::gemini`: Google Gemini API client
 *   - `providers::mock`: Offline mock client for tests
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod assistant;
pub mod errors;
pub mod language_utils;
pub mod prompts;
pub mod providers;
pub mod response;
pub mod segmenter;
pub mod streaming;
pub mod translation;

// Re-export main types for easier usage
pub use app_config::Config;
pub use assistant::{ArticleBrief, Assistant, EditingPlan, GeneratedContent, ImageInput};
pub use errors::{AppError, ProviderError, ResponseError, SegmentError, TranslationError};
pub use language_utils::{get_language_name, language_codes_match};
pub use segmenter::segment;
pub use streaming::{SectionSink, StreamReducer};
pub use translation::{translate_all, TranslationAggregate, TranslationResult, Translator};
