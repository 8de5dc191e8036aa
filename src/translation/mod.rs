/*!
 * Segment translation: concurrent dispatch and result aggregation.
 *
 * This module contains the translation core. It is split into two submodules:
 *
 * - `aggregate`: result types and glossary merge rules
 * - `dispatcher`: the `Translator` seam and concurrent per-segment dispatch
 */

// Re-export main types for easier usage
pub use self::aggregate::{GlossaryItem, TranslationAggregate, TranslationResult};
pub use self::dispatcher::{translate_all, FnTranslator, Translator};

// Submodules
pub mod aggregate;
pub mod dispatcher;
