/*!
 * Translation result types and aggregation rules.
 *
 * Each segment translation produces a `TranslationResult`; the results of one
 * run are merged into a single `TranslationAggregate` preserving original
 * segment order.
 */

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A term/definition pair surfaced by the translation provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryItem {
    /// The original term from the source text
    pub term: String,

    /// The definition of the term in the target language
    pub definition: String,
}

/// Translation of a single segment, as returned by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationResult {
    /// The translated text for this segment
    #[serde(rename = "translation")]
    pub translated_text: String,

    /// Glossary entries found in this segment
    #[serde(default)]
    pub glossary: Vec<GlossaryItem>,
}

/// Merged result across all segments of one translation run
#[derive(Debug, Clone, Default, Serialize)]
pub struct TranslationAggregate {
    /// Per-segment translations joined with a single space, in original order
    pub translated_text: String,

    /// Glossary entries unique by case-insensitive term, first occurrence wins
    pub glossary: Vec<GlossaryItem>,
}

impl TranslationAggregate {
    /// Merge per-segment results in original order.
    ///
    /// Glossary entries are deduplicated by trimmed, case-insensitive term;
    /// the first-seen casing and definition are retained. Entries with an
    /// empty term or definition are dropped.
    pub fn from_results(results: Vec<TranslationResult>) -> Self {
        let translated_text = results
            .iter()
            .map(|r| r.translated_text.as_str())
            .collect::<Vec<_>>()
            .join(" ");

        let mut seen = HashSet::new();
        let mut glossary = Vec::new();
        for result in results {
            for item in result.glossary {
                let key = item.term.trim().to_lowercase();
                if key.is_empty() || item.definition.is_empty() {
                    continue;
                }
                if seen.insert(key) {
                    glossary.push(item);
                }
            }
        }

        Self {
            translated_text,
            glossary,
        }
    }
}
