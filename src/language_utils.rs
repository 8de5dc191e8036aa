/*!
 * Language code helpers for prompt construction.
 *
 * Prompts address the model with language names ("English", "Vietnamese"),
 * while configuration stores ISO codes. This module resolves between the two
 * using ISO 639-1/639-3 lookups.
 */

use anyhow::{anyhow, Result};
use isolang::Language;

/// Language codes offered by default, matching the translator's stock choices
pub const DEFAULT_LANGUAGES: [&str; 8] = ["en", "vi", "ja", "ko", "fr", "es", "de", "zh"];

/// Resolve a language code (ISO 639-1 or 639-3) or an English language name
pub fn lookup(code: &str) -> Option<Language> {
    let trimmed = code.trim();
    let normalized = trimmed.to_lowercase();
    match normalized.len() {
        2 => Language::from_639_1(&normalized),
        3 => Language::from_639_3(&normalized),
        _ => Language::from_name(trimmed),
    }
}

/// Get the English display name for a language code
pub fn get_language_name(code: &str) -> Result<String> {
    lookup(code)
        .map(|lang| lang.to_name().to_string())
        .ok_or_else(|| anyhow!("Unknown language code: {}", code))
}

/// Check if two language codes refer to the same language
pub fn language_codes_match(first: &str, second: &str) -> bool {
    match (lookup(first), lookup(second)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// English names for the default language choices
pub fn supported_language_names() -> Vec<String> {
    DEFAULT_LANGUAGES
        .iter()
        .filter_map(|code| lookup(code))
        .map(|lang| lang.to_name().to_string())
        .collect()
}
