/*!
 * Common test utilities for the aidesk test suite
 */

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use aidesk::translation::{GlossaryItem, TranslationResult};
use aidesk::Config;

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &PathBuf, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// A default configuration with an API key set, so validation passes
pub fn config_with_key() -> Config {
    let mut config = Config::default();
    config.provider.api_key = "test-key-1234".to_string();
    config
}

/// A translation result with no glossary
pub fn plain_result(text: &str) -> TranslationResult {
    TranslationResult {
        translated_text: text.to_string(),
        glossary: Vec::new(),
    }
}

/// A translation result carrying a single glossary item
pub fn result_with_glossary(text: &str, term: &str, definition: &str) -> TranslationResult {
    TranslationResult {
        translated_text: text.to_string(),
        glossary: vec![GlossaryItem {
            term: term.to_string(),
            definition: definition.to_string(),
        }],
    }
}
