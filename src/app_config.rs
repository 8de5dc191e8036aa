/*!
 * Application configuration module.
 *
 * This module handles the application configuration including loading,
 * validating and saving configuration settings.
 */

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Source language code (ISO)
    #[serde(default = "default_source_language")]
    pub source_language: String,

    /// Target language code (ISO)
    #[serde(default = "default_target_language")]
    pub target_language: String,

    /// Model provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Gemini provider configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Model name (e.g., "gemini-2.5-flash")
    #[serde(default = "default_model")]
    pub model: String,

    /// API key for the service; falls back to the GEMINI_API_KEY
    /// environment variable when empty
    #[serde(default = "String::new")]
    pub api_key: String,

    /// Service endpoint URL (optional, for proxies or self-hosted gateways)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Maximum input characters per translation request; longer inputs are
    /// segmented at sentence boundaries
    #[serde(default = "default_max_chars_per_request")]
    pub max_chars_per_request: usize,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Temperature parameter for text generation (0.0 to 1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_key: String::new(),
            endpoint: default_endpoint(),
            max_chars_per_request: default_max_chars_per_request(),
            timeout_secs: default_timeout_secs(),
            temperature: default_temperature(),
        }
    }
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to the log crate's level filter
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

fn default_source_language() -> String {
    "en".to_string()
}

fn default_target_language() -> String {
    "vi".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_endpoint() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_max_chars_per_request() -> usize {
    2000
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_temperature() -> f32 {
    0.3
}

impl Default for Config {
    fn default() -> Self {
        Config {
            source_language: default_source_language(),
            target_language: default_target_language(),
            provider: ProviderConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load configuration, writing a default file if none exists yet
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            return Self::from_file(path);
        }

        let config = Config::default();
        let content = serde_json::to_string_pretty(&config)?;
        fs::write(path, content)
            .with_context(|| format!("Failed to write default config: {}", path.display()))?;
        Ok(config)
    }

    /// The API key from config, falling back to the environment
    pub fn get_api_key(&self) -> String {
        if !self.provider.api_key.is_empty() {
            return self.provider.api_key.clone();
        }
        std::env::var("GEMINI_API_KEY").unwrap_or_default()
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        let _source_name = crate::language_utils::get_language_name(&self.source_language)?;
        let _target_name = crate::language_utils::get_language_name(&self.target_language)?;

        if self.provider.max_chars_per_request == 0 {
            return Err(anyhow!("max_chars_per_request must be greater than zero"));
        }

        if url::Url::parse(&self.provider.endpoint).is_err() {
            return Err(anyhow!(
                "Invalid provider endpoint: {}",
                self.provider.endpoint
            ));
        }

        if self.get_api_key().is_empty() {
            return Err(anyhow!(
                "API key is required (set provider.api_key or GEMINI_API_KEY)"
            ));
        }

        Ok(())
    }
}
