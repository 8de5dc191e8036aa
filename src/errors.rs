/*!
 * Error types for the aidesk application.
 *
 * This module contains custom error types for different parts of the application,
 * using the thiserror crate for ergonomic error definitions.
 */

// Allow dead code - error types are for library consumers
#![allow(dead_code)]

use thiserror::Error;

/// Errors that can occur when talking to the model provider API
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Error when making an API request fails
    #[error("API request failed: {0}")]
    RequestFailed(String),

    /// Error when parsing an API response fails
    #[error("Failed to parse API response: {0}")]
    ParseError(String),

    /// Error returned by the API itself
    #[error("API responded with error: {status_code} - {message}")]
    ApiError {
        /// HTTP status code
        status_code: u16,
        /// Error message from the API
        message: String,
    },

    /// Error establishing or maintaining a connection
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Error with authentication
    #[error("Authentication error: {0}")]
    AuthenticationError(String),
}

/// Errors that can occur during text segmentation
#[derive(Error, Debug)]
pub enum SegmentError {
    /// The requested segment size limit is unusable
    #[error("Segment limit must be greater than zero (got {0})")]
    InvalidLimit(usize),
}

/// Errors that can occur when validating a structured model response
#[derive(Error, Debug)]
pub enum ResponseError {
    /// The model returned nothing usable
    #[error("Model response was empty")]
    Empty,

    /// The response body did not match the expected schema
    #[error("Model response did not match the expected schema: {message} (response starts with: {snippet:?})")]
    SchemaMismatch {
        /// Underlying deserialization error
        message: String,
        /// Leading characters of the offending response
        snippet: String,
    },
}

/// Errors that can occur during a translation run
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Error from the provider API, propagated verbatim
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from text segmentation
    #[error("Segmentation error: {0}")]
    Segment(#[from] SegmentError),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error in the application configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error from a provider
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Error from text segmentation
    #[error("Segmentation error: {0}")]
    Segment(#[from] SegmentError),

    /// Error from translation
    #[error("Translation error: {0}")]
    Translation(#[from] TranslationError),

    /// Error from structured response validation
    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}
