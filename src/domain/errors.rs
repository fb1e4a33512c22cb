//! Domain error types
//!
//! All errors are domain-specific and don't expose AWS SDK types. Provider
//! failures are flattened to messages at the adapter boundary.

use thiserror::Error;

/// Main error type
///
/// This is the primary error type used throughout the library.
#[derive(Debug, Error)]
pub enum SwaggerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Cloud provider errors
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Errors raised by a [`CloudProvider`](crate::adapters::provider::CloudProvider)
///
/// The workflow never distinguishes between these variants; they exist for
/// diagnostics only.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The describe-stack request failed
    #[error("Failed to describe stack {stack}: {message}")]
    DescribeStackFailed { stack: String, message: String },

    /// The describe-stack request returned no stack
    #[error("Stack not found: {0}")]
    StackNotFound(String),

    /// The export request failed
    #[error("Failed to export API description for '{gateway}': {message}")]
    ExportFailed { gateway: String, message: String },

    /// The put-object request failed
    #[error("Failed to upload s3://{bucket}/{key}: {message}")]
    UploadFailed {
        bucket: String,
        key: String,
        message: String,
    },

    /// The SDK client could not be configured
    #[error("Invalid client configuration: {0}")]
    ClientConfiguration(String),
}

impl From<std::io::Error> for SwaggerError {
    fn from(err: std::io::Error) -> Self {
        SwaggerError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SwaggerError {
    fn from(err: serde_json::Error) -> Self {
        SwaggerError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for SwaggerError {
    fn from(err: toml::de::Error) -> Self {
        SwaggerError::Configuration(format!("TOML parse error: {err}"))
    }
}
