//! Error types for tool operations.

use thiserror::Error;
use weather_provider::ProviderError;

/// Errors that can occur during tool validation or execution.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Tool not found in registry.
    #[error("Tool not found: {0}")]
    NotFound(String),

    /// Missing required parameter.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// The weather provider failed.
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    /// Tool output could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
