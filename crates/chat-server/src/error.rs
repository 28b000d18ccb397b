//! Startup errors for the chat server.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Server configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// The OpenAI client could not be configured (e.g. missing key).
    #[error("OpenAI client error: {0}")]
    OpenAi(#[from] openai_brain::ConfigError),

    /// The weather client could not be configured (e.g. missing key).
    #[error("Weather client error: {0}")]
    Weather(#[from] weather_provider::ProviderError),

    /// Binding or serving failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for server startup.
pub type Result<T> = std::result::Result<T, ServerError>;
