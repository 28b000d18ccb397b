//! Error types for weather lookups.

use thiserror::Error;

/// Errors that can occur when fetching weather data.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Arguments rejected before any request was made.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The request never produced an HTTP response (connect failure, timeout).
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The provider answered with a non-success status.
    #[error("weather API returned status {status}")]
    Http { status: u16 },

    /// The provider reported an error in an otherwise successful response.
    #[error("weather API error: {message}")]
    Api { message: String },

    /// The response lacked the expected data section.
    #[error("failed to retrieve weather data for location: {location}")]
    MissingData { location: String },

    /// The response body could not be decoded.
    #[error("invalid weather response: {0}")]
    Decode(String),

    /// Client could not be configured.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ProviderError {
    /// Whether this error came from the HTTP layer rather than the payload.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Http { .. })
    }
}
