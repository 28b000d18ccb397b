//! Error types for chat completion calls.

use thiserror::Error;

/// Errors that can occur while asking the model for a completion.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The transcript cannot be sent as-is (empty, or not ending in input).
    #[error("invalid transcript: {0}")]
    InvalidTranscript(String),

    /// The request never produced an HTTP response (connect failure, timeout).
    #[error("request failed: {0}")]
    Request(String),

    /// The endpoint answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Http { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("unexpected response: {0}")]
    Protocol(String),

    /// The model returned neither text nor a tool call.
    #[error("received empty response from the model")]
    EmptyResponse,
}

impl CompletionError {
    /// Whether this error came from the HTTP layer rather than the payload.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Request(_) | Self::Http { .. })
    }
}
