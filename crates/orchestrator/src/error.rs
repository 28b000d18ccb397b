//! Error types for orchestrator operations.

use std::fmt;

use agent_tools::ToolError;
use chat_core::CompletionError;
use thiserror::Error;
use weather_provider::ProviderError;

/// Errors that can end a turn.
///
/// Every variant is fatal to the turn in progress. Use [`OrchestratorError::kind`]
/// to classify an error without matching on the wrapped upstream errors.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// The chat completion call failed.
    #[error("completion failed: {0}")]
    Completion(#[from] CompletionError),

    /// The weather provider failed while a tool was running.
    #[error("weather lookup failed: {0}")]
    Provider(#[from] ProviderError),

    /// Tool arguments did not match the tool's declaration.
    #[error("invalid tool argument '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// The model asked for a tool that is not registered.
    #[error("unsupported tool: {0}")]
    UnsupportedTool(String),

    /// The model broke the turn protocol.
    #[error("protocol violation: {0}")]
    Protocol(String),
}

/// Coarse classification of [`OrchestratorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// HTTP failure, timeout or non-success status from either upstream.
    Transport,
    /// Unexpected response shape, invalid transcript or a second tool call.
    Protocol,
    /// Tool arguments failed schema validation.
    Validation,
    /// The requested tool is not registered.
    UnsupportedTool,
    /// The model answered with neither text nor a tool call.
    EmptyResponse,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Protocol => "protocol",
            Self::Validation => "validation",
            Self::UnsupportedTool => "unsupported_tool",
            Self::EmptyResponse => "empty_response",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl OrchestratorError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Completion(err) => match err {
                CompletionError::Request(_) | CompletionError::Http { .. } => ErrorKind::Transport,
                CompletionError::EmptyResponse => ErrorKind::EmptyResponse,
                CompletionError::InvalidTranscript(_) | CompletionError::Protocol(_) => {
                    ErrorKind::Protocol
                }
            },
            Self::Provider(err) => match err {
                ProviderError::InvalidInput(_) => ErrorKind::Validation,
                ProviderError::MissingData { .. } | ProviderError::Decode(_) => ErrorKind::Protocol,
                ProviderError::Request(_)
                | ProviderError::Http { .. }
                | ProviderError::Api { .. }
                | ProviderError::Configuration(_) => ErrorKind::Transport,
            },
            Self::Validation { .. } => ErrorKind::Validation,
            Self::UnsupportedTool(_) => ErrorKind::UnsupportedTool,
            Self::Protocol(_) => ErrorKind::Protocol,
        }
    }
}

impl From<ToolError> for OrchestratorError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::NotFound(name) => Self::UnsupportedTool(name),
            ToolError::MissingParameter(field) => Self::Validation {
                field,
                reason: "required parameter is missing".to_string(),
            },
            ToolError::InvalidParameter { name, reason } => Self::Validation {
                field: name,
                reason,
            },
            ToolError::Provider(err) => Self::Provider(err),
            ToolError::Json(err) => Self::Protocol(format!("tool output is not valid JSON: {}", err)),
        }
    }
}
