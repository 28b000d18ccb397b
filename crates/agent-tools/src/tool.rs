//! Tool trait definition and types.

use std::collections::HashMap;

use async_trait::async_trait;
use chat_core::ToolDeclaration;
use serde::Serialize;
use serde_json::Value;

use crate::error::ToolError;

/// Validated arguments passed to a tool for execution.
#[derive(Debug, Clone, Default)]
pub struct ToolArgs {
    /// Parameters as key-value pairs.
    pub params: HashMap<String, Value>,
}

impl ToolArgs {
    /// Create new tool arguments with the given parameters.
    pub fn new(params: HashMap<String, Value>) -> Self {
        Self { params }
    }

    /// Get a string parameter, returning an error if missing or not a string.
    pub fn get_string(&self, key: &str) -> Result<String, ToolError> {
        self.params
            .get(key)
            .ok_or_else(|| ToolError::MissingParameter(key.to_string()))?
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| ToolError::InvalidParameter {
                name: key.to_string(),
                reason: "expected string".to_string(),
            })
    }

    /// Get an optional string parameter.
    pub fn get_string_opt(&self, key: &str) -> Option<String> {
        self.params.get(key)?.as_str().map(|s| s.to_string())
    }

    /// Get an integer parameter, returning an error if missing or not an integer.
    pub fn get_integer(&self, key: &str) -> Result<i64, ToolError> {
        self.params
            .get(key)
            .ok_or_else(|| ToolError::MissingParameter(key.to_string()))?
            .as_i64()
            .ok_or_else(|| ToolError::InvalidParameter {
                name: key.to_string(),
                reason: "expected integer".to_string(),
            })
    }
}

/// Output from a tool execution.
///
/// `content` is the text inserted into the transcript as the tool result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolOutput {
    pub content: String,
}

impl ToolOutput {
    /// Create an output from plain text.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Create an output by serializing a record to JSON.
    pub fn json<T: Serialize + ?Sized>(record: &T) -> Result<Self, ToolError> {
        Ok(Self::new(serde_json::to_string(record)?))
    }
}

/// Trait for tools the model can call.
///
/// A tool exposes a static declaration (sent to the model) and executes
/// with arguments that the registry has already validated against it.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's unique name (used for dispatch).
    fn name(&self) -> &str;

    /// Declaration offered to the model.
    fn declaration(&self) -> ToolDeclaration;

    /// Execute the tool with validated arguments.
    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError>;
}
