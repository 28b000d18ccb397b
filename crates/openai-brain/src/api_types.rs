//! OpenAI API request and response types.

use chat_core::{Message, ToolCallRequest, ToolDeclaration};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A function definition offered to the model.
#[derive(Debug, Clone, Serialize)]
pub struct FunctionDefinition<'a> {
    /// Name of the function.
    pub name: &'a str,
    /// Description of what the function does.
    pub description: &'a str,
    /// JSON Schema for the function parameters.
    pub parameters: Value,
}

impl<'a> From<&'a ToolDeclaration> for FunctionDefinition<'a> {
    fn from(declaration: &'a ToolDeclaration) -> Self {
        Self {
            name: &declaration.name,
            description: &declaration.description,
            parameters: declaration.parameters_schema(),
        }
    }
}

/// Chat completion request to the OpenAI API.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest<'a> {
    /// Model to use
    pub model: &'a str,
    /// Messages in the conversation
    pub messages: &'a [Message],
    /// Functions the model may call (omitted for follow-up requests)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub functions: Option<Vec<FunctionDefinition<'a>>>,
    /// Function calling mode ("auto" when functions are offered)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub function_call: Option<&'static str>,
    /// Maximum tokens to generate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Temperature for generation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
}

/// Chat completion response from the OpenAI API.
///
/// Fields are lenient so that a body with the wrong shape is reported as a
/// protocol error by the client rather than a decode failure.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Response ID
    #[serde(default)]
    pub id: Option<String>,
    /// Model used
    #[serde(default)]
    pub model: Option<String>,
    /// Response choices
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Token usage
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// A response choice.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The message
    #[serde(default)]
    pub message: Option<ResponseMessage>,
    /// Finish reason
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Response message: text content, a function call, or (invalidly) both.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    /// Content (null when the model calls a function)
    #[serde(default)]
    pub content: Option<String>,
    /// Requested function call
    #[serde(default)]
    pub function_call: Option<ToolCallRequest>,
}

/// Token usage information.
#[derive(Debug, Clone, Deserialize)]
pub struct Usage {
    /// Prompt tokens
    pub prompt_tokens: u32,
    /// Completion tokens
    pub completion_tokens: u32,
    /// Total tokens
    pub total_tokens: u32,
}

/// API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    /// Error details
    pub error: ApiErrorDetails,
}

/// API error details.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetails {
    /// Error message
    pub message: String,
}
