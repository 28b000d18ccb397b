//! The model's answer to a completion request.

use serde::{Deserialize, Serialize};

use crate::error::CompletionError;
use crate::message::Message;

/// A tool invocation requested by the model.
///
/// `arguments` is the raw JSON string the model produced; it is validated
/// against the tool's declaration before dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCallRequest {
    /// Name of the tool to call.
    pub name: String,
    /// Arguments as a JSON-encoded object.
    pub arguments: String,
}

impl ToolCallRequest {
    pub fn new(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            arguments: arguments.into(),
        }
    }
}

/// What the model answered: natural-language text or a single tool call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssistantTurn {
    Text(String),
    ToolCall(ToolCallRequest),
}

impl AssistantTurn {
    /// Build a turn from the optional fields of a response message.
    ///
    /// Blank text counts as absent. A message with neither text nor a call
    /// is [`CompletionError::EmptyResponse`]; one with both is a protocol
    /// violation.
    pub fn from_parts(
        content: Option<String>,
        function_call: Option<ToolCallRequest>,
    ) -> Result<Self, CompletionError> {
        let text = content.filter(|c| !c.trim().is_empty());

        match (text, function_call) {
            (Some(text), None) => Ok(Self::Text(text)),
            (None, Some(call)) => Ok(Self::ToolCall(call)),
            (Some(_), Some(call)) => Err(CompletionError::Protocol(format!(
                "response carries both text and a call to '{}'",
                call.name
            ))),
            (None, None) => Err(CompletionError::EmptyResponse),
        }
    }

    /// The requested tool call, if this turn is one.
    pub fn tool_call(&self) -> Option<&ToolCallRequest> {
        match self {
            Self::ToolCall(call) => Some(call),
            Self::Text(_) => None,
        }
    }

    /// Convert into the assistant message appended to the transcript.
    pub fn into_message(self) -> Message {
        match self {
            Self::Text(text) => Message::assistant(text),
            Self::ToolCall(call) => Message::assistant_tool_call(call),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_only() {
        let turn = AssistantTurn::from_parts(Some("Hello".to_string()), None).unwrap();
        assert_eq!(turn, AssistantTurn::Text("Hello".to_string()));
        assert!(turn.tool_call().is_none());
    }

    #[test]
    fn test_call_only_with_null_content() {
        let call = ToolCallRequest::new("get_current_weather", "{}");
        let turn = AssistantTurn::from_parts(None, Some(call.clone())).unwrap();
        assert_eq!(turn.tool_call(), Some(&call));
    }

    #[test]
    fn test_blank_text_with_call_is_a_call() {
        let call = ToolCallRequest::new("get_current_weather", "{}");
        let turn = AssistantTurn::from_parts(Some("  ".to_string()), Some(call)).unwrap();
        assert!(turn.tool_call().is_some());
    }

    #[test]
    fn test_neither_is_empty_response() {
        let result = AssistantTurn::from_parts(Some(String::new()), None);
        assert!(matches!(result, Err(CompletionError::EmptyResponse)));

        let result = AssistantTurn::from_parts(None, None);
        assert!(matches!(result, Err(CompletionError::EmptyResponse)));
    }

    #[test]
    fn test_both_is_protocol_error() {
        let call = ToolCallRequest::new("get_current_weather", "{}");
        let result = AssistantTurn::from_parts(Some("Let me check".to_string()), Some(call));
        assert!(matches!(result, Err(CompletionError::Protocol(_))));
    }

    #[test]
    fn test_into_message() {
        let message = AssistantTurn::Text("Hi".to_string()).into_message();
        assert_eq!(message, Message::assistant("Hi"));

        let call = ToolCallRequest::new("get_current_weather", "{}");
        let message = AssistantTurn::ToolCall(call.clone()).into_message();
        assert_eq!(message.tool_call(), Some(&call));
        assert!(message.content().is_none());
    }
}
