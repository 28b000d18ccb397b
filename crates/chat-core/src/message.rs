//! Conversation messages and the transcript that holds them.

use serde::{Deserialize, Serialize};

use crate::turn::ToolCallRequest;

/// The role of a message in the transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    System,
    User,
    Assistant,
    ToolResult,
}

/// A single message in the conversation.
///
/// Serializes to the chat completions wire format: the role is the `role`
/// field, and tool results use the `function` role with the tool's name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum Message {
    /// Instructions for the model.
    System { content: String },
    /// Text typed by the end user.
    User { content: String },
    /// A model turn. `content` is null when the model asked for a tool instead.
    Assistant {
        content: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        function_call: Option<ToolCallRequest>,
    },
    /// Output of a tool, named after the tool that produced it.
    #[serde(rename = "function")]
    ToolResult { name: String, content: String },
}

impl Message {
    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::System {
            content: content.into(),
        }
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::User {
            content: content.into(),
        }
    }

    /// Create an assistant message carrying text.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::Assistant {
            content: Some(content.into()),
            function_call: None,
        }
    }

    /// Create an assistant message carrying a tool call.
    pub fn assistant_tool_call(call: ToolCallRequest) -> Self {
        Self::Assistant {
            content: None,
            function_call: Some(call),
        }
    }

    /// Create a tool-result message.
    pub fn tool_result(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self::ToolResult {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn role(&self) -> Role {
        match self {
            Self::System { .. } => Role::System,
            Self::User { .. } => Role::User,
            Self::Assistant { .. } => Role::Assistant,
            Self::ToolResult { .. } => Role::ToolResult,
        }
    }

    /// Text content, if any.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::System { content } | Self::User { content } => Some(content),
            Self::Assistant { content, .. } => content.as_deref(),
            Self::ToolResult { content, .. } => Some(content),
        }
    }

    /// The tool call requested by an assistant message, if any.
    pub fn tool_call(&self) -> Option<&ToolCallRequest> {
        match self {
            Self::Assistant { function_call, .. } => function_call.as_ref(),
            _ => None,
        }
    }
}

/// Ordered, append-only conversation history.
///
/// The transcript starts with a single system message and grows by one
/// user message per turn, followed by the model's turn(s) and at most one
/// tool result.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    /// Create a transcript seeded with a system prompt.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::system(system_prompt)],
        }
    }

    /// Create a transcript with no messages at all.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Append a message.
    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Text of the last message if it is an assistant reply.
    pub fn last_reply(&self) -> Option<&str> {
        match self.messages.last()? {
            Message::Assistant { content, .. } => content.as_deref(),
            _ => None,
        }
    }

    /// Whether the transcript ends in something the model should answer.
    pub fn awaits_completion(&self) -> bool {
        matches!(
            self.last().map(Message::role),
            Some(Role::User | Role::ToolResult)
        )
    }

    /// Check the tool-call pairing invariant.
    ///
    /// Every assistant tool call must be immediately followed by exactly one
    /// tool result naming the same tool, and every tool result must answer
    /// such a call.
    pub fn is_well_formed(&self) -> bool {
        let mut pending: Option<&str> = None;

        for message in &self.messages {
            if let Some(expected) = pending.take() {
                match message {
                    Message::ToolResult { name, .. } if name == expected => continue,
                    _ => return false,
                }
            }

            match message {
                Message::Assistant {
                    function_call: Some(call),
                    ..
                } => pending = Some(call.name.as_str()),
                Message::ToolResult { .. } => return false,
                _ => {}
            }
        }

        pending.is_none()
    }
}
