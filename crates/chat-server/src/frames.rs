//! WebSocket frames exchanged with browser clients.

use serde::{Deserialize, Serialize};

/// Notice broadcast when a turn fails for any reason.
pub const GENERIC_ERROR_NOTICE: &str = "Error occurred while processing your message";

/// Status line broadcast while a weather lookup runs.
pub const TOOL_STATUS_TEXT: &str = "Looking up the weather...";

/// A frame sent by a client.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientFrame {
    ChatMessage { text: String },
}

/// A frame broadcast to every client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerFrame {
    /// The bot's reply, or the generic error notice.
    BotMessage { text: String },
    /// Progress while a turn is running.
    Status { text: String },
}

impl ServerFrame {
    pub fn bot_message(text: impl Into<String>) -> Self {
        Self::BotMessage { text: text.into() }
    }

    pub fn status(text: impl Into<String>) -> Self {
        Self::Status { text: text.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chat_message() {
        let frame: ClientFrame =
            serde_json::from_str(r#"{"type":"chat_message","text":"Weather in Paris?"}"#).unwrap();
        assert_eq!(
            frame,
            ClientFrame::ChatMessage {
                text: "Weather in Paris?".to_string()
            }
        );
    }

    #[test]
    fn test_reject_malformed_frames() {
        assert!(serde_json::from_str::<ClientFrame>(r#"{"type":"typing"}"#).is_err());
        assert!(serde_json::from_str::<ClientFrame>(r#"{"type":"chat_message"}"#).is_err());
        assert!(serde_json::from_str::<ClientFrame>("hello").is_err());
    }

    #[test]
    fn test_server_frame_wire_format() {
        let json = serde_json::to_value(ServerFrame::bot_message("Sunny")).unwrap();
        assert_eq!(json, serde_json::json!({"type": "bot_message", "text": "Sunny"}));

        let json = serde_json::to_value(ServerFrame::status(TOOL_STATUS_TEXT)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "status", "text": "Looking up the weather..."})
        );
    }
}
