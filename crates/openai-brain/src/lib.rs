//! OpenAI chat completions client.
//!
//! This crate provides [`OpenAiClient`], a [`ChatCompletion`] implementation
//! that talks to the OpenAI `/v1/chat/completions` endpoint using the
//! `functions` / `function_call` protocol.
//!
//! # Features
//!
//! - Sends the full transcript on every request (the server keeps no state)
//! - Offers tool declarations with `function_call: "auto"` when requested
//! - Parses the reply into an [`AssistantTurn`]: text XOR a single tool call
//! - Bounded per-request timeout
//! - Configurable via environment variables
//!
//! # Usage
//!
//! ```rust,no_run
//! use openai_brain::{ChatCompletion, OpenAiClient, Transcript, Message};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = OpenAiClient::from_env()?;
//!
//!     let mut transcript = Transcript::new("You are a helpful assistant.");
//!     transcript.push(Message::user("Hello!"));
//!
//!     let turn = client.complete(&transcript, None).await?;
//!     println!("{:?}", turn);
//!     Ok(())
//! }
//! ```

mod api_types;
mod client;
mod config;

pub use client::OpenAiClient;
pub use config::{ConfigError, OpenAiConfig, OpenAiConfigBuilder};

// Re-export chat-core types for convenience
pub use chat_core::{
    async_trait, AssistantTurn, ChatCompletion, CompletionError, Message, ToolCallRequest,
    ToolDeclaration, Transcript,
};
