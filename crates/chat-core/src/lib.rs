//! Core conversation types for the weather chat bot.
//!
//! This crate provides the shared vocabulary used by every other crate in
//! the workspace:
//!
//! - [`Message`] / [`Transcript`] - The ordered conversation history
//! - [`AssistantTurn`] - What the model answered: text XOR a tool call
//! - [`ToolDeclaration`] - Static description of a callable tool
//! - [`ChatCompletion`] - The trait implemented by model clients
//! - [`CompletionError`] - Error types for completion calls
//!
//! # Example
//!
//! ```rust
//! use chat_core::{async_trait, AssistantTurn, ChatCompletion, CompletionError, ToolDeclaration, Transcript};
//!
//! struct Parrot;
//!
//! #[async_trait]
//! impl ChatCompletion for Parrot {
//!     async fn complete(
//!         &self,
//!         transcript: &Transcript,
//!         _tools: Option<&[ToolDeclaration]>,
//!     ) -> Result<AssistantTurn, CompletionError> {
//!         let text = transcript.last().and_then(|m| m.content()).unwrap_or("...");
//!         Ok(AssistantTurn::Text(text.to_string()))
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Parrot"
//!     }
//! }
//! ```

mod error;
mod message;
mod tools;
mod trait_def;
mod turn;

pub use error::CompletionError;
pub use message::{Message, Role, Transcript};
pub use tools::{ParameterKind, ParameterSpec, ToolDeclaration};
pub use trait_def::ChatCompletion;
pub use turn::{AssistantTurn, ToolCallRequest};

// Re-export async_trait for convenience
pub use async_trait::async_trait;
