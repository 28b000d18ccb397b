//! Conversation orchestrator for the weather chat bot.
//!
//! This crate provides the [`Orchestrator`], which runs one chat turn at a
//! time against a [`ChatCompletion`] backend and a [`ToolRegistry`], and the
//! [`Conversation`] that holds the shared transcript and admits turns one
//! after another.
//!
//! # Turn flow
//!
//! ```text
//! user text
//!     ↓
//! append user message
//!     ↓
//! first completion (all tool declarations, function_call = auto)
//!     ↓
//! ├─ text ──────────────────────────────→ reply
//! └─ tool call
//!       ↓
//!    resolve + validate arguments
//!       ↓
//!    run tool, append tool result
//!       ↓
//!    second completion (no declarations)
//!       ↓
//!    reply
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use orchestrator::{Conversation, Orchestrator};
//!
//! let completion = Arc::new(openai_brain::OpenAiClient::from_env()?);
//! let provider = Arc::new(weather_provider::WeatherClient::from_env()?);
//! let orchestrator = Orchestrator::new(completion, agent_tools::default_registry(provider));
//!
//! let conversation = Conversation::new("Ask for clarification if a request is ambiguous.");
//! let reply = conversation.submit(&orchestrator, "Weather in Paris?").await?;
//! println!("{}", reply);
//! ```

mod conversation;
mod error;
mod observer;
mod orchestrator;

#[cfg(test)]
mod testing;

pub use conversation::Conversation;
pub use error::{ErrorKind, OrchestratorError};
pub use observer::{TracingObserver, TurnEvent, TurnObserver, TurnOutcome};
pub use orchestrator::Orchestrator;

// Re-export commonly used types from dependencies
pub use agent_tools::ToolRegistry;
pub use async_trait::async_trait;
pub use chat_core::{ChatCompletion, Transcript};
