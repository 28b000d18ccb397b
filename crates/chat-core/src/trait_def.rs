//! The chat completion trait.

use async_trait::async_trait;

use crate::error::CompletionError;
use crate::message::Transcript;
use crate::tools::ToolDeclaration;
use crate::turn::AssistantTurn;

/// A client that turns a transcript into the model's next turn.
///
/// Implementations must not mutate the transcript; the orchestrator owns
/// every append.
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Ask the model for its next turn.
    ///
    /// When `tools` is `Some`, the declarations are offered to the model and
    /// it decides whether to call one. When `None`, the model must answer in
    /// natural language.
    async fn complete(
        &self,
        transcript: &Transcript,
        tools: Option<&[ToolDeclaration]>,
    ) -> Result<AssistantTurn, CompletionError>;

    /// Human-readable name of this client (for logging).
    fn name(&self) -> &str;
}
