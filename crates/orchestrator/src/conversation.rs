//! The shared conversation and its admission queue.

use chat_core::Transcript;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::OrchestratorError;
use crate::orchestrator::Orchestrator;

/// A single conversation shared by every client.
///
/// Turns are admitted one at a time: the transcript lock is FIFO-fair and
/// is held for the whole turn, so appends from two turns never interleave.
pub struct Conversation {
    transcript: Mutex<Transcript>,
}

impl Conversation {
    /// Start a conversation with the given system prompt.
    pub fn new(system_prompt: impl Into<String>) -> Self {
        Self::from_transcript(Transcript::new(system_prompt))
    }

    /// Resume from an existing transcript.
    pub fn from_transcript(transcript: Transcript) -> Self {
        Self {
            transcript: Mutex::new(transcript),
        }
    }

    /// Submit a user message and wait for the reply.
    ///
    /// Waits behind any turn already in progress.
    pub async fn submit(
        &self,
        orchestrator: &Orchestrator,
        text: &str,
    ) -> Result<String, OrchestratorError> {
        let mut transcript = self.transcript.lock().await;
        debug!("Turn admitted, transcript has {} messages", transcript.len());
        orchestrator.run_turn(&mut transcript, text).await
    }

    /// A copy of the transcript as of now.
    ///
    /// Waits for any running turn to finish.
    pub async fn snapshot(&self) -> Transcript {
        self.transcript.lock().await.clone()
    }
}
