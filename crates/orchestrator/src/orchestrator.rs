//! The turn state machine.

use std::sync::Arc;

use agent_tools::ToolRegistry;
use chat_core::{AssistantTurn, ChatCompletion, Message, ToolCallRequest, Transcript};
use tracing::{debug, info, warn};

use crate::error::OrchestratorError;
use crate::observer::{TracingObserver, TurnEvent, TurnObserver, TurnOutcome};

/// Where a turn currently stands.
#[derive(Debug)]
enum TurnState {
    /// User message appended; waiting on the first completion.
    FirstCompletionPending,
    /// The model asked for a tool.
    ToolDispatchPending(ToolCallRequest),
    /// Tool result appended; waiting on the follow-up completion.
    SecondCompletionPending { tool: String },
    /// The reply is in the transcript.
    Complete {
        reply: String,
        used_tool: Option<String>,
    },
}

/// Runs chat turns against a completion backend and a tool registry.
///
/// A turn is: append the user message, ask the model (offering every
/// registered tool), and if the model asks for a tool, validate and run it,
/// append its result, and ask the model once more without tools. At most
/// one tool runs per turn. Errors are not retried and appended messages are
/// never rolled back.
pub struct Orchestrator {
    completion: Arc<dyn ChatCompletion>,
    registry: ToolRegistry,
    observer: Arc<dyn TurnObserver>,
}

impl Orchestrator {
    /// Create an orchestrator that logs turn events through `tracing`.
    pub fn new(completion: Arc<dyn ChatCompletion>, registry: ToolRegistry) -> Self {
        info!(
            "Orchestrator initialized with completion backend '{}' and tools: {:?}",
            completion.name(),
            registry.list_tools()
        );

        Self {
            completion,
            registry,
            observer: Arc::new(TracingObserver),
        }
    }

    /// Replace the turn observer.
    pub fn with_observer(mut self, observer: Arc<dyn TurnObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Run one turn for `user_text`, appending to `transcript`.
    ///
    /// Returns the reply text, which is also the last message of the
    /// transcript on success. On failure the transcript keeps whatever was
    /// appended before the error.
    pub async fn run_turn(
        &self,
        transcript: &mut Transcript,
        user_text: &str,
    ) -> Result<String, OrchestratorError> {
        self.observer
            .on_event(&TurnEvent::TurnStarted {
                transcript_len: transcript.len(),
            })
            .await;

        let result = self.drive(transcript, user_text).await;

        let outcome = match &result {
            Ok((_, used_tool)) => TurnOutcome::Replied {
                used_tool: used_tool.clone(),
            },
            Err(err) => {
                warn!("Turn failed ({}): {}", err.kind(), err);
                TurnOutcome::Failed(err.kind())
            }
        };
        self.observer
            .on_event(&TurnEvent::TurnEnded { outcome })
            .await;

        result.map(|(reply, _)| reply)
    }

    async fn drive(
        &self,
        transcript: &mut Transcript,
        user_text: &str,
    ) -> Result<(String, Option<String>), OrchestratorError> {
        transcript.push(Message::user(user_text));
        let mut state = TurnState::FirstCompletionPending;

        loop {
            debug!("Turn state: {:?}", state);

            state = match state {
                TurnState::FirstCompletionPending => {
                    let turn = self
                        .completion
                        .complete(transcript, Some(self.registry.declarations()))
                        .await?;
                    transcript.push(turn.clone().into_message());

                    match turn {
                        AssistantTurn::Text(reply) => TurnState::Complete {
                            reply,
                            used_tool: None,
                        },
                        AssistantTurn::ToolCall(call) => TurnState::ToolDispatchPending(call),
                    }
                }
                TurnState::ToolDispatchPending(call) => {
                    let tool = call.name.clone();
                    self.dispatch(transcript, call).await?;
                    TurnState::SecondCompletionPending { tool }
                }
                TurnState::SecondCompletionPending { tool } => {
                    match self.completion.complete(transcript, None).await? {
                        AssistantTurn::Text(reply) => {
                            transcript.push(Message::assistant(reply.clone()));
                            TurnState::Complete {
                                reply,
                                used_tool: Some(tool),
                            }
                        }
                        AssistantTurn::ToolCall(call) => {
                            return Err(OrchestratorError::Protocol(format!(
                                "follow-up response requested another tool call ('{}')",
                                call.name
                            )));
                        }
                    }
                }
                TurnState::Complete { reply, used_tool } => return Ok((reply, used_tool)),
            };
        }
    }

    /// Validate and run a tool call, then append its result.
    async fn dispatch(
        &self,
        transcript: &mut Transcript,
        call: ToolCallRequest,
    ) -> Result<(), OrchestratorError> {
        if self.registry.get(&call.name).is_none() {
            return Err(OrchestratorError::UnsupportedTool(call.name));
        }

        let args = self.registry.validate_args(&call.name, &call.arguments)?;

        self.observer
            .on_event(&TurnEvent::ToolDispatched {
                name: call.name.clone(),
                arguments: call.arguments.clone(),
            })
            .await;

        let output = self.registry.execute(&call.name, args).await?;
        transcript.push(Message::tool_result(call.name, output.content));

        Ok(())
    }
}
