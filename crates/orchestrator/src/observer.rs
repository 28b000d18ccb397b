//! Turn observer trait and implementations.

use async_trait::async_trait;

use crate::error::ErrorKind;

/// Something that happened during a turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    /// A user message was admitted and the turn began.
    TurnStarted {
        /// Transcript length before the user message was appended.
        transcript_len: usize,
    },
    /// A validated tool call is about to run.
    ToolDispatched { name: String, arguments: String },
    /// The turn finished, successfully or not.
    TurnEnded { outcome: TurnOutcome },
}

/// How a turn ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A reply was produced; `used_tool` names the tool that ran, if any.
    Replied { used_tool: Option<String> },
    /// The turn failed with an error of the given kind.
    Failed(ErrorKind),
}

/// Receives turn events.
///
/// Abstracted so that transports can surface progress (e.g. a status line
/// while a tool runs) and tests can record what happened.
#[async_trait]
pub trait TurnObserver: Send + Sync {
    async fn on_event(&self, event: &TurnEvent);
}

/// An observer that logs every event through `tracing`.
#[derive(Debug, Clone, Default)]
pub struct TracingObserver;

#[async_trait]
impl TurnObserver for TracingObserver {
    async fn on_event(&self, event: &TurnEvent) {
        match event {
            TurnEvent::TurnStarted { transcript_len } => {
                tracing::info!(transcript_len, "Turn started");
            }
            TurnEvent::ToolDispatched { name, arguments } => {
                tracing::info!(tool = %name, "Dispatching tool");
                tracing::debug!(tool = %name, arguments = %arguments, "Tool arguments");
            }
            TurnEvent::TurnEnded {
                outcome: TurnOutcome::Replied { used_tool },
            } => {
                tracing::info!(used_tool = ?used_tool, "Turn completed");
            }
            TurnEvent::TurnEnded {
                outcome: TurnOutcome::Failed(kind),
            } => {
                tracing::warn!(error_kind = %kind, "Turn failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_tracing_observer() {
        let observer = TracingObserver;

        // Should not panic
        observer
            .on_event(&TurnEvent::TurnStarted { transcript_len: 1 })
            .await;
        observer
            .on_event(&TurnEvent::ToolDispatched {
                name: "get_current_weather".to_string(),
                arguments: r#"{"location":"Paris"}"#.to_string(),
            })
            .await;
        observer
            .on_event(&TurnEvent::TurnEnded {
                outcome: TurnOutcome::Replied {
                    used_tool: Some("get_current_weather".to_string()),
                },
            })
            .await;
        observer
            .on_event(&TurnEvent::TurnEnded {
                outcome: TurnOutcome::Failed(ErrorKind::Transport),
            })
            .await;
    }
}
