//! Test doubles shared by the unit tests of this crate.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chat_core::{
    AssistantTurn, ChatCompletion, CompletionError, Message, ToolCallRequest, ToolDeclaration,
    Transcript,
};
use weather_provider::{CurrentConditions, ForecastDay, ProviderError, Unit, WeatherProvider};

use crate::observer::{TurnEvent, TurnObserver};

/// One recorded completion request.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub transcript: Transcript,
    pub offered_tools: Option<Vec<String>>,
}

/// Completion that answers from a fixed script, or echoes the user when
/// the script is empty and echo mode is on.
#[derive(Default)]
pub struct ScriptedCompletion {
    replies: Mutex<VecDeque<Result<AssistantTurn, CompletionError>>>,
    requests: Mutex<Vec<RecordedRequest>>,
    echo: bool,
    delay: Option<Duration>,
}

impl ScriptedCompletion {
    pub fn new(replies: Vec<Result<AssistantTurn, CompletionError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            ..Default::default()
        }
    }

    pub fn echo(delay: Duration) -> Self {
        Self {
            echo: true,
            delay: Some(delay),
            ..Default::default()
        }
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatCompletion for ScriptedCompletion {
    async fn complete(
        &self,
        transcript: &Transcript,
        tools: Option<&[ToolDeclaration]>,
    ) -> Result<AssistantTurn, CompletionError> {
        self.requests.lock().unwrap().push(RecordedRequest {
            transcript: transcript.clone(),
            offered_tools: tools.map(|t| t.iter().map(|d| d.name.clone()).collect()),
        });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.echo {
            let last_user = transcript
                .messages()
                .iter()
                .rev()
                .find_map(|m| match m {
                    Message::User { content } => Some(content.clone()),
                    _ => None,
                })
                .unwrap_or_default();
            return Ok(AssistantTurn::Text(format!("echo: {}", last_user)));
        }

        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(CompletionError::Protocol("script exhausted".to_string())))
    }

    fn name(&self) -> &str {
        "ScriptedCompletion"
    }
}

pub fn text(reply: &str) -> Result<AssistantTurn, CompletionError> {
    Ok(AssistantTurn::Text(reply.to_string()))
}

pub fn call(name: &str, arguments: &str) -> Result<AssistantTurn, CompletionError> {
    Ok(AssistantTurn::ToolCall(ToolCallRequest::new(name, arguments)))
}

/// Provider that counts calls and returns Paris-like canned data.
#[derive(Default)]
pub struct StubProvider {
    calls: AtomicUsize,
    fail_with_status: Option<u16>,
}

impl StubProvider {
    pub fn failing(status: u16) -> Self {
        Self {
            fail_with_status: Some(status),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherProvider for StubProvider {
    async fn current_conditions(
        &self,
        location: &str,
        unit: Unit,
    ) -> Result<CurrentConditions, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.fail_with_status {
            return Err(ProviderError::Http { status });
        }
        Ok(CurrentConditions {
            location: location.to_string(),
            temperature: "18".to_string(),
            unit,
            forecast: vec!["Clear".to_string()],
        })
    }

    async fn forecast(
        &self,
        location: &str,
        unit: Unit,
        days: u32,
    ) -> Result<Vec<ForecastDay>, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.fail_with_status {
            return Err(ProviderError::Http { status });
        }
        Ok((1..=days)
            .map(|d| ForecastDay {
                date: format!("2024-06-{:02}", d),
                temperature: 15.0 + d as f64,
                unit,
                forecast: format!("{} day {}", location, d),
            })
            .collect())
    }
}

/// Observer that keeps every event.
#[derive(Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<TurnEvent>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<TurnEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl TurnObserver for RecordingObserver {
    async fn on_event(&self, event: &TurnEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}
