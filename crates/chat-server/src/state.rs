//! Application state shared across handlers.

use std::sync::Arc;

use orchestrator::{Conversation, Orchestrator};
use tracing::{error, info};

use crate::frames::{ServerFrame, GENERIC_ERROR_NOTICE};
use crate::hub::ChatHub;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Turn runner.
    pub orchestrator: Arc<Orchestrator>,
    /// The single conversation every client talks to.
    pub conversation: Arc<Conversation>,
    /// Fan-out to connected clients.
    pub hub: ChatHub,
}

impl AppState {
    /// Create new application state.
    pub fn new(orchestrator: Orchestrator, conversation: Conversation, hub: ChatHub) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
            conversation: Arc::new(conversation),
            hub,
        }
    }

    /// Run a turn for a chat message and broadcast the outcome.
    ///
    /// Failures are logged and replaced by the generic notice; the frame
    /// that was broadcast is returned.
    pub async fn process_chat_message(&self, text: String) -> ServerFrame {
        info!("Received chat message ({} chars)", text.len());

        let frame = match self.conversation.submit(&self.orchestrator, &text).await {
            Ok(reply) => ServerFrame::bot_message(reply),
            Err(err) => {
                error!(kind = %err.kind(), "Error processing chat message: {}", err);
                ServerFrame::bot_message(GENERIC_ERROR_NOTICE)
            }
        };

        self.hub.broadcast(frame.clone());
        frame
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::frames::TOOL_STATUS_TEXT;
    use crate::hub::BroadcastObserver;
    use openai_brain::{OpenAiClient, OpenAiConfig};
    use weather_provider::{WeatherClient, WeatherConfig};
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    pub(crate) fn test_state(openai: &MockServer, weather: &MockServer) -> AppState {
        let completion = OpenAiClient::new(
            OpenAiConfig::builder()
                .api_key("openai-test-key")
                .api_url(openai.uri())
                .build(),
        )
        .unwrap();
        let provider = WeatherClient::new(
            WeatherConfig::builder()
                .api_key("weather-test-key")
                .api_url(weather.uri())
                .build(),
        )
        .unwrap();

        let hub = ChatHub::default();
        let orchestrator = Orchestrator::new(
            Arc::new(completion),
            agent_tools::default_registry(Arc::new(provider)),
        )
        .with_observer(Arc::new(BroadcastObserver::new(hub.clone())));

        AppState::new(orchestrator, Conversation::new("Be helpful."), hub)
    }

    fn text_body(text: &str) -> serde_json::Value {
        serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": text}}]
        })
    }

    #[tokio::test]
    async fn test_reply_is_broadcast() {
        let openai = MockServer::start().await;
        let weather = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_body("Hi! Which city?")))
            .expect(1)
            .mount(&openai)
            .await;

        let state = test_state(&openai, &weather);
        let mut frames = state.hub.subscribe();

        let frame = state.process_chat_message("hello".to_string()).await;

        assert_eq!(frame, ServerFrame::bot_message("Hi! Which city?"));
        assert_eq!(frames.recv().await.unwrap(), frame);
    }

    #[tokio::test]
    async fn test_tool_turn_sends_status_then_reply() {
        let openai = MockServer::start().await;
        let weather = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .and(body_partial_json(serde_json::json!({"function_call": "auto"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [{"message": {
                    "role": "assistant",
                    "content": null,
                    "function_call": {"name": "get_current_weather", "arguments": "{\"location\":\"Paris\"}"}
                }}]
            })))
            .up_to_n_times(1)
            .mount(&openai)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(text_body("64°F and clear.")))
            .mount(&openai)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/current.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "location": {"name": "Paris"},
                "current": {"temp_c": 18.0, "temp_f": 64.4, "condition": {"text": "Clear"}}
            })))
            .expect(1)
            .mount(&weather)
            .await;

        let state = test_state(&openai, &weather);
        let mut frames = state.hub.subscribe();

        state.process_chat_message("Weather in Paris?".to_string()).await;

        assert_eq!(frames.recv().await.unwrap(), ServerFrame::status(TOOL_STATUS_TEXT));
        assert_eq!(
            frames.recv().await.unwrap(),
            ServerFrame::bot_message("64°F and clear.")
        );
    }

    #[tokio::test]
    async fn test_failure_broadcasts_generic_notice() {
        let openai = MockServer::start().await;
        let weather = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/chat/completions"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&openai)
            .await;

        let state = test_state(&openai, &weather);
        let mut frames = state.hub.subscribe();

        let frame = state.process_chat_message("hello".to_string()).await;

        assert_eq!(frame, ServerFrame::bot_message(GENERIC_ERROR_NOTICE));
        assert_eq!(frames.recv().await.unwrap(), frame);
        assert_eq!(state.conversation.snapshot().await.len(), 2);
    }
}
