//! OpenAiClient implementation of ChatCompletion.

use chat_core::{
    async_trait, AssistantTurn, ChatCompletion, CompletionError, ToolDeclaration, Transcript,
};
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::api_types::{
    ApiError, ChatCompletionRequest, ChatCompletionResponse, FunctionDefinition,
};
use crate::config::{ConfigError, OpenAiConfig};

/// A [`ChatCompletion`] backed by the OpenAI chat completions API.
///
/// The client is stateless: each call sends the whole transcript it is
/// given and returns the model's single answer.
pub struct OpenAiClient {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    /// Create a new OpenAiClient with the given configuration.
    pub fn new(config: OpenAiConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        info!(
            "OpenAiClient initialized with model: {}, timeout: {:?}",
            config.model, config.timeout
        );

        Ok(Self { client, config })
    }

    /// Create an OpenAiClient from environment variables.
    ///
    /// See [`OpenAiConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::new(OpenAiConfig::from_env()?)
    }

    async fn send(
        &self,
        request: &ChatCompletionRequest<'_>,
    ) -> Result<ChatCompletionResponse, CompletionError> {
        let url = self.config.completions_url();

        debug!(
            "Sending {} messages to OpenAI (functions offered: {})",
            request.messages.len(),
            request.functions.is_some()
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CompletionError::Request(format!(
                        "request timed out after {:?}",
                        self.config.timeout
                    ))
                } else {
                    CompletionError::Request(format!("failed to send request: {}", e))
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&error_text)
                .map(|api_error| api_error.error.message)
                .unwrap_or(error_text);

            warn!("OpenAI API error ({}): {}", status.as_u16(), message);
            return Err(CompletionError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| CompletionError::Request(format!("failed to read response: {}", e)))?;

        serde_json::from_str(&body)
            .map_err(|e| CompletionError::Protocol(format!("failed to parse response: {}", e)))
    }
}

#[async_trait]
impl ChatCompletion for OpenAiClient {
    async fn complete(
        &self,
        transcript: &Transcript,
        tools: Option<&[ToolDeclaration]>,
    ) -> Result<AssistantTurn, CompletionError> {
        if transcript.is_empty() {
            return Err(CompletionError::InvalidTranscript(
                "transcript has no messages".to_string(),
            ));
        }
        if !transcript.awaits_completion() {
            return Err(CompletionError::InvalidTranscript(
                "transcript must end with a user message or a tool result".to_string(),
            ));
        }

        let request = ChatCompletionRequest {
            model: &self.config.model,
            messages: transcript.messages(),
            functions: tools.map(|decls| decls.iter().map(FunctionDefinition::from).collect()),
            function_call: tools.map(|_| "auto"),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let completion = self.send(&request).await?;

        if let Some(usage) = &completion.usage {
            debug!(
                "OpenAI usage: prompt={}, completion={}, total={}",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        let choice = completion.choices.into_iter().next().ok_or_else(|| {
            CompletionError::Protocol("response contains no choices".to_string())
        })?;

        debug!(
            "OpenAI response id={:?} model={:?} finish_reason={:?}",
            completion.id, completion.model, choice.finish_reason
        );

        let message = choice.message.ok_or_else(|| {
            CompletionError::Protocol("first choice has no message".to_string())
        })?;

        AssistantTurn::from_parts(message.content, message.function_call)
    }

    fn name(&self) -> &str {
        "OpenAiClient"
    }
}
