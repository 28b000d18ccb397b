//! WebSocket chat server for the weather chat bot.
//!
//! Serves the browser client from the public directory and relays chat
//! messages to a single shared conversation. Replies are broadcast to every
//! connected client.

mod config;
mod error;
mod frames;
mod hub;
mod routes;
mod state;

use std::sync::Arc;

use openai_brain::OpenAiClient;
use orchestrator::{Conversation, Orchestrator};
use tracing::info;
use tracing_subscriber::EnvFilter;
use weather_provider::WeatherClient;

use crate::config::Config;
use crate::hub::{BroadcastObserver, ChatHub};
use crate::state::AppState;

#[tokio::main]
async fn main() -> error::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    // Load configuration; both API keys are required
    let config = Config::from_env()?;
    let completion = OpenAiClient::from_env()?;
    let provider = WeatherClient::from_env()?;

    let hub = ChatHub::default();
    let orchestrator = Orchestrator::new(
        Arc::new(completion),
        agent_tools::default_registry(Arc::new(provider)),
    )
    .with_observer(Arc::new(BroadcastObserver::new(hub.clone())));

    let conversation = Conversation::new(config.system_prompt.clone());
    let state = AppState::new(orchestrator, conversation, hub);
    let app = routes::router(state, &config.public_dir);

    info!(
        addr = %config.addr,
        public_dir = %config.public_dir.display(),
        "Chat server listening"
    );
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
