//! Configuration loaded from environment variables.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Default bind address.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Default directory for static assets, independent of the working directory.
pub const DEFAULT_PUBLIC_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/public");

/// Default system prompt seeded into the conversation.
pub const DEFAULT_SYSTEM_PROMPT: &str = "Don't make assumptions about what values to plug into functions. Ask for clarification if a user request is ambiguous.";

/// Chat server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address.
    pub addr: SocketAddr,
    /// Directory served for non-API paths.
    pub public_dir: PathBuf,
    /// System prompt for the shared conversation.
    pub system_prompt: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `CHAT_ADDR` | Server bind address | `127.0.0.1:3000` |
    /// | `CHAT_PUBLIC_DIR` | Static asset directory | this crate's `public/` |
    /// | `CHAT_SYSTEM_PROMPT` | System prompt | see [`DEFAULT_SYSTEM_PROMPT`] |
    ///
    /// The OpenAI and WeatherAPI keys are read by their own clients.
    pub fn from_env() -> Result<Self, ConfigError> {
        let addr = env::var("CHAT_ADDR")
            .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidAddr)?;

        let public_dir = env::var("CHAT_PUBLIC_DIR")
            .unwrap_or_else(|_| DEFAULT_PUBLIC_DIR.to_string())
            .into();

        let system_prompt = env::var("CHAT_SYSTEM_PROMPT")
            .ok()
            .filter(|prompt| !prompt.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SYSTEM_PROMPT.to_string());

        Ok(Self {
            addr,
            public_dir,
            system_prompt,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid CHAT_ADDR format")]
    InvalidAddr,
}
