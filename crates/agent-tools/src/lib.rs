//! Tool registry and weather tools for the weather chat bot.
//!
//! This crate provides a [`ToolRegistry`] holding the tools the model may
//! call. Each tool carries a static [`ToolDeclaration`] (name, description,
//! parameter schema); the registry hands the declarations to the chat
//! client, validates the model's arguments against them, and dispatches
//! validated calls by name.
//!
//! # Built-in Tools
//!
//! - [`CurrentWeather`] - `get_current_weather`, current conditions for a location.
//! - [`WeatherForecast`] - `get_n_day_weather_forecast`, an N-day forecast.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use agent_tools::default_registry;
//! use weather_provider::WeatherClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let registry = default_registry(Arc::new(WeatherClient::from_env()?));
//!
//!     let args = registry.validate_args("get_current_weather", r#"{"location": "Paris"}"#)?;
//!     let output = registry.execute("get_current_weather", args).await?;
//!     println!("{}", output.content);
//!     Ok(())
//! }
//! ```

mod error;
mod registry;
mod tool;
pub mod tools;

use std::sync::Arc;

pub use chat_core::{ParameterKind, ParameterSpec, ToolDeclaration};
pub use error::ToolError;
pub use registry::ToolRegistry;
pub use tool::{Tool, ToolArgs, ToolOutput};
pub use tools::{CurrentWeather, WeatherForecast};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

use weather_provider::WeatherProvider;

/// Create a registry with both weather tools registered.
///
/// Declarations are listed in registration order: current conditions
/// first, then the forecast.
pub fn default_registry(provider: Arc<dyn WeatherProvider>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();

    registry.register(CurrentWeather::new(provider.clone()));
    registry.register(WeatherForecast::new(provider));

    registry
}
