//! WeatherAPI client for the weather chat bot.
//!
//! This crate fetches current conditions and multi-day forecasts from
//! [WeatherAPI](https://www.weatherapi.com/) and normalizes them into the
//! records that are handed back to the model as tool results.
//!
//! # Example
//!
//! ```rust,no_run
//! use weather_provider::{Unit, WeatherClient, WeatherProvider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WeatherClient::from_env()?;
//!     let now = client.current_conditions("Paris", Unit::Metric).await?;
//!     println!("{}", serde_json::to_string(&now)?);
//!     Ok(())
//! }
//! ```

mod api_types;
mod client;
mod config;
mod error;
mod types;

pub use client::WeatherClient;
pub use config::{WeatherConfig, WeatherConfigBuilder};
pub use error::ProviderError;
pub use types::{CurrentConditions, ForecastDay, Unit, MAX_FORECAST_DAYS};

// Re-export async_trait for convenience
pub use async_trait::async_trait;

/// A source of weather data.
///
/// [`WeatherClient`] is the production implementation; tools depend on this
/// trait so they can be exercised against a fake.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current conditions at `location`, in the requested unit system.
    async fn current_conditions(
        &self,
        location: &str,
        unit: Unit,
    ) -> Result<CurrentConditions, ProviderError>;

    /// Per-day forecast for the next `days` days, in provider order.
    async fn forecast(
        &self,
        location: &str,
        unit: Unit,
        days: u32,
    ) -> Result<Vec<ForecastDay>, ProviderError>;
}
