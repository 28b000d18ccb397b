//! Configuration for the WeatherAPI client.

use std::env;
use std::time::Duration;

use crate::error::ProviderError;

/// Default WeatherAPI base URL.
pub const DEFAULT_API_URL: &str = "http://api.weatherapi.com";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for [`WeatherClient`](crate::WeatherClient).
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    /// WeatherAPI base URL (without the `/v1` suffix).
    pub api_url: String,

    /// API key sent as the `key` query parameter.
    pub api_key: String,

    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: String::new(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl WeatherConfig {
    /// Create configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `WEATHER_API_KEY` - WeatherAPI key
    ///
    /// Optional environment variables:
    /// - `WEATHER_API_URL` - Base URL (default: http://api.weatherapi.com)
    /// - `WEATHER_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Result<Self, ProviderError> {
        let api_key = env::var("WEATHER_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ProviderError::Configuration("WEATHER_API_KEY not set".to_string()))?;

        let api_url =
            env::var("WEATHER_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let timeout = env::var("WEATHER_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Ok(Self {
            api_url,
            api_key,
            timeout,
        })
    }

    /// Create a new config builder.
    pub fn builder() -> WeatherConfigBuilder {
        WeatherConfigBuilder::default()
    }

    /// URL of the current-conditions endpoint.
    pub fn current_url(&self) -> String {
        format!("{}/v1/current.json", self.api_url.trim_end_matches('/'))
    }

    /// URL of the forecast endpoint.
    pub fn forecast_url(&self) -> String {
        format!("{}/v1/forecast.json", self.api_url.trim_end_matches('/'))
    }
}

/// Builder for WeatherConfig.
#[derive(Debug, Default)]
pub struct WeatherConfigBuilder {
    config: WeatherConfig,
}

impl WeatherConfigBuilder {
    /// Set the API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = key.into();
        self
    }

    /// Set the base URL.
    pub fn api_url(mut self, url: impl Into<String>) -> Self {
        self.config.api_url = url.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> WeatherConfig {
        self.config
    }
}
