//! HTTP client for WeatherAPI.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::api_types::{ApiErrorBody, CurrentResponse, ForecastResponse};
use crate::config::WeatherConfig;
use crate::error::ProviderError;
use crate::types::{CurrentConditions, ForecastDay, Unit, MAX_FORECAST_DAYS};
use crate::WeatherProvider;

/// WeatherAPI-backed [`WeatherProvider`].
///
/// Each lookup issues exactly one GET request. Failures are returned
/// unchanged; there are no retries.
pub struct WeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl WeatherClient {
    /// Create a new client with the given configuration.
    pub fn new(config: WeatherConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| {
                ProviderError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        info!(
            "WeatherClient initialized with api_url: {}, timeout: {:?}",
            config.api_url, config.timeout
        );

        Ok(Self { client, config })
    }

    /// Create a client from environment variables.
    ///
    /// See [`WeatherConfig::from_env`] for required environment variables.
    pub fn from_env() -> Result<Self, ProviderError> {
        Self::new(WeatherConfig::from_env()?)
    }

    /// GET an endpoint and decode the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        debug!("Fetching weather from: {} ({:?})", url, query);

        let response = self
            .client
            .get(url)
            .query(&[("key", self.config.api_key.as_str())])
            .query(query)
            .query(&[("aqi", "no")])
            .send()
            .await
            .map_err(strip_url)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("Weather API returned status {}: {}", status, body);
            return Err(ProviderError::Http {
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(strip_url)?;
        serde_json::from_str(&body).map_err(|e| ProviderError::Decode(e.to_string()))
    }
}

/// Drop the request URL from a transport error; it carries the API key.
fn strip_url(e: reqwest::Error) -> ProviderError {
    ProviderError::Request(e.without_url())
}

fn api_error(error: ApiErrorBody) -> ProviderError {
    let message = match error.code {
        Some(code) => format!("{} (code {})", error.message, code),
        None => error.message,
    };
    ProviderError::Api { message }
}

fn validate_location(location: &str) -> Result<&str, ProviderError> {
    let location = location.trim();
    if location.is_empty() {
        return Err(ProviderError::InvalidInput(
            "location must not be empty".to_string(),
        ));
    }
    Ok(location)
}

fn validate_days(days: u32) -> Result<u32, ProviderError> {
    if days == 0 || days > MAX_FORECAST_DAYS {
        return Err(ProviderError::InvalidInput(format!(
            "days must be between 1 and {}, got {}",
            MAX_FORECAST_DAYS, days
        )));
    }
    Ok(days)
}

#[async_trait]
impl WeatherProvider for WeatherClient {
    async fn current_conditions(
        &self,
        location: &str,
        unit: Unit,
    ) -> Result<CurrentConditions, ProviderError> {
        let location = validate_location(location)?;
        debug!("Getting current weather for '{}' ({})", location, unit);

        let response: CurrentResponse = self
            .get_json(&self.config.current_url(), &[("q", location.to_string())])
            .await?;

        if let Some(error) = response.error {
            return Err(api_error(error));
        }

        match (response.location, response.current) {
            (Some(resolved), Some(current)) => {
                Ok(CurrentConditions::from_api(resolved.name, &current, unit))
            }
            _ => Err(ProviderError::MissingData {
                location: location.to_string(),
            }),
        }
    }

    async fn forecast(
        &self,
        location: &str,
        unit: Unit,
        days: u32,
    ) -> Result<Vec<ForecastDay>, ProviderError> {
        let location = validate_location(location)?;
        let days = validate_days(days)?;
        debug!(
            "Getting {}-day forecast for '{}' ({})",
            days, location, unit
        );

        let response: ForecastResponse = self
            .get_json(
                &self.config.forecast_url(),
                &[("q", location.to_string()), ("days", days.to_string())],
            )
            .await?;

        if let Some(error) = response.error {
            return Err(api_error(error));
        }

        let days = response
            .forecast
            .and_then(|forecast| forecast.forecastday)
            .ok_or_else(|| ProviderError::MissingData {
                location: location.to_string(),
            })?;

        Ok(days
            .iter()
            .map(|day| ForecastDay::from_api(day, unit))
            .collect())
    }
}
