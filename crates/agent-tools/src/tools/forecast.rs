//! N-day forecast tool backed by a [`WeatherProvider`].

use std::sync::Arc;

use async_trait::async_trait;
use chat_core::{ParameterSpec, ToolDeclaration};
use tracing::{debug, warn};
use weather_provider::WeatherProvider;

use super::{unit_arg, LOCATION_DESCRIPTION, UNIT_VALUES};
use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Multi-day forecast for a location.
///
/// All three parameters are required: `location`, `unit` ("celsius" or
/// "fahrenheit") and `num_days`. The output is a JSON array with one record
/// per day, in the provider's order.
pub struct WeatherForecast {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherForecast {
    /// Create a new forecast tool.
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for WeatherForecast {
    fn name(&self) -> &str {
        "get_n_day_weather_forecast"
    }

    fn declaration(&self) -> ToolDeclaration {
        ToolDeclaration::new(self.name(), "Get an N-day weather forecast")
            .param(
                ParameterSpec::string("location")
                    .describe(LOCATION_DESCRIPTION)
                    .required(),
            )
            .param(ParameterSpec::one_of("unit", UNIT_VALUES).required())
            .param(
                ParameterSpec::integer("num_days")
                    .describe("The number of days to forecast")
                    .required(),
            )
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let location = args.get_string("location")?;
        let unit = unit_arg(&args);
        let num_days = args.get_integer("num_days")?;
        let days = u32::try_from(num_days).map_err(|_| ToolError::InvalidParameter {
            name: "num_days".to_string(),
            reason: format!("{} is not a positive day count", num_days),
        })?;

        debug!("get_n_day_weather_forecast: {}, {}, {}", location, unit, days);

        match self.provider.forecast(&location, unit, days).await {
            Ok(forecast) => ToolOutput::json(&forecast),
            Err(e) => {
                warn!("Forecast fetch failed: {}", e);
                Err(e.into())
            }
        }
    }
}
