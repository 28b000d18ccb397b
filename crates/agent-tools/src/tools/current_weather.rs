//! Current weather tool backed by a [`WeatherProvider`].

use std::sync::Arc;

use async_trait::async_trait;
use chat_core::{ParameterSpec, ToolDeclaration};
use tracing::{debug, warn};
use weather_provider::WeatherProvider;

use super::{unit_arg, LOCATION_DESCRIPTION, UNIT_VALUES};
use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

/// Current conditions for a location.
///
/// # Parameters
///
/// - `location` (required): City and state, e.g. "San Francisco, CA".
/// - `unit` (optional): "celsius" or "fahrenheit" (default).
///
/// The output is a JSON record:
///
/// ```json
/// {"location": "Paris", "temperature": "18", "unit": "metric", "forecast": ["Clear"]}
/// ```
pub struct CurrentWeather {
    provider: Arc<dyn WeatherProvider>,
}

impl CurrentWeather {
    /// Create a new current weather tool.
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl Tool for CurrentWeather {
    fn name(&self) -> &str {
        "get_current_weather"
    }

    fn declaration(&self) -> ToolDeclaration {
        ToolDeclaration::new(self.name(), "Get the current weather in a given location")
            .param(
                ParameterSpec::string("location")
                    .describe(LOCATION_DESCRIPTION)
                    .required(),
            )
            .param(ParameterSpec::one_of("unit", UNIT_VALUES))
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let location = args.get_string("location")?;
        let unit = unit_arg(&args);

        debug!("get_current_weather: {}, {}", location, unit);

        match self.provider.current_conditions(&location, unit).await {
            Ok(conditions) => ToolOutput::json(&conditions),
            Err(e) => {
                warn!("Current weather fetch failed: {}", e);
                Err(e.into())
            }
        }
    }
}
