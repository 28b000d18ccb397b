//! Normalized weather records returned to the model.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::api_types::{ApiCurrent, ApiForecastDay};

/// Largest forecast window WeatherAPI serves.
pub const MAX_FORECAST_DAYS: u32 = 14;

/// Unit system for temperatures.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Celsius.
    Metric,
    /// Fahrenheit.
    #[default]
    Imperial,
}

impl Unit {
    /// Parse a unit as the model spells it.
    ///
    /// Accepts the tool vocabulary (`celsius`, `fahrenheit`) as well as the
    /// unit-system names.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "celsius" | "metric" => Some(Self::Metric),
            "fahrenheit" | "imperial" => Some(Self::Imperial),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    pub(crate) fn pick(&self, celsius: f64, fahrenheit: f64) -> f64 {
        match self {
            Self::Metric => celsius,
            Self::Imperial => fahrenheit,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current conditions at a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Location name as resolved by the provider.
    pub location: String,
    /// Temperature rendered as text ("18", "64.4").
    pub temperature: String,
    pub unit: Unit,
    /// Condition descriptions (a single entry for current conditions).
    pub forecast: Vec<String>,
}

impl CurrentConditions {
    pub(crate) fn from_api(location: String, current: &ApiCurrent, unit: Unit) -> Self {
        let temperature = unit.pick(current.temp_c, current.temp_f);
        Self {
            location,
            temperature: temperature.to_string(),
            unit,
            forecast: vec![current.condition.text.clone()],
        }
    }
}

/// One day of a forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    /// Date as `YYYY-MM-DD`.
    pub date: String,
    /// Average temperature for the day.
    pub temperature: f64,
    pub unit: Unit,
    /// Condition description.
    pub forecast: String,
}

impl ForecastDay {
    pub(crate) fn from_api(day: &ApiForecastDay, unit: Unit) -> Self {
        Self {
            date: day.date.clone(),
            temperature: unit.pick(day.day.avgtemp_c, day.day.avgtemp_f),
            unit,
            forecast: day.day.condition.text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api_types::ApiCondition;

    #[test]
    fn test_unit_parse() {
        assert_eq!(Unit::parse("celsius"), Some(Unit::Metric));
        assert_eq!(Unit::parse("Fahrenheit"), Some(Unit::Imperial));
        assert_eq!(Unit::parse("metric"), Some(Unit::Metric));
        assert_eq!(Unit::parse("kelvin"), None);
        assert_eq!(Unit::default(), Unit::Imperial);
    }

    #[test]
    fn test_current_conditions_serialization() {
        let current = ApiCurrent {
            temp_c: 18.0,
            temp_f: 64.4,
            condition: ApiCondition {
                text: "Clear".to_string(),
            },
        };

        let metric = CurrentConditions::from_api("Paris".to_string(), &current, Unit::Metric);
        assert_eq!(
            serde_json::to_value(&metric).unwrap(),
            serde_json::json!({
                "location": "Paris",
                "temperature": "18",
                "unit": "metric",
                "forecast": ["Clear"],
            })
        );

        let imperial = CurrentConditions::from_api("Paris".to_string(), &current, Unit::Imperial);
        assert_eq!(imperial.temperature, "64.4");
        assert_eq!(imperial.unit, Unit::Imperial);
    }
}
