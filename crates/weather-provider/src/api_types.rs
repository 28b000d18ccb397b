//! WeatherAPI response types.
//!
//! Only the fields the normalizer reads are modelled. Sections are optional
//! so a missing section surfaces as [`ProviderError::MissingData`] rather
//! than a decode failure.
//!
//! [`ProviderError::MissingData`]: crate::ProviderError::MissingData

use serde::Deserialize;

/// Response from `/v1/current.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentResponse {
    pub location: Option<ApiLocation>,
    pub current: Option<ApiCurrent>,
    pub error: Option<ApiErrorBody>,
}

/// Response from `/v1/forecast.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub forecast: Option<ApiForecast>,
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiLocation {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiCurrent {
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: ApiCondition,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiCondition {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiForecast {
    pub forecastday: Option<Vec<ApiForecastDay>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiForecastDay {
    pub date: String,
    pub day: ApiDay,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiDay {
    pub avgtemp_c: f64,
    pub avgtemp_f: f64,
    pub condition: ApiCondition,
}

/// Error object embedded in a response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<i64>,
    pub message: String,
}
