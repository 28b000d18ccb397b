//! Built-in tool implementations.

mod current_weather;
mod forecast;

pub use current_weather::CurrentWeather;
pub use forecast::WeatherForecast;

use weather_provider::Unit;

use crate::tool::ToolArgs;

/// Unit values as the model spells them.
pub(crate) const UNIT_VALUES: [&str; 2] = ["celsius", "fahrenheit"];

/// Location description shared by both weather tools.
pub(crate) const LOCATION_DESCRIPTION: &str = "The city and state, e.g., San Francisco, CA";

/// Read the optional `unit` argument, defaulting to imperial.
pub(crate) fn unit_arg(args: &ToolArgs) -> Unit {
    args.get_string_opt("unit")
        .and_then(|u| Unit::parse(&u))
        .unwrap_or_default()
}
