use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::WeatherError;

/// Offset between the Kelvin and Celsius scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// A single lookup request, built from what the user typed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherQuery {
    city: String,
}

impl WeatherQuery {
    /// Trims the raw input and rejects it when nothing is left.
    pub fn new(raw: &str) -> Result<Self, WeatherError> {
        let city = raw.trim();
        if city.is_empty() {
            return Err(WeatherError::Validation);
        }

        Ok(Self { city: city.to_string() })
    }

    pub fn city(&self) -> &str {
        &self.city
    }
}

/// Current conditions as returned by the OpenWeather `weather` endpoint.
///
/// `name`, `main.temp`, `main.humidity` and the `weather` list are required;
/// everything else is rendered when present and skipped otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub name: String,
    pub main: MainReadings,
    pub weather: Vec<Condition>,
    #[serde(default)]
    pub wind: Option<Wind>,
    #[serde(default)]
    pub sys: Option<SunCycle>,
    /// Shift from UTC in seconds for the reported location.
    #[serde(default)]
    pub timezone: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MainReadings {
    /// Kelvin.
    pub temp: f64,
    /// Kelvin.
    #[serde(default)]
    pub feels_like: Option<f64>,
    /// Percent.
    pub humidity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wind {
    /// Metres per second.
    pub speed: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunCycle {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub sunrise: Option<i64>,
    #[serde(default)]
    pub sunset: Option<i64>,
}

impl WeatherReport {
    pub fn temperature_celsius(&self) -> i64 {
        kelvin_to_celsius(self.main.temp)
    }

    pub fn feels_like_celsius(&self) -> Option<i64> {
        self.main.feels_like.map(kelvin_to_celsius)
    }

    /// Description of the first reported condition.
    pub fn condition(&self) -> &str {
        self.weather
            .first()
            .map(|w| w.description.as_str())
            .unwrap_or("Unknown")
    }
}

/// Whole degrees Celsius, halves rounded up (-3.5 becomes -3).
pub fn kelvin_to_celsius(kelvin: f64) -> i64 {
    let celsius = (kelvin - KELVIN_OFFSET + 0.5).floor();
    // `-0.0` casts to a plain zero.
    celsius as i64
}

/// The message shown in the error region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorNotice {
    message: String,
}

impl ErrorNotice {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&WeatherError> for ErrorNotice {
    fn from(err: &WeatherError) -> Self {
        Self::new(err.to_string())
    }
}

impl fmt::Display for ErrorNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_trims_surrounding_whitespace() {
        let query = WeatherQuery::new("  London \n").expect("non-empty city");
        assert_eq!(query.city(), "London");
    }

    #[test]
    fn query_rejects_blank_input() {
        for raw in ["", "   ", "\t\n"] {
            let err = WeatherQuery::new(raw).unwrap_err();
            assert!(matches!(err, WeatherError::Validation));
        }
    }

    #[test]
    fn kelvin_conversion_rounds() {
        assert_eq!(kelvin_to_celsius(300.15), 27);
        assert_eq!(kelvin_to_celsius(273.15), 0);
        assert_eq!(kelvin_to_celsius(273.0), 0);
        assert_eq!(kelvin_to_celsius(263.15), -10);
        assert_eq!(kelvin_to_celsius(295.72), 23);
    }

    #[test]
    fn kelvin_conversion_rounds_negative_halves_up() {
        assert_eq!(kelvin_to_celsius(269.65), -3);
        assert_eq!(kelvin_to_celsius(263.65), -9);
        assert_eq!(kelvin_to_celsius(260.65), -12);
        assert_eq!(kelvin_to_celsius(276.65), 4);
    }

    #[test]
    fn report_parses_minimal_body() {
        let body = r#"{
            "name": "London",
            "main": { "temp": 300.15, "humidity": 80 },
            "weather": [{ "description": "clear sky" }]
        }"#;

        let report: WeatherReport = serde_json::from_str(body).expect("valid body");

        assert_eq!(report.name, "London");
        assert_eq!(report.temperature_celsius(), 27);
        assert_eq!(report.main.humidity, 80.0);
        assert_eq!(report.condition(), "clear sky");
        assert!(report.wind.is_none());
        assert!(report.sys.is_none());
    }

    #[test]
    fn report_without_conditions_is_unknown() {
        let body = r#"{ "name": "Nowhere", "main": { "temp": 280.0, "humidity": 10 }, "weather": [] }"#;
        let report: WeatherReport = serde_json::from_str(body).expect("valid body");

        assert_eq!(report.condition(), "Unknown");
    }

    #[test]
    fn report_requires_weather_list() {
        let body = r#"{ "name": "London", "main": { "temp": 300.15, "humidity": 80 } }"#;
        assert!(serde_json::from_str::<WeatherReport>(body).is_err());
    }

    #[test]
    fn report_requires_main_block() {
        let body = r#"{ "name": "London", "weather": [] }"#;
        assert!(serde_json::from_str::<WeatherReport>(body).is_err());
    }

    #[test]
    fn notice_from_error_uses_display_text() {
        let notice = ErrorNotice::from(&WeatherError::Lookup { status: 404 });
        assert_eq!(notice.message(), "City not found");
        assert_eq!(notice.to_string(), "City not found");
    }
}
