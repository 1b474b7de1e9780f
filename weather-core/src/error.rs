use thiserror::Error;

/// Everything that can go wrong between reading the city input and rendering a report.
///
/// The `Display` text of each variant is what ends up in the error region, so
/// it is written for the person looking at the widget, not for a log file.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// The city input was empty after trimming. Raised before any network activity.
    #[error("Please enter a city name")]
    Validation,

    /// Upstream answered with a non-success status (unknown city, bad key, ...).
    #[error("City not found")]
    Lookup { status: u16 },

    /// The request never produced a response.
    #[error("Failed to fetch weather data")]
    Transport(#[source] reqwest::Error),

    /// A success response whose body could not be read as a weather report.
    #[error("Unable to read weather data")]
    Parse(#[source] serde_json::Error),

    #[error(
        "No OpenWeather API key configured.\n\
         Hint: run `weather configure` and enter your API key."
    )]
    MissingApiKey,
}

impl WeatherError {
    /// Upstream HTTP status for lookup failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            WeatherError::Lookup { status } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_facing_messages() {
        assert_eq!(WeatherError::Validation.to_string(), "Please enter a city name");
        assert_eq!(WeatherError::Lookup { status: 404 }.to_string(), "City not found");
    }

    #[test]
    fn parse_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = WeatherError::Parse(source);

        assert_eq!(err.to_string(), "Unable to read weather data");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn status_only_for_lookup_failures() {
        assert_eq!(WeatherError::Lookup { status: 401 }.status(), Some(401));
        assert_eq!(WeatherError::Validation.status(), None);
    }

    #[test]
    fn missing_key_points_at_configure() {
        let msg = WeatherError::MissingApiKey.to_string();
        assert!(msg.contains("Hint: run `weather configure`"));
    }
}
