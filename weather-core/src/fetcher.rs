use async_trait::async_trait;
use std::fmt::Debug;

use crate::{Config, WeatherError, WeatherReport};

pub mod openweather;

pub use openweather::OpenWeatherFetcher;

/// Source of current weather for a city.
///
/// Callers validate the city; implementations accept any non-empty text and
/// perform exactly one upstream request per call.
#[async_trait]
pub trait WeatherFetcher: Send + Sync + Debug {
    async fn fetch_weather(&self, city: &str) -> Result<WeatherReport, WeatherError>;
}

/// Construct the OpenWeather fetcher from config.
pub fn fetcher_from_config(config: &Config) -> Result<Box<dyn WeatherFetcher>, WeatherError> {
    Ok(Box::new(OpenWeatherFetcher::new(config)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetcher_from_config_works_when_key_present() {
        let cfg = Config::with_api_key("KEY");
        assert!(fetcher_from_config(&cfg).is_ok());
    }
}
