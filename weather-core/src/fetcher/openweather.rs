use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use tracing::{debug, instrument, warn};

use crate::{Config, WeatherError, WeatherReport};

use super::WeatherFetcher;

#[derive(Debug, Clone)]
pub struct OpenWeatherFetcher {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherFetcher {
    /// Fails with [`WeatherError::MissingApiKey`] when no credential is available.
    pub fn new(config: &Config) -> Result<Self, WeatherError> {
        let api_key = config.api_key()?.to_owned();

        Ok(Self {
            api_key,
            base_url: config.base_url.clone(),
            http: Client::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, city: &str) -> RequestBuilder {
        self.http
            .get(&self.base_url)
            .query(&[("q", city), ("appid", self.api_key.as_str())])
    }
}

#[async_trait]
impl WeatherFetcher for OpenWeatherFetcher {
    #[instrument(skip(self), fields(endpoint = %self.base_url))]
    async fn fetch_weather(&self, city: &str) -> Result<WeatherReport, WeatherError> {
        debug!("Requesting current weather");

        let res = self
            .request(city)
            .send()
            .await
            .map_err(WeatherError::Transport)?;

        let status = res.status();
        if !status.is_success() {
            // The error body is never parsed; the status is all the caller gets.
            warn!(%status, "OpenWeather lookup failed");
            return Err(WeatherError::Lookup { status: status.as_u16() });
        }

        let body = res.bytes().await.map_err(WeatherError::Transport)?;
        let report: WeatherReport = serde_json::from_slice(&body).map_err(WeatherError::Parse)?;

        debug!(location = %report.name, "Parsed weather report");
        Ok(report)
    }
}
