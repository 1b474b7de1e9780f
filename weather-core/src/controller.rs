//! Binds the fetch trigger to the fetch → render pipeline.

use tracing::{info, instrument, warn};

use crate::{
    ErrorNotice, WeatherError, WeatherQuery,
    fetcher::WeatherFetcher,
    render::Renderer,
    surface::{Region, Surface},
};

#[derive(Debug)]
pub struct Controller<S> {
    fetcher: Box<dyn WeatherFetcher>,
    renderer: Renderer<S>,
}

impl<S: Surface> Controller<S> {
    /// Installs the binding. Returns `None` when the surface has no trigger to bind to.
    pub fn bind(fetcher: Box<dyn WeatherFetcher>, renderer: Renderer<S>) -> Option<Self> {
        if !renderer.surface().has_region(Region::FetchTrigger) {
            return None;
        }

        Some(Self { fetcher, renderer })
    }

    pub fn renderer(&self) -> &Renderer<S> {
        &self.renderer
    }

    /// Handles one trigger activation.
    ///
    /// The outcome is always rendered before returning; the result only tells
    /// the caller which path was taken. Overlapping calls are not coordinated,
    /// the last one to finish owns the regions.
    #[instrument(skip(self))]
    pub async fn activate(&self) -> Result<(), WeatherError> {
        let raw = self.renderer.surface().input_value().unwrap_or_default();

        let outcome = match WeatherQuery::new(&raw) {
            Ok(query) => self.lookup(&query).await,
            Err(err) => Err(err),
        };

        if let Err(err) = &outcome {
            self.renderer.display_notice(&ErrorNotice::from(err));
        }

        outcome
    }

    async fn lookup(&self, query: &WeatherQuery) -> Result<(), WeatherError> {
        self.renderer.display_loading(query.city());

        match self.fetcher.fetch_weather(query.city()).await {
            Ok(report) => {
                info!(city = query.city(), location = %report.name, "Weather lookup succeeded");
                self.renderer.display_weather(&report);
                Ok(())
            }
            Err(err) => {
                warn!(city = query.city(), error = %err, "Weather lookup failed");
                Err(err)
            }
        }
    }
}
