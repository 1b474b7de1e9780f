//! Turns reports and error notices into region content.
//!
//! The weather block and the error text are mutually exclusive: every render
//! path writes one and clears the other.

use chrono::{DateTime, FixedOffset};
use std::fmt;
use tracing::debug;

use crate::{
    ErrorNotice, WeatherReport,
    surface::{Content, Region, Surface},
};

/// Display-ready form of a [`WeatherReport`].
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherView {
    pub location: String,
    pub country: Option<String>,
    /// e.g. `27°C`
    pub temperature: String,
    /// e.g. `80%`
    pub humidity: String,
    pub conditions: String,
    /// Optional extra lines as (label, value).
    pub details: Vec<(&'static str, String)>,
}

impl WeatherView {
    pub fn from_report(report: &WeatherReport) -> Self {
        let mut details = Vec::new();

        if let Some(feels_like) = report.feels_like_celsius() {
            details.push(("Feels like", format!("{feels_like}°C")));
        }
        if let Some(wind) = &report.wind {
            details.push(("Wind", format!("{:.1} m/s", wind.speed)));
        }

        let offset = report.timezone.and_then(FixedOffset::east_opt);
        if let Some(sys) = &report.sys {
            if let Some(sunrise) = sys.sunrise.and_then(|ts| local_clock(ts, offset)) {
                details.push(("Sunrise", sunrise));
            }
            if let Some(sunset) = sys.sunset.and_then(|ts| local_clock(ts, offset)) {
                details.push(("Sunset", sunset));
            }
        }

        Self {
            location: report.name.clone(),
            country: report.sys.as_ref().and_then(|sys| sys.country.clone()),
            temperature: format!("{}°C", report.temperature_celsius()),
            humidity: format!("{}%", report.main.humidity),
            conditions: report.condition().to_string(),
            details,
        }
    }
}

impl fmt::Display for WeatherView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.country {
            Some(country) => writeln!(f, "{}, {country}", self.location)?,
            None => writeln!(f, "{}", self.location)?,
        }
        writeln!(f, "Temperature: {}", self.temperature)?;
        writeln!(f, "Humidity: {}", self.humidity)?;
        write!(f, "Conditions: {}", self.conditions)?;

        for (label, value) in &self.details {
            write!(f, "\n{label}: {value}")?;
        }

        Ok(())
    }
}

/// `HH:MM` at the location, or UTC when the offset is unknown.
fn local_clock(ts: i64, offset: Option<FixedOffset>) -> Option<String> {
    let utc = DateTime::from_timestamp(ts, 0)?;

    Some(match offset {
        Some(offset) => utc.with_timezone(&offset).format("%H:%M").to_string(),
        None => utc.format("%H:%M UTC").to_string(),
    })
}

/// Writes lookup outcomes into a [`Surface`].
#[derive(Debug)]
pub struct Renderer<S> {
    surface: S,
}

impl<S: Surface> Renderer<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Shows the weather block and hides any error. No-op without a weather region.
    pub fn display_weather(&self, report: &WeatherReport) {
        if !self.surface.has_region(Region::WeatherDisplay) {
            return;
        }

        let view = WeatherView::from_report(report);
        debug!(location = %view.location, temperature = %view.temperature, "Rendering weather");

        self.surface.write(Region::WeatherDisplay, Content::Weather(view));
        self.clear_error();
    }

    /// Shows `message` as plain text and clears the weather block. No-op without an error region.
    pub fn display_error(&self, message: &str) {
        if !self.surface.has_region(Region::ErrorMessage) {
            return;
        }

        debug!(%message, "Rendering error");

        self.surface.write(Region::ErrorMessage, Content::Text(message.to_string()));
        self.surface.set_hidden(Region::ErrorMessage, false);
        self.surface.write(Region::WeatherDisplay, Content::Empty);
    }

    pub fn display_notice(&self, notice: &ErrorNotice) {
        self.display_error(notice.message());
    }

    /// Placeholder while a lookup is in flight.
    ///
    /// Skipped unless both regions exist: a failed lookup replaces the
    /// placeholder through the error path, which needs the error region.
    pub fn display_loading(&self, city: &str) {
        if !self.surface.has_region(Region::WeatherDisplay)
            || !self.surface.has_region(Region::ErrorMessage)
        {
            return;
        }

        self.surface.write(
            Region::WeatherDisplay,
            Content::Text(format!("Loading weather for {city}...")),
        );
        self.clear_error();
    }

    fn clear_error(&self) {
        if self.surface.has_region(Region::ErrorMessage) {
            self.surface.set_hidden(Region::ErrorMessage, true);
            self.surface.write(Region::ErrorMessage, Content::Empty);
        }
    }
}
