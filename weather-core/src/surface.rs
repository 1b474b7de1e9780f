//! The rendering surface the widget draws into.
//!
//! A surface is a set of named regions. The renderer never assumes a region
//! exists: it asks first and skips the write when the answer is no.

use std::{fmt, sync::Arc};

use crate::render::WeatherView;

pub mod memory;

pub use memory::MemorySurface;

/// Named regions of the widget markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Text field holding the city name.
    CityInput,
    /// Control that starts a lookup.
    FetchTrigger,
    /// Where the weather block goes.
    WeatherDisplay,
    /// Where error text goes. Supports hiding.
    ErrorMessage,
}

impl Region {
    pub fn id(&self) -> &'static str {
        match self {
            Region::CityInput => "city-input",
            Region::FetchTrigger => "fetch-weather",
            Region::WeatherDisplay => "weather-display",
            Region::ErrorMessage => "error-message",
        }
    }

    pub const fn all() -> &'static [Region] {
        &[
            Region::CityInput,
            Region::FetchTrigger,
            Region::WeatherDisplay,
            Region::ErrorMessage,
        ]
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// What a region currently shows.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Content {
    #[default]
    Empty,
    /// Plain text, never interpreted as markup.
    Text(String),
    Weather(WeatherView),
}

impl Content {
    pub fn is_empty(&self) -> bool {
        matches!(self, Content::Empty)
    }
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Empty => Ok(()),
            Content::Text(text) => f.write_str(text),
            Content::Weather(view) => fmt::Display::fmt(view, f),
        }
    }
}

/// Handle to the regions of a rendered page.
///
/// Methods take `&self`; implementations keep their own interior mutability
/// so one surface can be shared between the renderer and whoever owns the page.
pub trait Surface: Send + Sync {
    fn has_region(&self, region: Region) -> bool;

    /// Current text of the city input, `None` when the page has no input.
    fn input_value(&self) -> Option<String>;

    /// Replace a region's content. Writes to absent regions are ignored.
    fn write(&self, region: Region, content: Content);

    fn set_hidden(&self, region: Region, hidden: bool);
}

impl<S: Surface + ?Sized> Surface for Arc<S> {
    fn has_region(&self, region: Region) -> bool {
        (**self).has_region(region)
    }

    fn input_value(&self) -> Option<String> {
        (**self).input_value()
    }

    fn write(&self, region: Region, content: Content) {
        (**self).write(region, content)
    }

    fn set_hidden(&self, region: Region, hidden: bool) {
        (**self).set_hidden(region, hidden)
    }
}
