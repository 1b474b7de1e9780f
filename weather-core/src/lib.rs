//! Core library for the city weather lookup widget.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather fetcher
//! - A rendering-surface abstraction and the renderer that writes into it
//! - The controller that ties a trigger to fetch → render
//!
//! It is used by `weather-cli`, but can also be embedded behind any other surface.

pub mod config;
pub mod controller;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod render;
pub mod surface;

pub use config::Config;
pub use controller::Controller;
pub use error::WeatherError;
pub use fetcher::{OpenWeatherFetcher, WeatherFetcher, fetcher_from_config};
pub use model::{ErrorNotice, WeatherQuery, WeatherReport};
pub use render::{Renderer, WeatherView};
pub use surface::{Content, MemorySurface, Region, Surface};
