use anyhow::{Context, anyhow, bail};
use clap::{Parser, Subcommand};
use inquire::{InquireError, Password, Text};
use std::{process::ExitCode, sync::Arc};
use tracing::debug;
use weather_core::{Config, Controller, Renderer, fetcher_from_config};

use crate::terminal::TerminalSurface;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather", version, about = "Current weather for a city")]
pub struct Cli {
    /// Without a subcommand, prompts for cities until Esc or Ctrl-C.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show current weather for a city.
    Show {
        /// City name, e.g. "London" or "Paris,FR".
        city: String,
    },
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<ExitCode> {
        match self.command {
            Some(Command::Configure) => configure(),
            Some(Command::Show { city }) => show(&city).await,
            None => prompt_loop().await,
        }
    }
}

fn configure() -> anyhow::Result<ExitCode> {
    let mut config = Config::load()?;

    let api_key = Password::new("OpenWeather API key:")
        .without_confirmation()
        .prompt()
        .context("Failed to read API key")?;

    let api_key = api_key.trim();
    if api_key.is_empty() {
        bail!("API key must not be empty");
    }

    config.set_api_key(api_key.to_string());
    let path = config.save()?;
    println!("Saved API key to {}", path.display());

    Ok(ExitCode::SUCCESS)
}

async fn show(city: &str) -> anyhow::Result<ExitCode> {
    let surface = Arc::new(TerminalSurface::stdio());
    let controller = controller(Arc::clone(&surface))?;

    surface.set_input(city);
    match controller.activate().await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        // Already rendered to the error region.
        Err(_) => Ok(ExitCode::FAILURE),
    }
}

async fn prompt_loop() -> anyhow::Result<ExitCode> {
    let surface = Arc::new(TerminalSurface::stdio());
    let controller = controller(Arc::clone(&surface))?;

    loop {
        let city = match Text::new("City:").prompt() {
            Ok(city) => city,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(err) => return Err(err).context("Failed to read city"),
        };

        surface.set_input(city);
        if let Err(err) = controller.activate().await {
            debug!(error = %err, "Lookup ended with an error");
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn controller(surface: Arc<TerminalSurface>) -> anyhow::Result<Controller<Arc<TerminalSurface>>> {
    let config = Config::load()?;
    let fetcher = fetcher_from_config(&config)?;

    Controller::bind(fetcher, Renderer::new(surface))
        .ok_or_else(|| anyhow!("Terminal surface has no fetch trigger"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_prompt() {
        let cli = Cli::try_parse_from(["weather"]).expect("valid args");
        assert!(cli.command.is_none());
    }

    #[test]
    fn show_takes_city() {
        let cli = Cli::try_parse_from(["weather", "show", "New York"]).expect("valid args");

        match cli.command {
            Some(Command::Show { city }) => assert_eq!(city, "New York"),
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn show_requires_city() {
        assert!(Cli::try_parse_from(["weather", "show"]).is_err());
    }
}
