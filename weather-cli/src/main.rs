//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive city prompt and configuration
//! - Printing the widget's regions to the terminal

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod terminal;

/// Log filter used when `RUST_LOG` is unset. Lookup failures already reach the
/// error region, so `warn!` events stay hidden by default.
const DEFAULT_LOG_FILTER: &str = "error";

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Diagnostics go to stderr and stay quiet unless RUST_LOG asks for more.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_hides_lookup_warnings() {
        assert_eq!(DEFAULT_LOG_FILTER, "error");
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
    }
}
