use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cityweather_core::{
    Config, Submission, SubmissionHandler,
    provider::service_from_config,
};
use inquire::{InquireError, Text};
use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};
use tracing::{debug, warn};

use crate::terminal::{TerminalPresenter, print_banner};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "cityweather", version, about = "Current weather for a city")]
pub struct Cli {
    /// Use this config file instead of the platform default.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show current weather for a city.
    Show {
        /// City name; several words are joined with spaces.
        #[arg(required = true, num_args = 1..)]
        city: Vec<String>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Prompt for cities until Esc or Ctrl-C.
    Interactive,

    /// Configure endpoints and request timeout.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<ExitCode> {
        let Cli { config: config_path, command } = self;
        let path = config_path.as_deref();

        match command {
            Command::Show { city, json } => show(&load_config(path)?, &city.join(" "), json).await,
            Command::Interactive => interactive(&load_config(path)?).await,
            Command::Configure => configure(config_for_configure(path), path),
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    debug!(?config, "configuration loaded");
    Ok(config)
}

/// `configure` must still run when the existing file is broken, since it is how the file gets fixed.
fn config_for_configure(path: Option<&Path>) -> Config {
    load_config(path).unwrap_or_else(|e| {
        warn!("ignoring unreadable configuration, starting from defaults: {e:#}");
        Config::default()
    })
}

async fn show(config: &Config, city: &str, json: bool) -> Result<ExitCode> {
    let handler = SubmissionHandler::new(service_from_config(config)?);
    let presenter = TerminalPresenter::new(json);

    Ok(exit_code(&handler.submit(&presenter, city).await))
}

async fn interactive(config: &Config) -> Result<ExitCode> {
    let handler = SubmissionHandler::new(service_from_config(config)?);
    let presenter = TerminalPresenter::new(false);

    print_banner();

    loop {
        let city = match Text::new("City:").with_help_message("Esc to quit").prompt() {
            Ok(city) => city,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e).context("Failed to read city"),
        };

        handler.submit(&presenter, &city).await;
    }

    Ok(ExitCode::SUCCESS)
}

fn configure(config: Config, path: Option<&Path>) -> Result<ExitCode> {
    let geocoding_url = Text::new("Geocoding endpoint:")
        .with_default(&config.geocoding_url)
        .prompt()?;
    let forecast_url = Text::new("Forecast endpoint:")
        .with_default(&config.forecast_url)
        .prompt()?;

    let current_timeout = config.timeout_secs.map(|s| s.to_string()).unwrap_or_default();
    let timeout = Text::new("Request timeout in seconds:")
        .with_default(&current_timeout)
        .with_help_message("leave empty to wait indefinitely")
        .prompt()?;

    let updated = Config {
        geocoding_url: geocoding_url.trim().to_string(),
        forecast_url: forecast_url.trim().to_string(),
        timeout_secs: parse_timeout(&timeout)?,
    };
    updated.validate()?;

    let saved = match path {
        Some(path) => {
            updated.save_to(path)?;
            path.to_path_buf()
        }
        None => updated.save()?,
    };

    println!("Saved configuration to {}", saved.display());
    Ok(ExitCode::SUCCESS)
}

fn parse_timeout(input: &str) -> Result<Option<u64>> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }

    let secs = input
        .parse::<u64>()
        .with_context(|| format!("Invalid timeout '{input}': expected whole seconds"))?;
    Ok(Some(secs))
}

fn exit_code(outcome: &Submission) -> ExitCode {
    match outcome {
        Submission::Rendered(_) => ExitCode::SUCCESS,
        Submission::Failed(_) => ExitCode::from(1),
        Submission::Ignored => ExitCode::from(2),
    }
}
