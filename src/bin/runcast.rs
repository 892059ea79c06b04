// ABOUTME: runcast command-line entry point
// ABOUTME: Parses flags, sets up logging and configuration, and prints the selected view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors
//!
//! Usage:
//! ```bash
//! # Current weather in Tokyo
//! runcast
//!
//! # Five-day running forecast for Osaka
//! runcast --city osaka --days 5 --running
//!
//! # Tomorrow morning, scored for a half marathon
//! runcast --city kyoto --date tomorrow --time morning --distance half
//! ```

use std::process::ExitCode;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use runcast::app::{run, RunRequest, MAX_DAYS};
use runcast::config::{ApiConfig, LocationsConfig};
use runcast::errors::{AppError, ErrorCode};
use runcast::logging;
use runcast::providers::OpenMeteoClient;
use tracing::warn;

#[derive(Parser)]
#[command(
    name = "runcast",
    version,
    about = "Weather forecasts and running conditions for Japanese cities",
    long_about = "Shows current weather or forecasts from the Japan Meteorological Agency via Open-Meteo, and scores how suitable conditions are for running."
)]
struct Cli {
    /// City name or custom location key
    #[arg(long, default_value = "tokyo")]
    city: String,

    /// Forecast days (0 shows current conditions only)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=i64::from(MAX_DAYS)))]
    days: u8,

    /// Show running conditions
    #[arg(long)]
    running: bool,

    /// Time of day: morning, noon, evening, night
    #[arg(long)]
    time: Option<String>,

    /// Date: today, tomorrow, day-after-tomorrow
    #[arg(long)]
    date: Option<String>,

    /// Target distance: 5k, 10k, half, full (implies --running)
    #[arg(long)]
    distance: Option<String>,

    /// Skip the air-quality request in running mode
    #[arg(long)]
    no_air_quality: bool,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging::init_from_env(cli.verbose) {
        eprintln!("Failed to initialize logging: {e}");
    }

    match execute(cli).await {
        Ok(text) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(exit_code_for(&e))
        }
    }
}

async fn execute(cli: Cli) -> anyhow::Result<String> {
    let mut request = RunRequest::new(
        &cli.city,
        cli.days,
        cli.running,
        cli.time.as_deref(),
        cli.date.as_deref(),
        cli.distance.as_deref(),
    )?;
    if cli.no_air_quality {
        request = request.without_air_quality();
    }

    let api_config = ApiConfig::from_env().context("Failed to load API configuration")?;
    let locations = LocationsConfig::load().unwrap_or_else(|e| {
        warn!(error = %e, "Ignoring custom locations");
        LocationsConfig::default()
    });

    let provider = OpenMeteoClient::new(api_config);
    let text = run(&provider, &locations, &request, Local::now().naive_local()).await?;
    Ok(text)
}

/// Exit status for a failure, derived from the application error code
fn exit_code_for(error: &anyhow::Error) -> u8 {
    let code = error
        .downcast_ref::<AppError>()
        .map_or(ErrorCode::ConfigError, |app_error| app_error.code);
    u8::try_from(code.exit_code()).unwrap_or(1)
}
