// ABOUTME: Main library entry point for the runcast weather and running CLI
// ABOUTME: Wires configuration, locations, the Open-Meteo provider, and terminal views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

#![deny(unsafe_code)]

//! # Runcast
//!
//! Weather forecasts for runners. Fetches Japan Meteorological Agency
//! forecasts and particulate air quality from Open-Meteo, scores how
//! suitable each hour or day is for a run, and prints the result.
//!
//! ## Architecture
//!
//! - **`runcast_core`**: payload models, weather codes, and errors
//! - **`runcast_intelligence`**: scoring engine and forecast windowing
//! - **config**: environment and custom-location configuration
//! - **locations**: built-in cities and name resolution
//! - **providers**: the weather provider trait and Open-Meteo client
//! - **display**: text views
//! - **app**: dispatch from command options to views
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use chrono::Local;
//! use runcast::app::{run, RunRequest};
//! use runcast::config::{ApiConfig, LocationsConfig};
//! use runcast::errors::AppResult;
//! use runcast::providers::OpenMeteoClient;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let provider = OpenMeteoClient::new(ApiConfig::default());
//!     let request = RunRequest::new("kyoto", 0, true, Some("morning"), None, Some("10k"))?;
//!     let text = run(&provider, &LocationsConfig::default(), &request, Local::now().naive_local()).await?;
//!     print!("{text}");
//!     Ok(())
//! }
//! ```

/// Command dispatch
pub mod app;
/// Environment and custom-location configuration
pub mod config;
/// Text views
pub mod display;
/// Error types
pub mod errors;
/// Built-in cities and location resolution
pub mod locations;
/// Structured logging setup
pub mod logging;
/// Weather data providers
pub mod providers;
/// Shared utilities
pub mod utils;
