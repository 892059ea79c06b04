// ABOUTME: Logging configuration and structured logging setup for the runcast CLI
// ABOUTME: Configures log level, output format, and stderr output for tracing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

//! Structured logging configuration
//!
//! Logs always go to stderr so the forecast printed on stdout stays clean
//! when piped. The default level is `warn`; `--verbose` or `RUST_LOG`
//! raise it.

use anyhow::Result;
use std::env;
use std::io;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when `RUST_LOG` is unset
pub const DEFAULT_LEVEL: &str = "warn";

/// HTTP stack targets capped at `warn` whatever the configured level
const NOISY_TARGETS: [&str; 4] = ["hyper", "hyper_util", "reqwest", "rustls"];

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directives (trace, debug, info, warn, error, or `RUST_LOG` syntax)
    pub level: String,
    /// Output format
    pub format: LogFormat,
    /// Include source file and line numbers
    pub include_location: bool,
}

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// `JSON` lines for machine consumption
    Json,
    /// Multi-line human-readable output
    Pretty,
    /// Single-line output
    #[default]
    Compact,
}

impl LogFormat {
    /// Parse a `LOG_FORMAT` value, defaulting to compact
    #[must_use]
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value.map(str::to_ascii_lowercase).as_deref() {
            Some("json") => Self::Json,
            Some("pretty") => Self::Pretty,
            _ => Self::Compact,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL.to_owned(),
            format: LogFormat::default(),
            include_location: false,
        }
    }
}

impl LoggingConfig {
    /// Read `RUST_LOG`, `LOG_FORMAT` and `LOG_INCLUDE_LOCATION`
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            level: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LEVEL.to_owned()),
            format: LogFormat::parse_or_default(env::var("LOG_FORMAT").ok().as_deref()),
            include_location: env::var("LOG_INCLUDE_LOCATION").is_ok(),
        }
    }

    /// Raise the level to `debug` when verbose output was requested
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        if verbose {
            "debug".clone_into(&mut self.level);
        }
        self
    }

    /// Build the filter, keeping HTTP internals quiet regardless of level
    #[must_use]
    pub fn env_filter(&self) -> EnvFilter {
        NOISY_TARGETS
            .iter()
            .fold(EnvFilter::new(&self.level), |filter, target| {
                filter.add_directive(
                    format!("{target}=warn")
                        .parse()
                        .unwrap_or_else(|_| LevelFilter::WARN.into()),
                )
            })
    }

    /// Install the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed
    pub fn init(&self) -> Result<()> {
        let registry = tracing_subscriber::registry().with(self.env_filter());
        let layer = fmt::layer()
            .with_file(self.include_location)
            .with_line_number(self.include_location)
            .with_writer(io::stderr);

        match self.format {
            LogFormat::Json => registry.with(layer.json()).try_init()?,
            LogFormat::Pretty => registry.with(layer.pretty()).try_init()?,
            LogFormat::Compact => registry.with(layer.compact().with_target(false)).try_init()?,
        }

        debug!(
            version = env!("CARGO_PKG_VERSION"),
            level = %self.level,
            format = ?self.format,
            "Logging configured"
        );
        Ok(())
    }
}

/// Initialize logging from environment
///
/// # Errors
///
/// Returns an error if logging initialization fails
pub fn init_from_env(verbose: bool) -> Result<()> {
    LoggingConfig::from_env().with_verbose(verbose).init()
}

/// Application-specific structured log events
pub struct AppLogger;

impl AppLogger {
    /// Log an outbound weather API call
    pub fn log_api_call(service: &str, endpoint: &str, status: u16, duration_ms: u64) {
        info!(
            api.service = %service,
            api.endpoint = %endpoint,
            http.status = status,
            http.duration_ms = duration_ms,
            "Weather API call"
        );
    }

    /// Log a running assessment result
    pub fn log_assessment(time: &str, score: u8, level: &str, distance: Option<&str>) {
        debug!(
            assessment.time = %time,
            assessment.score = score,
            assessment.level = %level,
            assessment.distance = distance.unwrap_or("none"),
            "Running assessment"
        );
    }
}
