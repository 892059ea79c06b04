// ABOUTME: Environment configuration for weather API endpoints, timezone, and timeouts
// ABOUTME: Parses RUNCAST_* environment variables with built-in defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

use anyhow::{Context, Result};
use std::env;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// Default values for API configuration
pub mod defaults {
    /// Open-Meteo JMA forecast endpoint
    pub const FORECAST_URL: &str = "https://api.open-meteo.com/v1/jma";
    /// Open-Meteo air-quality endpoint
    pub const AIR_QUALITY_URL: &str = "https://air-quality-api.open-meteo.com/v1/air-quality";
    /// Timezone for local timestamps
    pub const TIMEZONE: &str = "Asia/Tokyo";
    /// Whole-request timeout
    pub const REQUEST_TIMEOUT_SECS: u64 = 10;
    /// Connection timeout
    pub const CONNECT_TIMEOUT_SECS: u64 = 5;
}

/// Weather API settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Forecast endpoint
    pub forecast_url: String,
    /// Air-quality endpoint
    pub air_quality_url: String,
    /// IANA timezone sent with every request
    pub timezone: String,
    /// Whole-request timeout in seconds
    pub request_timeout_secs: u64,
    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            forecast_url: defaults::FORECAST_URL.to_owned(),
            air_quality_url: defaults::AIR_QUALITY_URL.to_owned(),
            timezone: defaults::TIMEZONE.to_owned(),
            request_timeout_secs: defaults::REQUEST_TIMEOUT_SECS,
            connect_timeout_secs: defaults::CONNECT_TIMEOUT_SECS,
        }
    }
}

impl ApiConfig {
    /// Load API configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a URL or timeout variable is set but invalid
    pub fn from_env() -> Result<Self> {
        let config = Self {
            forecast_url: env_url("RUNCAST_FORECAST_URL", defaults::FORECAST_URL)?,
            air_quality_url: env_url("RUNCAST_AIR_QUALITY_URL", defaults::AIR_QUALITY_URL)?,
            timezone: env_var_or("RUNCAST_TIMEZONE", defaults::TIMEZONE),
            request_timeout_secs: env_var_or(
                "RUNCAST_REQUEST_TIMEOUT_SECS",
                &defaults::REQUEST_TIMEOUT_SECS.to_string(),
            )
            .parse()
            .context("Invalid RUNCAST_REQUEST_TIMEOUT_SECS value")?,
            connect_timeout_secs: env_var_or(
                "RUNCAST_CONNECT_TIMEOUT_SECS",
                &defaults::CONNECT_TIMEOUT_SECS.to_string(),
            )
            .parse()
            .context("Invalid RUNCAST_CONNECT_TIMEOUT_SECS value")?,
        };

        debug!(
            forecast_url = %config.forecast_url,
            air_quality_url = %config.air_quality_url,
            timezone = %config.timezone,
            timeout_secs = config.request_timeout_secs,
            "Loaded API configuration"
        );
        Ok(config)
    }

    /// Same settings pointing both endpoints at `base`
    ///
    /// Used to aim the client at a local mock server.
    #[must_use]
    pub fn with_base_url(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        self.forecast_url = format!("{base}/v1/jma");
        self.air_quality_url = format!("{base}/v1/air-quality");
        self
    }

    /// Whole-request timeout
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Read a URL variable, rejecting values that do not parse as absolute URLs
fn env_url(key: &str, default: &str) -> Result<String> {
    let value = env_var_or(key, default);
    Url::parse(&value).with_context(|| format!("Invalid {key} value"))?;
    Ok(value)
}
