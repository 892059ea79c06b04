// ABOUTME: Async trait implemented by every weather data source
// ABOUTME: Fetches forecast and air-quality payloads for a coordinate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

use async_trait::async_trait;
use runcast_core::models::{AirQualityData, CityCoordinate, WeatherData};

use super::errors::WeatherError;

/// Source of forecast and air-quality data
///
/// Implementations must be `Send + Sync` so a provider can be shared across
/// tasks.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Provider name used in logs
    fn name(&self) -> &'static str;

    /// Fetch current conditions plus `forecast_days` of daily and hourly data
    async fn fetch_forecast(
        &self,
        location: &CityCoordinate,
        forecast_days: u8,
    ) -> Result<WeatherData, WeatherError>;

    /// Fetch `forecast_days` of hourly particulate concentrations
    async fn fetch_air_quality(
        &self,
        location: &CityCoordinate,
        forecast_days: u8,
    ) -> Result<AirQualityData, WeatherError>;
}
