// ABOUTME: Open-Meteo client for JMA forecasts and particulate air quality
// ABOUTME: Builds query parameters, enforces timeouts, and decodes JSON payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

use std::time::Instant;

use async_trait::async_trait;
use reqwest::Client;
use runcast_core::models::{AirQualityData, CityCoordinate, WeatherData};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::core::WeatherProvider;
use super::errors::WeatherError;
use crate::config::ApiConfig;
use crate::logging::AppLogger;
use crate::utils::http_client::create_client_with_timeout;

/// Current-conditions variables
pub const CURRENT_PARAMS: &str = "temperature_2m,apparent_temperature,relative_humidity_2m,wind_speed_10m,wind_direction_10m,precipitation,weather_code";

/// Daily summary variables
pub const DAILY_PARAMS: &str = "temperature_2m_max,temperature_2m_min,weather_code,wind_speed_10m_max,wind_gusts_10m_max,precipitation_sum,sunrise,sunset,daylight_duration,sunshine_duration,uv_index_max,uv_index_clear_sky_max,precipitation_hours,precipitation_probability_max";

/// Hourly variables
pub const HOURLY_PARAMS: &str = "temperature_2m,apparent_temperature,relative_humidity_2m,wind_speed_10m,wind_direction_10m,weather_code,precipitation";

/// Air-quality hourly variables
pub const AIR_QUALITY_PARAMS: &str = "dust,pm10,pm2_5";

/// Largest `forecast_days` accepted by both endpoints
pub const MAX_FORECAST_DAYS: u8 = 7;

const FORECAST_SERVICE: &str = "Open-Meteo forecast";
const AIR_QUALITY_SERVICE: &str = "Open-Meteo air quality";
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Open-Meteo HTTP client
#[derive(Debug, Clone)]
pub struct OpenMeteoClient {
    client: Client,
    config: ApiConfig,
}

impl OpenMeteoClient {
    /// Create a client with timeouts taken from `config`
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        let client =
            create_client_with_timeout(config.request_timeout_secs, config.connect_timeout_secs);
        Self { client, config }
    }

    /// API settings in use
    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Query parameters shared by both endpoints
    fn location_query(
        &self,
        location: &CityCoordinate,
        forecast_days: u8,
    ) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", format!("{:.4}", location.lat)),
            ("longitude", format!("{:.4}", location.lon)),
            ("timezone", self.config.timezone.clone()),
            (
                "forecast_days",
                forecast_days.clamp(1, MAX_FORECAST_DAYS).to_string(),
            ),
        ]
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        service: &'static str,
        url: &str,
        query: &[(&'static str, String)],
    ) -> Result<T, WeatherError> {
        debug!(service, url, "Requesting weather data");
        let started = Instant::now();

        let response = self.client.get(url).query(query).send().await?;
        let status = response.status();
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        AppLogger::log_api_call(service, url, status.as_u16(), elapsed_ms);

        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".into());
            return Err(WeatherError::HttpStatus {
                service,
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let bytes = response.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| WeatherError::Decode {
            service,
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl WeatherProvider for OpenMeteoClient {
    fn name(&self) -> &'static str {
        "open-meteo"
    }

    async fn fetch_forecast(
        &self,
        location: &CityCoordinate,
        forecast_days: u8,
    ) -> Result<WeatherData, WeatherError> {
        let mut query = self.location_query(location, forecast_days);
        query.extend([
            ("current", CURRENT_PARAMS.to_owned()),
            ("daily", DAILY_PARAMS.to_owned()),
            ("hourly", HOURLY_PARAMS.to_owned()),
            ("wind_speed_unit", "ms".to_owned()),
        ]);

        self.get_json(FORECAST_SERVICE, &self.config.forecast_url, &query)
            .await
    }

    async fn fetch_air_quality(
        &self,
        location: &CityCoordinate,
        forecast_days: u8,
    ) -> Result<AirQualityData, WeatherError> {
        let mut query = self.location_query(location, forecast_days);
        query.push(("hourly", AIR_QUALITY_PARAMS.to_owned()));

        self.get_json(AIR_QUALITY_SERVICE, &self.config.air_quality_url, &query)
            .await
    }
}
