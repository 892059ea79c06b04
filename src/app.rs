// ABOUTME: Command dispatch from validated CLI options to provider calls and views
// ABOUTME: Resolves the location, fetches data, and picks the view to render
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

use chrono::NaiveDateTime;
use runcast_core::models::{AirQualityData, CityCoordinate};
use runcast_core::{AppError, AppResult};
use runcast_intelligence::{DaySpec, DistanceKey, DistanceProfile, TimePeriod};
use tracing::{info, warn};

use crate::config::LocationsConfig;
use crate::display::running::RunningOptions;
use crate::display::{
    render_current, render_date, render_date_period, render_forecast, render_period,
    render_running_current, render_running_date, render_running_date_period,
    render_running_forecast, render_running_period,
};
use crate::locations::resolve_location;
use crate::providers::WeatherProvider;

/// Largest accepted `--days`
pub const MAX_DAYS: u8 = 7;

/// Validated command options
#[derive(Debug, Clone, PartialEq)]
pub struct RunRequest {
    /// Location name as typed
    pub city: String,
    /// Forecast days, 0 for current conditions only
    pub days: u8,
    /// Show running assessments
    pub running: bool,
    /// Part of the day to show
    pub period: Option<&'static TimePeriod>,
    /// Relative day to show
    pub day: Option<DaySpec>,
    /// Target race distance
    pub distance: Option<&'static DistanceProfile>,
    /// Fetch air quality in running mode
    pub air_quality: bool,
}

impl RunRequest {
    /// Validate raw option values
    ///
    /// A distance implies running mode.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty city, days above the maximum, or an
    /// unknown time of day, date, or distance
    pub fn new(
        city: &str,
        days: u8,
        running: bool,
        time: Option<&str>,
        date: Option<&str>,
        distance: Option<&str>,
    ) -> AppResult<Self> {
        let city = city.trim();
        if city.is_empty() {
            return Err(AppError::invalid_input("City name must not be empty"));
        }
        if days > MAX_DAYS {
            return Err(AppError::invalid_input(format!(
                "Forecast days must be between 0 and {MAX_DAYS}, got {days}"
            )));
        }
        let period = time
            .map(|key| {
                TimePeriod::from_key(&key.to_lowercase()).ok_or_else(|| {
                    AppError::invalid_input(format!(
                        "Unknown time of day '{key}' (use morning, noon, evening or night)"
                    ))
                })
            })
            .transpose()?;
        let day = date.map(str::parse::<DaySpec>).transpose()?;
        let distance = distance
            .map(|key| key.parse::<DistanceKey>().map(DistanceKey::profile))
            .transpose()?;

        Ok(Self {
            city: city.to_owned(),
            days,
            running: running || distance.is_some(),
            period,
            day,
            distance,
            air_quality: true,
        })
    }

    /// Skip the air-quality request
    #[must_use]
    pub const fn without_air_quality(mut self) -> Self {
        self.air_quality = false;
        self
    }

    /// Days of forecast needed to cover every requested view
    #[must_use]
    pub fn forecast_days(&self) -> u8 {
        let day_needs = self
            .day
            .and_then(|day| u8::try_from(day.offset() + 1).ok())
            .unwrap_or(1);
        self.days.max(day_needs).max(1)
    }
}

/// Fetch data for `request` and render the matching view
///
/// A failed air-quality request is logged and the view is scored without it.
///
/// # Errors
///
/// Returns an error if the location cannot be resolved or the forecast
/// request fails
pub async fn run(
    provider: &dyn WeatherProvider,
    locations: &LocationsConfig,
    request: &RunRequest,
    now: NaiveDateTime,
) -> AppResult<String> {
    let location = resolve_location(&request.city, locations)?;
    let forecast_days = request.forecast_days();
    info!(
        city = %location.name,
        provider = provider.name(),
        forecast_days,
        running = request.running,
        "Fetching forecast"
    );

    let weather = provider.fetch_forecast(&location, forecast_days).await?;

    if !request.running {
        return Ok(match (request.day, request.period) {
            (Some(day), Some(period)) => render_date_period(&weather, &location.name, day, period),
            (Some(day), None) => render_date(&weather, &location.name, day),
            (None, Some(period)) => render_period(
                &weather,
                &location.name,
                period,
                usize::from(request.days.max(1)),
            ),
            (None, None) if request.days == 0 => render_current(&weather, &location.name),
            (None, None) => render_forecast(&weather, &location.name, usize::from(request.days)),
        });
    }

    let air_quality = if request.air_quality {
        fetch_air_quality(provider, &location, forecast_days).await
    } else {
        None
    };
    let options = RunningOptions::new(now)
        .with_profile(request.distance)
        .with_air_quality(air_quality.as_ref());

    Ok(match (request.day, request.period) {
        (Some(day), Some(period)) => {
            render_running_date_period(&weather, &location.name, day, period, &options)
        }
        (Some(day), None) => render_running_date(&weather, &location.name, day, &options),
        (None, Some(period)) => render_running_period(
            &weather,
            &location.name,
            period,
            usize::from(request.days.max(1)),
            &options,
        ),
        (None, None) if request.days == 0 => {
            render_running_current(&weather, &location.name, &options)
        }
        (None, None) => render_running_forecast(
            &weather,
            &location.name,
            usize::from(request.days),
            &options,
        ),
    })
}

async fn fetch_air_quality(
    provider: &dyn WeatherProvider,
    location: &CityCoordinate,
    forecast_days: u8,
) -> Option<AirQualityData> {
    match provider.fetch_air_quality(location, forecast_days).await {
        Ok(payload) => Some(payload),
        Err(e) => {
            warn!(error = %e, "Air-quality data unavailable, scoring without it");
            None
        }
    }
}
