// ABOUTME: Shared forecast fixtures and an in-memory weather provider for integration tests
// ABOUTME: Builds three days of hourly data with known scores and dust episodes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `runcast`
//!
//! The fixture covers 2025-07-05 to 2025-07-07:
//!
//! - 07-05: mild morning, 05:00 humid, 07:00 heavy dust when air quality is used
//! - 07-06: hot all day, 07:00 rainy, moderate dust and PM2.5 at noon
//! - 07-07: cold daily summary with strong wind

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use runcast::providers::{WeatherError, WeatherProvider};
use runcast_core::models::{
    AirQualityData, AirQualityHourly, CityCoordinate, CurrentConditions, DailyForecast,
    HourlyForecast, WeatherData,
};

pub const DATES: [&str; 3] = ["2025-07-05", "2025-07-06", "2025-07-07"];

/// 2025-07-05 07:30 local time
pub fn fixture_now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 7, 5)
        .unwrap()
        .and_hms_opt(7, 30, 0)
        .unwrap()
}

pub fn fixture_weather() -> WeatherData {
    WeatherData {
        current: CurrentConditions {
            time: "2025-07-05T07:30".into(),
            temperature: 18.0,
            apparent_temperature: 18.0,
            humidity: 50,
            wind_speed: 2.0,
            wind_direction: 90.0,
            precipitation: 0.0,
            weather_code: 1,
        },
        hourly: fixture_hourly(),
        daily: fixture_daily(),
    }
}

fn fixture_hourly() -> HourlyForecast {
    let mut hourly = HourlyForecast::default();
    for (day, date) in DATES.iter().enumerate() {
        for hour in 0..24_u32 {
            let (temperature, apparent) = match day {
                0 => {
                    let t = 15.0 + f64::from(hour) * 0.5;
                    (t, t)
                }
                1 => (31.0, 33.0),
                _ => (8.0, 8.0),
            };
            let humidity = if day == 0 && hour == 5 { 90 } else { 60 };
            let precipitation = if day == 1 && hour == 7 { 2.0 } else { 0.0 };

            hourly.time.push(format!("{date}T{hour:02}:00"));
            hourly.temperature.push(temperature);
            hourly.apparent_temperature.push(apparent);
            hourly.humidity.push(humidity);
            hourly.wind_speed.push(2.0);
            hourly.wind_direction.push(180.0);
            hourly.weather_code.push(1);
            hourly.precipitation.push(precipitation);
        }
    }
    hourly
}

fn fixture_daily() -> DailyForecast {
    DailyForecast {
        time: DATES.iter().map(|d| (*d).to_owned()).collect(),
        temperature_max: vec![22.0, 31.0, 12.0],
        temperature_min: vec![14.0, 24.0, 4.0],
        wind_speed_max: vec![3.0, 5.0, 12.0],
        wind_gust_max: vec![6.0, 9.0, 20.0],
        precipitation_sum: vec![0.0, 2.5, 0.0],
        weather_code: vec![1, 61, 3],
        sunrise: DATES.iter().map(|d| format!("{d}T04:31")).collect(),
        sunset: DATES.iter().map(|d| format!("{d}T19:00")).collect(),
        uv_index_max: vec![5.0, 6.0, 2.0],
        precipitation_probability_max: vec![10.0, 80.0, 0.0],
        ..DailyForecast::default()
    }
}

pub fn fixture_air_quality() -> AirQualityData {
    let mut hourly = AirQualityHourly::default();
    for date in DATES {
        for hour in 0..24_u32 {
            let time = format!("{date}T{hour:02}:00");
            let (dust, pm2_5) = match time.as_str() {
                "2025-07-05T07:00" => (250.0, 20.0),
                "2025-07-06T12:00" => (120.0, 55.0),
                _ => (10.0, 20.0),
            };
            hourly.time.push(time);
            hourly.dust.push(dust);
            hourly.pm10.push(30.0);
            hourly.pm2_5.push(pm2_5);
        }
    }
    AirQualityData { hourly }
}

/// Provider serving fixed payloads and recording what it was asked for
pub struct FixtureProvider {
    weather: Option<WeatherData>,
    air_quality: Option<AirQualityData>,
    pub forecast_days: Mutex<Vec<u8>>,
    pub air_quality_calls: AtomicUsize,
}

impl FixtureProvider {
    pub fn new(weather: WeatherData, air_quality: Option<AirQualityData>) -> Self {
        Self {
            weather: Some(weather),
            air_quality,
            forecast_days: Mutex::new(Vec::new()),
            air_quality_calls: AtomicUsize::new(0),
        }
    }

    /// Provider whose forecast endpoint answers 503
    pub fn unavailable() -> Self {
        Self {
            weather: None,
            air_quality: None,
            forecast_days: Mutex::new(Vec::new()),
            air_quality_calls: AtomicUsize::new(0),
        }
    }

    pub fn requested_days(&self) -> Vec<u8> {
        self.forecast_days.lock().unwrap().clone()
    }

    pub fn air_quality_call_count(&self) -> usize {
        self.air_quality_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl WeatherProvider for FixtureProvider {
    fn name(&self) -> &'static str {
        "fixture"
    }

    async fn fetch_forecast(
        &self,
        _location: &CityCoordinate,
        forecast_days: u8,
    ) -> Result<WeatherData, WeatherError> {
        self.forecast_days.lock().unwrap().push(forecast_days);
        self.weather.clone().ok_or_else(|| WeatherError::HttpStatus {
            service: "fixture forecast",
            status: 503,
            body: "maintenance".into(),
        })
    }

    async fn fetch_air_quality(
        &self,
        _location: &CityCoordinate,
        _forecast_days: u8,
    ) -> Result<AirQualityData, WeatherError> {
        self.air_quality_calls.fetch_add(1, Ordering::SeqCst);
        self.air_quality
            .clone()
            .ok_or_else(|| WeatherError::ApiError("air quality offline".into()))
    }
}
