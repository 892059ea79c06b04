// ABOUTME: Point-in-time weather observation consumed by the scoring engine
// ABOUTME: Built from current conditions, an hourly entry, or a daily summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

use serde::{Deserialize, Serialize};

/// One weather observation
///
/// Values are not range-checked; out-of-range input flows through the
/// threshold arithmetic unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherSample {
    /// Local ISO-8601 timestamp (date only for daily aggregates)
    pub time: String,
    /// Air temperature (°C)
    pub temperature: f64,
    /// Feels-like temperature (°C)
    pub apparent_temperature: f64,
    /// Relative humidity (%)
    pub humidity: i32,
    /// Wind speed (m/s)
    pub wind_speed: f64,
    /// Wind direction (degrees)
    pub wind_direction: f64,
    /// Precipitation (mm)
    pub precipitation: f64,
    /// WMO weather code
    pub weather_code: u16,
}

impl WeatherSample {
    /// Two-digit local hour of the timestamp, if it carries one
    #[must_use]
    pub fn hour_label(&self) -> &str {
        self.time.get(11..13).unwrap_or("")
    }

    /// Calendar date prefix (`YYYY-MM-DD`) of the timestamp
    #[must_use]
    pub fn date_label(&self) -> &str {
        self.time.get(..10).unwrap_or(&self.time)
    }
}
