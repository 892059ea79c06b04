// ABOUTME: Forecast payload model decoded from the Open-Meteo forecast endpoint
// ABOUTME: Holds current conditions and parallel daily and hourly arrays
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

use serde::{Deserialize, Serialize};

use super::WeatherSample;

/// Full decoded forecast payload
///
/// Every section defaults to empty so partial responses (for example a
/// current-only request) still decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WeatherData {
    /// Conditions at request time
    #[serde(default)]
    pub current: CurrentConditions,
    /// Hourly series, one entry per local hour
    #[serde(default)]
    pub hourly: HourlyForecast,
    /// Once-per-day summary series
    #[serde(default)]
    pub daily: DailyForecast,
}

/// Conditions at request time
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Local ISO-8601 timestamp
    #[serde(default)]
    pub time: String,
    /// Air temperature at 2m (°C)
    #[serde(rename = "temperature_2m", default)]
    #[serde(deserialize_with = "super::null_as_default")]
    pub temperature: f64,
    /// Feels-like temperature (°C)
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub apparent_temperature: f64,
    /// Relative humidity at 2m (%)
    #[serde(rename = "relative_humidity_2m", default)]
    #[serde(deserialize_with = "super::null_as_default")]
    pub humidity: i32,
    /// Wind speed at 10m (m/s)
    #[serde(rename = "wind_speed_10m", default)]
    #[serde(deserialize_with = "super::null_as_default")]
    pub wind_speed: f64,
    /// Wind direction at 10m (degrees)
    #[serde(rename = "wind_direction_10m", default)]
    #[serde(deserialize_with = "super::null_as_default")]
    pub wind_direction: f64,
    /// Precipitation (mm)
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub precipitation: f64,
    /// WMO weather code
    #[serde(default, deserialize_with = "super::null_as_default")]
    pub weather_code: u16,
}

impl CurrentConditions {
    /// View the current conditions as a weather sample
    #[must_use]
    pub fn to_sample(&self) -> WeatherSample {
        WeatherSample {
            time: self.time.clone(),
            temperature: self.temperature,
            apparent_temperature: self.apparent_temperature,
            humidity: self.humidity,
            wind_speed: self.wind_speed,
            wind_direction: self.wind_direction,
            precipitation: self.precipitation,
            weather_code: self.weather_code,
        }
    }
}

/// Hourly parallel arrays
///
/// Value series stop at their first `null`, so hours past the model horizon
/// make `sample_at` return `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HourlyForecast {
    /// Local ISO-8601 timestamps (`YYYY-MM-DDTHH:MM`)
    #[serde(default)]
    pub time: Vec<String>,
    /// Air temperature (°C)
    #[serde(rename = "temperature_2m", default)]
    #[serde(deserialize_with = "super::null_terminated")]
    pub temperature: Vec<f64>,
    /// Feels-like temperature (°C)
    #[serde(default, deserialize_with = "super::null_terminated")]
    pub apparent_temperature: Vec<f64>,
    /// Relative humidity (%)
    #[serde(rename = "relative_humidity_2m", default)]
    #[serde(deserialize_with = "super::null_terminated")]
    pub humidity: Vec<i32>,
    /// Wind speed (m/s)
    #[serde(rename = "wind_speed_10m", default)]
    #[serde(deserialize_with = "super::null_terminated")]
    pub wind_speed: Vec<f64>,
    /// Wind direction (degrees)
    #[serde(rename = "wind_direction_10m", default)]
    #[serde(deserialize_with = "super::null_terminated")]
    pub wind_direction: Vec<f64>,
    /// WMO weather code
    #[serde(default, deserialize_with = "super::null_terminated")]
    pub weather_code: Vec<u16>,
    /// Precipitation (mm)
    #[serde(default, deserialize_with = "super::null_terminated")]
    pub precipitation: Vec<f64>,
}

impl HourlyForecast {
    /// Number of hourly timestamps
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether the series carries no timestamps
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Assemble the sample at `index`
    ///
    /// Returns `None` when any of the parallel arrays is too short, so
    /// ragged payloads are skipped instead of indexed out of bounds.
    #[must_use]
    pub fn sample_at(&self, index: usize) -> Option<WeatherSample> {
        Some(WeatherSample {
            time: self.time.get(index)?.clone(),
            temperature: *self.temperature.get(index)?,
            apparent_temperature: *self.apparent_temperature.get(index)?,
            humidity: *self.humidity.get(index)?,
            wind_speed: *self.wind_speed.get(index)?,
            wind_direction: self.wind_direction.get(index).copied().unwrap_or_default(),
            precipitation: *self.precipitation.get(index)?,
            weather_code: *self.weather_code.get(index)?,
        })
    }
}

/// Once-per-day summary arrays
///
/// The first six arrays are requested on every forecast call; the rest are
/// auxiliary and may be absent or shorter than `time`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyForecast {
    /// Local dates (`YYYY-MM-DD`)
    #[serde(default)]
    pub time: Vec<String>,
    /// Daily maximum temperature (°C)
    #[serde(rename = "temperature_2m_max", default)]
    #[serde(deserialize_with = "super::null_terminated")]
    pub temperature_max: Vec<f64>,
    /// Daily minimum temperature (°C)
    #[serde(rename = "temperature_2m_min", default)]
    #[serde(deserialize_with = "super::null_terminated")]
    pub temperature_min: Vec<f64>,
    /// Daily maximum wind speed (m/s)
    #[serde(rename = "wind_speed_10m_max", default)]
    #[serde(deserialize_with = "super::null_terminated")]
    pub wind_speed_max: Vec<f64>,
    /// Daily maximum wind gust (m/s)
    #[serde(rename = "wind_gusts_10m_max", default)]
    #[serde(deserialize_with = "super::null_terminated")]
    pub wind_gust_max: Vec<f64>,
    /// Daily precipitation sum (mm)
    #[serde(default, deserialize_with = "super::null_terminated")]
    pub precipitation_sum: Vec<f64>,
    /// Dominant WMO weather code
    #[serde(default, deserialize_with = "super::null_terminated")]
    pub weather_code: Vec<u16>,
    /// Sunrise timestamps
    #[serde(default, deserialize_with = "super::null_terminated")]
    pub sunrise: Vec<String>,
    /// Sunset timestamps
    #[serde(default, deserialize_with = "super::null_terminated")]
    pub sunset: Vec<String>,
    /// Daylight duration (s)
    #[serde(default, deserialize_with = "super::null_terminated")]
    pub daylight_duration: Vec<f64>,
    /// Sunshine duration (s)
    #[serde(default, deserialize_with = "super::null_terminated")]
    pub sunshine_duration: Vec<f64>,
    /// Maximum UV index
    #[serde(default, deserialize_with = "super::null_terminated")]
    pub uv_index_max: Vec<f64>,
    /// Maximum clear-sky UV index
    #[serde(default, deserialize_with = "super::null_terminated")]
    pub uv_index_clear_sky_max: Vec<f64>,
    /// Hours with precipitation
    #[serde(default, deserialize_with = "super::null_terminated")]
    pub precipitation_hours: Vec<f64>,
    /// Maximum precipitation probability (%)
    #[serde(default, deserialize_with = "super::null_terminated")]
    pub precipitation_probability_max: Vec<f64>,
}

impl DailyForecast {
    /// Number of days in the summary
    #[must_use]
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether the summary carries no days
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Whether every required parallel array has an entry at `index`
    #[must_use]
    pub fn has_required_at(&self, index: usize) -> bool {
        index < self.time.len()
            && index < self.temperature_max.len()
            && index < self.temperature_min.len()
            && index < self.wind_speed_max.len()
            && index < self.precipitation_sum.len()
            && index < self.weather_code.len()
    }
}
