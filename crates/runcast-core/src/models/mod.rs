// ABOUTME: Core data models for runcast forecast data
// ABOUTME: Re-exports forecast payloads, air-quality payloads, samples, and locations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

//! # Data Models
//!
//! Value types decoded from the forecast and air-quality services. All of
//! them are plain data: they are deserialized once, read by the engine and
//! the extractor, and dropped after a single assessment pass.
//!
//! ## Core Models
//!
//! - `WeatherData`: current conditions plus parallel daily and hourly arrays
//! - `AirQualityData`: parallel hourly dust / PM10 / PM2.5 arrays
//! - `WeatherSample`: one point-in-time (or daily aggregate) observation
//! - `CityCoordinate`: a named latitude/longitude pair

mod air_quality;
mod forecast;
mod location;
mod sample;

pub use air_quality::{AirQualityData, AirQualityHourly};
pub use forecast::{CurrentConditions, DailyForecast, HourlyForecast, WeatherData};
pub use location::CityCoordinate;
pub use sample::WeatherSample;

use std::convert::identity;

use serde::{Deserialize, Deserializer};

/// Decode a parallel series that ends at its first `null`
///
/// Open-Meteo pads hours past a model's horizon with `null` and sends a
/// `null` array for variables the model does not provide. Truncating keeps
/// indexes aligned with `time`, so the shortened tail reads as missing.
fn null_terminated<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let values = Option::<Vec<Option<T>>>::deserialize(deserializer)?;
    Ok(values
        .unwrap_or_default()
        .into_iter()
        .map_while(identity)
        .collect())
}

/// Decode a scalar, reading `null` as the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
