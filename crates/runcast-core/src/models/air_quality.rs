// ABOUTME: Air-quality payload model decoded from the Open-Meteo air-quality endpoint
// ABOUTME: Holds parallel hourly dust, PM10, and PM2.5 concentration arrays
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

use serde::{Deserialize, Serialize};

/// Decoded air-quality payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirQualityData {
    /// Hourly concentration series
    #[serde(default)]
    pub hourly: AirQualityHourly,
}

/// Hourly concentration arrays (µg/m³)
///
/// A series stops at its first `null`; later hours read as zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirQualityHourly {
    /// Local ISO-8601 timestamps (`YYYY-MM-DDTHH:MM`)
    #[serde(default)]
    pub time: Vec<String>,
    /// Mineral dust concentration
    #[serde(default, deserialize_with = "super::null_terminated")]
    pub dust: Vec<f64>,
    /// PM10 concentration
    #[serde(default, deserialize_with = "super::null_terminated")]
    pub pm10: Vec<f64>,
    /// PM2.5 concentration
    #[serde(default, deserialize_with = "super::null_terminated")]
    pub pm2_5: Vec<f64>,
}

impl AirQualityHourly {
    /// Concentrations at `index` as `(dust, pm10, pm2_5)`
    ///
    /// Missing parallel values read as zero.
    #[must_use]
    pub fn concentrations_at(&self, index: usize) -> (f64, f64, f64) {
        (
            self.dust.get(index).copied().unwrap_or_default(),
            self.pm10.get(index).copied().unwrap_or_default(),
            self.pm2_5.get(index).copied().unwrap_or_default(),
        )
    }
}
