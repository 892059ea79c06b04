// ABOUTME: Air-quality severity levels derived from dust concentration
// ABOUTME: Selects current or hourly readings from an air-quality payload and prices PM2.5
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

//! Air-quality readings
//!
//! Severity depends on the dust concentration alone. PM2.5 is carried
//! along and priced separately by the dust-penalty step.

use chrono::{NaiveDate, NaiveDateTime};
use runcast_core::models::AirQualityData;
use serde::Serialize;

use crate::thresholds::air_quality::{
    DUST_HEAVY_ABOVE, DUST_LIGHT_ABOVE, DUST_MODERATE_ABOVE, DUST_PENALTIES, DUST_VERY_HEAVY_ABOVE,
    PM25_ALERT_PENALTY, PM25_ELEVATED_MAX, PM25_ELEVATED_PENALTY, PM25_GOOD_MAX, PM25_HIGH_MAX,
    PM25_HIGH_PENALTY,
};

/// Air-quality reading with its dust severity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirQualityLevel {
    /// Severity, 0 (none) to 4 (very heavy)
    pub level: u8,
    /// Short severity name
    pub display_name: &'static str,
    /// What the severity means outdoors
    pub description: &'static str,
    /// Dust concentration (µg/m³)
    pub dust: f64,
    /// PM10 concentration (µg/m³)
    pub pm10: f64,
    /// PM2.5 concentration (µg/m³)
    pub pm2_5: f64,
}

impl AirQualityLevel {
    /// Classify a set of concentrations
    #[must_use]
    pub fn from_concentrations(dust: f64, pm10: f64, pm2_5: f64) -> Self {
        let (level, display_name, description) = match dust {
            d if d > DUST_VERY_HEAVY_ABOVE => (4, "Very heavy", "Avoid outdoor activity"),
            d if d > DUST_HEAVY_ABOVE => (3, "Heavy", "Take care when going outside"),
            d if d > DUST_MODERATE_ABOVE => (2, "Moderate", "Visibility may be affected"),
            d if d > DUST_LIGHT_ABOVE => (1, "Light", "Slight dust in the air"),
            _ => (0, "None", "No dust impact"),
        };

        Self {
            level,
            display_name,
            description,
            dust,
            pm10,
            pm2_5,
        }
    }

    /// Base dust penalty for this severity
    #[must_use]
    pub fn dust_penalty(&self) -> i32 {
        DUST_PENALTIES
            .get(usize::from(self.level))
            .copied()
            .unwrap_or(0)
    }

    /// Penalty for this reading's PM2.5 concentration
    #[must_use]
    pub fn pm25_penalty(&self) -> i32 {
        pm25_penalty(self.pm2_5)
    }
}

/// Penalty for a PM2.5 concentration
#[must_use]
pub fn pm25_penalty(pm2_5: f64) -> i32 {
    match pm2_5 {
        p if p <= PM25_GOOD_MAX => 0,
        p if p <= PM25_ELEVATED_MAX => PM25_ELEVATED_PENALTY,
        p if p <= PM25_HIGH_MAX => PM25_HIGH_PENALTY,
        _ => PM25_ALERT_PENALTY,
    }
}

/// Reading for the hour containing `now`
///
/// Falls back to the first entry when no timestamp matches the current
/// hour. Returns `None` only for an empty payload.
#[must_use]
pub fn current_reading(payload: &AirQualityData, now: NaiveDateTime) -> Option<AirQualityLevel> {
    let hourly = &payload.hourly;
    if hourly.time.is_empty() {
        return None;
    }

    let current_hour = now.format("%Y-%m-%dT%H:00").to_string();
    let index = hourly
        .time
        .iter()
        .position(|time| *time == current_hour)
        .unwrap_or(0);

    let (dust, pm10, pm2_5) = hourly.concentrations_at(index);
    Some(AirQualityLevel::from_concentrations(dust, pm10, pm2_5))
}

/// Reading for an exact local date and hour, if the payload has one
#[must_use]
pub fn hourly_reading(
    payload: &AirQualityData,
    date: NaiveDate,
    hour: u32,
) -> Option<AirQualityLevel> {
    let target = format!("{}T{hour:02}:00", date.format("%Y-%m-%d"));
    let index = payload.hourly.time.iter().position(|time| *time == target)?;
    let (dust, pm10, pm2_5) = payload.hourly.concentrations_at(index);
    Some(AirQualityLevel::from_concentrations(dust, pm10, pm2_5))
}
