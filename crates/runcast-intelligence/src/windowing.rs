// ABOUTME: Temporal windowing over forecast time series
// ABOUTME: Part-of-day hourly extraction and single-day narrowing of daily summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

//! Forecast windowing
//!
//! Both extractions are pure. Short or ragged arrays never cause a panic:
//! hourly entries that cannot be assembled are skipped, and optional daily
//! arrays that are too short come back empty.

use std::borrow::Cow;

use runcast_core::models::{DailyForecast, HourlyForecast, WeatherData, WeatherSample};
use serde::Serialize;
use tracing::debug;

use crate::thresholds::daily_estimate::ASSUMED_HUMIDITY;

/// Named part of the day with an inclusive local-hour range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimePeriod {
    /// Command-line key
    pub key: &'static str,
    /// Name shown to the user
    pub display_name: &'static str,
    /// First hour, inclusive
    pub start_hour: u32,
    /// Last hour, inclusive
    pub end_hour: u32,
}

/// The four fixed, non-overlapping periods
pub static TIME_PERIODS: [TimePeriod; 4] = [
    TimePeriod {
        key: "morning",
        display_name: "Morning",
        start_hour: 5,
        end_hour: 9,
    },
    TimePeriod {
        key: "noon",
        display_name: "Noon",
        start_hour: 11,
        end_hour: 15,
    },
    TimePeriod {
        key: "evening",
        display_name: "Evening",
        start_hour: 17,
        end_hour: 19,
    },
    TimePeriod {
        key: "night",
        display_name: "Night",
        start_hour: 21,
        end_hour: 23,
    },
];

impl TimePeriod {
    /// Look up a period by key
    #[must_use]
    pub fn from_key(key: &str) -> Option<&'static Self> {
        TIME_PERIODS.iter().find(|period| period.key == key)
    }

    /// Number of hours covered
    #[must_use]
    pub const fn len(&self) -> usize {
        (self.end_hour - self.start_hour + 1) as usize
    }

    /// Periods always cover at least one hour
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Whether `hour` falls within the period
    #[must_use]
    pub const fn contains(&self, hour: u32) -> bool {
        hour >= self.start_hour && hour <= self.end_hour
    }
}

/// Local hour of an ISO-8601 `YYYY-MM-DDTHH:MM` timestamp
///
/// Returns `None` when the string is too short or the hour field is not a
/// valid hour.
#[must_use]
pub fn extract_hour(timestamp: &str) -> Option<u32> {
    timestamp
        .get(11..13)
        .and_then(|hour| hour.parse::<u32>().ok())
        .filter(|hour| *hour < 24)
}

/// Hourly samples falling in a part of the day
///
/// Scans in chronological order and stops after `days` times the period
/// length. Unknown period keys yield an empty list.
#[must_use]
pub fn extract_period_samples(
    hourly: &HourlyForecast,
    period_key: &str,
    days: usize,
) -> Vec<WeatherSample> {
    let Some(period) = TimePeriod::from_key(period_key) else {
        return Vec::new();
    };
    collect_period(hourly, period, days.saturating_mul(period.len()), |_| true)
}

/// Hourly samples in a part of one calendar day
///
/// `date` is a `YYYY-MM-DD` prefix; only timestamps on that date are
/// considered, so a later day's hours never stand in for it.
#[must_use]
pub fn extract_period_samples_for_date(
    hourly: &HourlyForecast,
    period_key: &str,
    date: &str,
) -> Vec<WeatherSample> {
    let Some(period) = TimePeriod::from_key(period_key) else {
        return Vec::new();
    };
    collect_period(hourly, period, period.len(), |timestamp| {
        timestamp.starts_with(date)
    })
}

fn collect_period(
    hourly: &HourlyForecast,
    period: &TimePeriod,
    limit: usize,
    on_date: impl Fn(&str) -> bool,
) -> Vec<WeatherSample> {
    let mut samples = Vec::new();

    for (index, timestamp) in hourly.time.iter().enumerate() {
        if samples.len() >= limit {
            break;
        }
        if !on_date(timestamp) {
            continue;
        }
        let Some(hour) = extract_hour(timestamp) else {
            debug!(timestamp = %timestamp, "Skipping hourly entry with unparsable hour");
            continue;
        };
        if !period.contains(hour) {
            continue;
        }
        match hourly.sample_at(index) {
            Some(sample) => samples.push(sample),
            None => debug!(index, timestamp = %timestamp, "Skipping hourly entry with missing values"),
        }
    }

    samples
}

/// Narrow a multi-day forecast to the day at `offset`
///
/// Offset 0, an empty daily summary, or an offset past any required daily
/// array all return the input itself. Otherwise every daily array is
/// narrowed to its single element at `offset`; optional arrays that are
/// too short become empty. Current conditions and the full hourly series
/// are carried over unchanged.
#[must_use]
pub fn extract_day(weather: &WeatherData, offset: usize) -> Cow<'_, WeatherData> {
    let daily = &weather.daily;
    if offset == 0 || daily.is_empty() || !daily.has_required_at(offset) {
        return Cow::Borrowed(weather);
    }

    let narrowed = DailyForecast {
        time: pick(&daily.time, offset),
        temperature_max: pick(&daily.temperature_max, offset),
        temperature_min: pick(&daily.temperature_min, offset),
        wind_speed_max: pick(&daily.wind_speed_max, offset),
        wind_gust_max: pick(&daily.wind_gust_max, offset),
        precipitation_sum: pick(&daily.precipitation_sum, offset),
        weather_code: pick(&daily.weather_code, offset),
        sunrise: pick(&daily.sunrise, offset),
        sunset: pick(&daily.sunset, offset),
        daylight_duration: pick(&daily.daylight_duration, offset),
        sunshine_duration: pick(&daily.sunshine_duration, offset),
        uv_index_max: pick(&daily.uv_index_max, offset),
        uv_index_clear_sky_max: pick(&daily.uv_index_clear_sky_max, offset),
        precipitation_hours: pick(&daily.precipitation_hours, offset),
        precipitation_probability_max: pick(&daily.precipitation_probability_max, offset),
    };

    Cow::Owned(WeatherData {
        current: weather.current.clone(),
        hourly: weather.hourly.clone(),
        daily: narrowed,
    })
}

/// Single-element copy of `values[index]`, or empty when out of range
fn pick<T: Clone>(values: &[T], index: usize) -> Vec<T> {
    values.get(index).cloned().into_iter().collect()
}

/// Daily summary at `index` as one sample for scoring
///
/// Temperatures are the midpoint of max and min, humidity is assumed, wind
/// is the daily max and precipitation the daily sum.
#[must_use]
pub fn daily_sample(daily: &DailyForecast, index: usize) -> Option<WeatherSample> {
    if !daily.has_required_at(index) {
        return None;
    }
    let midpoint = (daily.temperature_max[index] + daily.temperature_min[index]) / 2.0;

    Some(WeatherSample {
        time: daily.time[index].clone(),
        temperature: midpoint,
        apparent_temperature: midpoint,
        humidity: ASSUMED_HUMIDITY,
        wind_speed: daily.wind_speed_max[index],
        wind_direction: 0.0,
        precipitation: daily.precipitation_sum[index],
        weather_code: daily.weather_code[index],
    })
}
