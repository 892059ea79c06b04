// ABOUTME: WMO weather code descriptions and compass wind directions
// ABOUTME: Fixed lookup tables shared by the engine and the terminal renderer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

//! Static lookups for weather phenomena.
//!
//! Codes follow the WMO interpretation codes used by Open-Meteo. Codes
//! `>= 80` are shower-class and `>= 95` thunderstorm-class; the scoring
//! engine keys its weather-code penalties on those boundaries.

/// First shower-class weather code
pub const SHOWER_CODE_MIN: u16 = 80;

/// First thunderstorm-class weather code
pub const THUNDERSTORM_CODE_MIN: u16 = 95;

const COMPASS_POINTS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Human-readable description of a WMO weather code
///
/// Unlisted codes map to `"Unknown"`.
#[must_use]
pub const fn describe(code: u16) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Overcast",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Drizzle",
        55 => "Dense drizzle",
        56 => "Light freezing drizzle",
        57 => "Freezing drizzle",
        61 => "Light rain",
        63 => "Rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Freezing rain",
        71 => "Light snow",
        73 => "Snow",
        75 => "Heavy snow",
        77 => "Snow grains",
        80 => "Light rain showers",
        81 => "Rain showers",
        82 => "Violent rain showers",
        85 => "Light snow showers",
        86 => "Snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown",
    }
}

/// 16-point compass label for a wind direction in degrees
///
/// Each point covers a 22.5° sector centred on its bearing, so 350° and
/// 10° both read as `"N"`. Negative and >360° inputs wrap.
#[must_use]
pub fn compass_direction(degrees: f64) -> &'static str {
    let normalized = degrees.rem_euclid(360.0);
    let sector = ((normalized + 11.25) / 22.5) as usize % COMPASS_POINTS.len();
    COMPASS_POINTS[sector]
}
