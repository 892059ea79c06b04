// ABOUTME: Built-in city table and location name resolution
// ABOUTME: Resolves a command-line name against built-in cities, then custom locations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

use runcast_core::models::CityCoordinate;
use runcast_core::{AppError, AppResult, ErrorCode};
use tracing::debug;

use crate::config::LocationsConfig;

/// A built-in city
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct City {
    /// Lookup key
    pub key: &'static str,
    /// Display name
    pub name: &'static str,
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
}

impl City {
    /// Owned coordinate for this city
    #[must_use]
    pub fn coordinate(&self) -> CityCoordinate {
        CityCoordinate::new(self.name, self.lat, self.lon)
    }
}

const fn city(key: &'static str, name: &'static str, lat: f64, lon: f64) -> City {
    City { key, name, lat, lon }
}

/// Cities available without any configuration
pub static CITIES: [City; 12] = [
    city("tokyo", "Tokyo", 35.6762, 139.6503),
    city("osaka", "Osaka", 34.6937, 135.5023),
    city("kyoto", "Kyoto", 35.0116, 135.7681),
    city("yokohama", "Yokohama", 35.4437, 139.6380),
    city("nagoya", "Nagoya", 35.1815, 136.9066),
    city("sapporo", "Sapporo", 43.0642, 141.3469),
    city("fukuoka", "Fukuoka", 33.5904, 130.4017),
    city("sendai", "Sendai", 38.2682, 140.8694),
    city("hiroshima", "Hiroshima", 34.3853, 132.4553),
    city("naha", "Naha", 26.2124, 127.6792),
    city("kobe", "Kobe", 34.6901, 135.1956),
    city("shiga", "Shiga", 35.0044, 135.8686),
];

/// Find a built-in city by key, ignoring case
#[must_use]
pub fn builtin_city(key: &str) -> Option<&'static City> {
    CITIES.iter().find(|city| city.key.eq_ignore_ascii_case(key))
}

/// Every name `resolve_location` accepts, sorted
#[must_use]
pub fn available_names(custom: &LocationsConfig) -> Vec<String> {
    let mut names: Vec<String> = CITIES
        .iter()
        .map(|city| city.key.to_owned())
        .chain(custom.keys().map(str::to_owned))
        .collect();
    names.sort();
    names.dedup();
    names
}

/// Resolve a location name
///
/// Built-in cities win over custom locations with the same key.
///
/// # Errors
///
/// Returns `ResourceNotFound` listing the accepted names when nothing matches
pub fn resolve_location(name: &str, custom: &LocationsConfig) -> AppResult<CityCoordinate> {
    let name = name.trim();
    if let Some(city) = builtin_city(name) {
        debug!(location = %city.key, "Resolved built-in city");
        return Ok(city.coordinate());
    }
    if let Some(location) = custom.get(name) {
        debug!(location = %name, "Resolved custom location");
        return Ok(location.clone());
    }

    Err(AppError::new(
        ErrorCode::ResourceNotFound,
        format!(
            "Location '{name}' not found. Available: {}",
            available_names(custom).join(", ")
        ),
    ))
}
