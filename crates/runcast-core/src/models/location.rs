// ABOUTME: Named geographic coordinate used to query forecasts
// ABOUTME: Shared by the built-in city table and user-defined locations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

use serde::{Deserialize, Serialize};

/// City or custom location with display name and coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityCoordinate {
    /// Display name
    pub name: String,
    /// Latitude in decimal degrees
    pub lat: f64,
    /// Longitude in decimal degrees
    pub lon: f64,
}

impl CityCoordinate {
    /// Create a coordinate
    #[must_use]
    pub fn new(name: impl Into<String>, lat: f64, lon: f64) -> Self {
        Self {
            name: name.into(),
            lat,
            lon,
        }
    }

    /// Whether latitude and longitude are within their valid ranges
    #[must_use]
    pub fn has_valid_coordinates(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}
