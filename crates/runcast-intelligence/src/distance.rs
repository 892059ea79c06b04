// ABOUTME: Race-distance profiles carrying per-factor penalty weights
// ABOUTME: Static table of 5K, 10K, half and full marathon buckets looked up by key
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

use std::fmt;
use std::str::FromStr;

use runcast_core::AppError;
use serde::Serialize;

/// Distance bucket identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceKey {
    /// 3-7 km
    #[serde(rename = "5k")]
    FiveK,
    /// 8-12 km
    #[serde(rename = "10k")]
    TenK,
    /// Half marathon
    Half,
    /// Full marathon
    Full,
}

impl DistanceKey {
    /// All keys, shortest distance first
    pub const ALL: [Self; 4] = [Self::FiveK, Self::TenK, Self::Half, Self::Full];

    /// Command-line key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FiveK => "5k",
            Self::TenK => "10k",
            Self::Half => "half",
            Self::Full => "full",
        }
    }

    /// Profile for this key
    #[must_use]
    pub fn profile(self) -> &'static DistanceProfile {
        match self {
            Self::FiveK => &DISTANCE_PROFILES[0],
            Self::TenK => &DISTANCE_PROFILES[1],
            Self::Half => &DISTANCE_PROFILES[2],
            Self::Full => &DISTANCE_PROFILES[3],
        }
    }
}

impl fmt::Display for DistanceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistanceKey {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown distance '{s}' (expected one of: 5k, 10k, half, full)"
                ))
            })
    }
}

/// Race-distance bucket with penalty weights
///
/// Weights are non-decreasing from 5K to full marathon; 5K carries none.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceProfile {
    /// Bucket identifier
    pub key: DistanceKey,
    /// Name used in recommendations
    pub display_name: &'static str,
    /// Short description of the load
    pub description: &'static str,
    /// Lower bound of the bucket (km)
    pub min_km: f64,
    /// Upper bound of the bucket (km)
    pub max_km: f64,
    /// Temperature weight
    pub temp_penalty: i32,
    /// Humidity weight
    pub humidity_penalty: i32,
    /// Wind weight
    pub wind_penalty: i32,
    /// Apparent-temperature weight
    pub heat_index_penalty: i32,
}

/// The four fixed distance profiles, shortest first
pub static DISTANCE_PROFILES: [DistanceProfile; 4] = [
    DistanceProfile {
        key: DistanceKey::FiveK,
        display_name: "5K",
        description: "Short run - relatively light load",
        min_km: 3.0,
        max_km: 7.0,
        temp_penalty: 0,
        humidity_penalty: 0,
        wind_penalty: 0,
        heat_index_penalty: 0,
    },
    DistanceProfile {
        key: DistanceKey::TenK,
        display_name: "10K",
        description: "Middle distance - moderate load",
        min_km: 8.0,
        max_km: 12.0,
        temp_penalty: 3,
        humidity_penalty: 2,
        wind_penalty: 1,
        heat_index_penalty: 5,
    },
    DistanceProfile {
        key: DistanceKey::Half,
        display_name: "Half Marathon",
        description: "Long distance - high load",
        min_km: 19.0,
        max_km: 23.0,
        temp_penalty: 7,
        humidity_penalty: 5,
        wind_penalty: 3,
        heat_index_penalty: 10,
    },
    DistanceProfile {
        key: DistanceKey::Full,
        display_name: "Full Marathon",
        description: "Ultra-long distance - very high load",
        min_km: 40.0,
        max_km: 44.0,
        temp_penalty: 15,
        humidity_penalty: 10,
        wind_penalty: 5,
        heat_index_penalty: 20,
    },
];

impl DistanceProfile {
    /// Look up a profile by its command-line key
    ///
    /// Unknown keys yield `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<&'static Self> {
        key.parse::<DistanceKey>().ok().map(DistanceKey::profile)
    }

    /// Sum of the four flat weights
    #[must_use]
    pub const fn base_penalty(&self) -> i32 {
        self.temp_penalty + self.humidity_penalty + self.wind_penalty + self.heat_index_penalty
    }

    /// Half and full marathons get extra warnings and gear
    #[must_use]
    pub const fn is_long_distance(&self) -> bool {
        matches!(self.key, DistanceKey::Half | DistanceKey::Full)
    }

    /// Multiplier applied to the dust penalty for this distance
    #[must_use]
    pub const fn dust_multiplier(&self) -> f64 {
        match self.key {
            DistanceKey::FiveK => 1.0,
            DistanceKey::TenK => 1.2,
            DistanceKey::Half => 1.5,
            DistanceKey::Full => 2.0,
        }
    }
}

/// Dust multiplier for an optional profile; no profile counts as 1.0
#[must_use]
pub fn dust_multiplier(profile: Option<&DistanceProfile>) -> f64 {
    profile.map_or(1.0, DistanceProfile::dust_multiplier)
}
