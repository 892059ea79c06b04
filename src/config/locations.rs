// ABOUTME: User-defined named locations loaded from a TOML configuration file
// ABOUTME: Searches the working directory and home directory, then validates coordinates
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

//! Custom locations
//!
//! ```toml
//! [locations.office]
//! name = "Office"
//! lat = 35.6895
//! lon = 139.6917
//! ```
//!
//! The first existing file among `./.runcast.conf`, `~/.runcast.conf` and
//! `~/.config/runcast/config.toml` is used. No file means no custom
//! locations.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use runcast_core::models::CityCoordinate;
use runcast_core::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// File name looked up in the working and home directories
pub const CONFIG_FILE_NAME: &str = ".runcast.conf";

/// Custom named locations keyed by the name used on the command line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationsConfig {
    /// Locations by key
    #[serde(default)]
    pub locations: BTreeMap<String, CityCoordinate>,
}

impl LocationsConfig {
    /// Candidate configuration files in lookup order
    #[must_use]
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(".").join(CONFIG_FILE_NAME)];
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(CONFIG_FILE_NAME));
            paths.push(home.join(".config").join("runcast").join("config.toml"));
        }
        paths
    }

    /// Load from the first existing file in [`Self::search_paths`]
    ///
    /// # Errors
    ///
    /// Returns an error if the file found cannot be read, parsed, or validated
    pub fn load() -> AppResult<Self> {
        Self::load_first(&Self::search_paths())
    }

    /// Load from the first existing file among `paths`
    ///
    /// # Errors
    ///
    /// Returns an error if the file found cannot be read, parsed, or validated
    pub fn load_first(paths: &[PathBuf]) -> AppResult<Self> {
        match paths.iter().find(|path| path.is_file()) {
            Some(path) => Self::load_from_path(path),
            None => {
                debug!("No custom location file found");
                Ok(Self::default())
            }
        }
    }

    /// Load and validate a specific file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated
    pub fn load_from_path(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::config(format!("Failed to read {}", path.display())).with_source(e)
        })?;

        let config = Self::parse(&contents)
            .map_err(|e| AppError::config_invalid(format!("{}: {}", path.display(), e.message)))?;

        info!(
            path = %path.display(),
            locations = config.locations.len(),
            "Loaded custom locations"
        );
        Ok(config)
    }

    /// Parse and validate TOML text
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML or a location is invalid
    pub fn parse(contents: &str) -> AppResult<Self> {
        let config: Self = toml::from_str(contents).map_err(|e| {
            AppError::config_invalid(format!("Invalid TOML: {}", e.message())).with_source(e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check every location for a name and in-range coordinates
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid location
    pub fn validate(&self) -> AppResult<()> {
        for (key, location) in &self.locations {
            if key.trim().is_empty() {
                return Err(AppError::config_invalid("Location key must not be empty"));
            }
            if location.name.trim().is_empty() {
                return Err(AppError::config_invalid(format!(
                    "Location '{key}' has an empty name"
                )));
            }
            if !(-90.0..=90.0).contains(&location.lat) {
                return Err(AppError::config_invalid(format!(
                    "Location '{key}' latitude {} is outside -90..=90",
                    location.lat
                )));
            }
            if !(-180.0..=180.0).contains(&location.lon) {
                return Err(AppError::config_invalid(format!(
                    "Location '{key}' longitude {} is outside -180..=180",
                    location.lon
                )));
            }
        }
        Ok(())
    }

    /// Look up a location by key, ignoring case
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&CityCoordinate> {
        self.locations
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(key))
            .map(|(_, location)| location)
    }

    /// Keys of all custom locations
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.locations.keys().map(String::as_str)
    }
}
