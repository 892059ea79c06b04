// ABOUTME: Tests for environment API settings, custom locations, and location resolution
// ABOUTME: Uses temporary TOML files and serialized environment mutation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use std::env;
use std::fs;
use std::path::PathBuf;

use runcast::config::environment::defaults;
use runcast::config::{ApiConfig, LocationsConfig};
use runcast::errors::ErrorCode;
use runcast::locations::{available_names, resolve_location, CITIES};
use serial_test::serial;
use tempfile::TempDir;

const API_VARS: [&str; 5] = [
    "RUNCAST_FORECAST_URL",
    "RUNCAST_AIR_QUALITY_URL",
    "RUNCAST_TIMEZONE",
    "RUNCAST_REQUEST_TIMEOUT_SECS",
    "RUNCAST_CONNECT_TIMEOUT_SECS",
];

fn clear_api_vars() {
    for var in API_VARS {
        env::remove_var(var);
    }
}

fn write_config(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

const OFFICE_CONFIG: &str = r#"
[locations.office]
name = "Office"
lat = 35.6895
lon = 139.6917

[locations.Lake]
name = "Lake Biwa"
lat = 35.2500
lon = 136.0833
"#;

#[test]
#[serial]
fn test_api_config_defaults_without_environment() {
    clear_api_vars();

    let config = ApiConfig::from_env().unwrap();

    assert_eq!(config, ApiConfig::default());
    assert_eq!(config.forecast_url, defaults::FORECAST_URL);
    assert_eq!(config.air_quality_url, defaults::AIR_QUALITY_URL);
    assert_eq!(config.connect_timeout_secs, 5);
}

#[test]
#[serial]
fn test_api_config_reads_environment() {
    clear_api_vars();
    env::set_var("RUNCAST_FORECAST_URL", "http://localhost:9000/v1/jma");
    env::set_var("RUNCAST_TIMEZONE", "Asia/Seoul");
    env::set_var("RUNCAST_REQUEST_TIMEOUT_SECS", "3");

    let config = ApiConfig::from_env().unwrap();
    clear_api_vars();

    assert_eq!(config.forecast_url, "http://localhost:9000/v1/jma");
    assert_eq!(config.timezone, "Asia/Seoul");
    assert_eq!(config.request_timeout_secs, 3);
    assert_eq!(config.air_quality_url, defaults::AIR_QUALITY_URL);
}

#[test]
#[serial]
fn test_api_config_rejects_invalid_values() {
    clear_api_vars();
    env::set_var("RUNCAST_REQUEST_TIMEOUT_SECS", "soon");
    let timeout = ApiConfig::from_env();
    clear_api_vars();
    assert!(timeout.is_err());

    env::set_var("RUNCAST_AIR_QUALITY_URL", "not a url");
    let url = ApiConfig::from_env();
    clear_api_vars();
    assert!(url.is_err());
}

#[test]
fn test_load_from_path_reads_locations() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, ".runcast.conf", OFFICE_CONFIG);

    let config = LocationsConfig::load_from_path(&path).unwrap();

    assert_eq!(config.locations.len(), 2);
    let lake = config.get("lake").unwrap();
    assert_eq!(lake.name, "Lake Biwa");
    assert!((lake.lon - 136.0833).abs() < f64::EPSILON);
}

#[test]
fn test_load_first_uses_first_existing_file() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.toml");
    let first = write_config(&dir, "first.toml", OFFICE_CONFIG);
    let second = write_config(
        &dir,
        "second.toml",
        "[locations.home]\nname = \"Home\"\nlat = 1.0\nlon = 2.0\n",
    );

    let config = LocationsConfig::load_first(&[missing, first, second]).unwrap();

    assert!(config.get("office").is_some());
    assert!(config.get("home").is_none());
}

#[test]
fn test_no_config_file_is_empty() {
    let dir = TempDir::new().unwrap();

    let config = LocationsConfig::load_first(&[dir.path().join("absent.conf")]).unwrap();

    assert!(config.locations.is_empty());
}

#[test]
fn test_invalid_toml_names_the_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "broken.toml", "[locations.office\nname = ");

    let error = LocationsConfig::load_from_path(&path).unwrap_err();

    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("broken.toml"));
}

#[test]
fn test_invalid_locations_are_rejected() {
    let cases = [
        "[locations.blank]\nname = \"  \"\nlat = 0.0\nlon = 0.0\n",
        "[locations.south]\nname = \"South\"\nlat = -91.0\nlon = 0.0\n",
        "[locations.east]\nname = \"East\"\nlat = 0.0\nlon = 180.5\n",
        "[locations.partial]\nname = \"Partial\"\nlat = 0.0\n",
    ];

    for contents in cases {
        let error = LocationsConfig::parse(contents).unwrap_err();
        assert_eq!(error.code, ErrorCode::ConfigInvalid, "{contents}");
    }
}

#[test]
fn test_boundary_coordinates_are_accepted() {
    let config = LocationsConfig::parse(
        "[locations.corner]\nname = \"Corner\"\nlat = -90.0\nlon = 180.0\n",
    )
    .unwrap();
    assert!(config.get("corner").is_some());
}

#[test]
fn test_resolve_builtin_city_ignores_case() {
    let tokyo = resolve_location("TOKYO", &LocationsConfig::default()).unwrap();

    assert_eq!(tokyo.name, "Tokyo");
    assert!((tokyo.lat - 35.6762).abs() < f64::EPSILON);
    assert!((tokyo.lon - 139.6503).abs() < f64::EPSILON);
}

#[test]
fn test_resolve_custom_location() {
    let config = LocationsConfig::parse(OFFICE_CONFIG).unwrap();

    let office = resolve_location("Office", &config).unwrap();

    assert_eq!(office.name, "Office");
}

#[test]
fn test_builtin_city_wins_over_custom_key() {
    let config = LocationsConfig::parse(
        "[locations.kobe]\nname = \"My Kobe\"\nlat = 10.0\nlon = 10.0\n",
    )
    .unwrap();

    let kobe = resolve_location("kobe", &config).unwrap();

    assert_eq!(kobe.name, "Kobe");
}

#[test]
fn test_unknown_location_lists_sorted_names() {
    let config = LocationsConfig::parse(OFFICE_CONFIG).unwrap();

    let error = resolve_location("atlantis", &config).unwrap_err();

    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert!(error.message.contains("atlantis"));
    assert!(error.message.contains("Lake, fukuoka"));
    assert!(error.message.contains("office, osaka"));

    let names = available_names(&config);
    assert_eq!(names.len(), CITIES.len() + 2);
    assert!(names.windows(2).all(|pair| pair[0] <= pair[1]));
}
