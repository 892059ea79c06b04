// ABOUTME: Integration tests for command validation and view dispatch
// ABOUTME: Drives run() with an in-memory provider and checks the selected view
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{fixture_air_quality, fixture_now, fixture_weather, FixtureProvider};
use runcast::app::{run, RunRequest};
use runcast::config::LocationsConfig;
use runcast::errors::ErrorCode;
use runcast_intelligence::DaySpec;

fn request(
    city: &str,
    days: u8,
    running: bool,
    time: Option<&str>,
    date: Option<&str>,
) -> RunRequest {
    RunRequest::new(city, days, running, time, date, None).unwrap()
}

fn provider() -> FixtureProvider {
    FixtureProvider::new(fixture_weather(), Some(fixture_air_quality()))
}

#[test]
fn test_request_validation() {
    let cases = [
        RunRequest::new("  ", 0, false, None, None, None),
        RunRequest::new("tokyo", 8, false, None, None, None),
        RunRequest::new("tokyo", 0, false, Some("dawn"), None, None),
        RunRequest::new("tokyo", 0, false, None, Some("yesterday"), None),
        RunRequest::new("tokyo", 0, false, None, None, Some("ultra")),
    ];

    for case in cases {
        assert_eq!(case.unwrap_err().code, ErrorCode::InvalidInput);
    }
}

#[test]
fn test_request_normalizes_options() {
    let request = RunRequest::new(" osaka ", 3, false, Some("Evening"), Some("tomorrow"), Some("10k"))
        .unwrap();

    assert_eq!(request.city, "osaka");
    assert!(request.running);
    assert_eq!(request.period.map(|p| p.key), Some("evening"));
    assert_eq!(request.day, Some(DaySpec::Tomorrow));
    assert_eq!(request.distance.map(|p| p.display_name), Some("10K"));
    assert!(request.air_quality);
    assert!(!request.without_air_quality().air_quality);
}

#[tokio::test]
async fn test_current_view_by_default() {
    let provider = provider();

    let text = run(
        &provider,
        &LocationsConfig::default(),
        &request("tokyo", 0, false, None, None),
        fixture_now(),
    )
    .await
    .unwrap();

    assert!(text.starts_with("🌤️ Current weather in Tokyo"));
    assert_eq!(provider.requested_days(), vec![1]);
    assert_eq!(provider.air_quality_call_count(), 0);
}

#[tokio::test]
async fn test_forecast_view_for_days() {
    let provider = provider();

    let text = run(
        &provider,
        &LocationsConfig::default(),
        &request("Kyoto", 3, false, None, None),
        fixture_now(),
    )
    .await
    .unwrap();

    assert!(text.contains("3-day forecast for Kyoto"));
    assert_eq!(provider.requested_days(), vec![3]);
}

#[tokio::test]
async fn test_date_requests_enough_days() {
    let provider = provider();

    let text = run(
        &provider,
        &LocationsConfig::default(),
        &request("tokyo", 0, false, None, Some("day-after-tomorrow")),
        fixture_now(),
    )
    .await
    .unwrap();

    assert!(text.contains("Weather in Tokyo: Day after tomorrow"));
    assert!(text.contains("Jul 07 (Mon)"));
    assert_eq!(provider.requested_days(), vec![3]);
}

#[tokio::test]
async fn test_period_and_date_period_views() {
    let provider = provider();
    let locations = LocationsConfig::default();

    let period = run(
        &provider,
        &locations,
        &request("tokyo", 0, false, Some("morning"), None),
        fixture_now(),
    )
    .await
    .unwrap();
    assert!(period.contains("Morning weather in Tokyo"));
    assert!(!period.contains("Jul 06"));

    let date_period = run(
        &provider,
        &locations,
        &request("tokyo", 0, false, Some("morning"), Some("tomorrow")),
        fixture_now(),
    )
    .await
    .unwrap();
    assert!(date_period.contains("Weather in Tokyo: Tomorrow morning"));
    assert!(!date_period.contains("Jul 05"));
}

#[tokio::test]
async fn test_running_views_fetch_air_quality() {
    let provider = provider();

    let text = run(
        &provider,
        &LocationsConfig::default(),
        &request("tokyo", 0, true, None, None),
        fixture_now(),
    )
    .await
    .unwrap();

    assert!(text.contains("🏃 Running conditions in Tokyo"));
    assert!(text.contains("Running score: 70/100 (good)"));
    assert_eq!(provider.air_quality_call_count(), 1);
}

#[tokio::test]
async fn test_air_quality_failure_is_ignored() {
    let provider = FixtureProvider::new(fixture_weather(), None);

    let text = run(
        &provider,
        &LocationsConfig::default(),
        &request("tokyo", 0, true, None, None),
        fixture_now(),
    )
    .await
    .unwrap();

    assert!(text.contains("Running score: 100/100 (excellent)"));
    assert_eq!(provider.air_quality_call_count(), 1);
}

#[tokio::test]
async fn test_air_quality_can_be_skipped() {
    let provider = provider();
    let request = request("tokyo", 0, true, Some("morning"), None).without_air_quality();

    let text = run(&provider, &LocationsConfig::default(), &request, fixture_now())
        .await
        .unwrap();

    assert!(text.contains("Morning running conditions in Tokyo"));
    assert!(!text.contains("🌫️"));
    assert_eq!(provider.air_quality_call_count(), 0);
}

#[tokio::test]
async fn test_running_forecast_with_distance() {
    let provider = provider();
    let request = RunRequest::new("tokyo", 2, false, None, None, Some("half")).unwrap();

    let text = run(&provider, &LocationsConfig::default(), &request, fixture_now())
        .await
        .unwrap();

    assert!(text.contains("🏃 2-day running forecast for Tokyo (Half Marathon)"));
    assert!(text.contains("📏 Target distance: Half Marathon"));
}

#[tokio::test]
async fn test_custom_location() {
    let provider = provider();
    let locations = LocationsConfig::parse(
        "[locations.track]\nname = \"Komazawa Park\"\nlat = 35.6255\nlon = 139.6614\n",
    )
    .unwrap();

    let text = run(
        &provider,
        &locations,
        &request("track", 0, false, None, None),
        fixture_now(),
    )
    .await
    .unwrap();

    assert!(text.contains("Current weather in Komazawa Park"));
}

#[tokio::test]
async fn test_unknown_city_skips_provider() {
    let provider = provider();

    let error = run(
        &provider,
        &LocationsConfig::default(),
        &request("atlantis", 0, false, None, None),
        fixture_now(),
    )
    .await
    .unwrap_err();

    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert!(provider.requested_days().is_empty());
}

#[tokio::test]
async fn test_forecast_outage_is_reported() {
    let provider = FixtureProvider::unavailable();

    let error = run(
        &provider,
        &LocationsConfig::default(),
        &request("tokyo", 0, true, None, None),
        fixture_now(),
    )
    .await
    .unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
    assert!(error.message.contains("503"));
    assert_eq!(provider.air_quality_call_count(), 0);
}
