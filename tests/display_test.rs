// ABOUTME: Integration tests for the plain weather and running views
// ABOUTME: Renders fixture forecasts and checks scores, dates, and advice in the output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::{fixture_air_quality, fixture_now, fixture_weather};
use runcast::display::running::RunningOptions;
use runcast::display::weather::{NO_DATE_DATA, NO_PERIOD_DATA};
use runcast::display::{
    render_current, render_date, render_date_period, render_forecast, render_period,
    render_running_current, render_running_date, render_running_date_period,
    render_running_forecast, render_running_period,
};
use runcast_intelligence::{DaySpec, DistanceKey, TimePeriod};

fn morning() -> &'static TimePeriod {
    TimePeriod::from_key("morning").unwrap()
}

#[test]
fn test_current_weather_view() {
    let text = render_current(&fixture_weather(), "Tokyo");

    assert!(text.starts_with("🌤️ Current weather in Tokyo\n"));
    assert!(text.contains("Temperature: 18.0°C (feels like 18.0°C)"));
    assert!(text.contains("💧 Humidity: 50%"));
    assert!(text.contains("🌬️ Wind: E 2.0 m/s"));
    assert!(text.contains("☁️ Weather: Mainly clear"));
    assert!(!text.contains("Precipitation"));
    assert!(text.ends_with('\n'));
}

#[test]
fn test_forecast_view_limits_days() {
    let text = render_forecast(&fixture_weather(), "Tokyo", 2);

    assert!(text.contains("2-day forecast for Tokyo"));
    assert!(text.contains("📅 Now: 18.0°C | Mainly clear"));
    assert!(text.contains("Jul 05 (Sat)"));
    assert!(text.contains("Jul 06 (Sun)"));
    assert!(!text.contains("Jul 07"));
    assert!(text.contains("24.0°C to 31.0°C"));
    assert!(text.contains("Precipitation: 2.5 mm"));
}

#[test]
fn test_forecast_view_stops_at_available_days() {
    let text = render_forecast(&fixture_weather(), "Tokyo", 7);

    assert!(text.contains("Jul 07 (Mon)"));
    assert!(!text.contains("Jul 08"));
}

#[test]
fn test_period_view_takes_first_matching_hours() {
    let weather = fixture_weather();

    let one_day = render_period(&weather, "Tokyo", morning(), 1);
    assert!(one_day.contains("🌤️ Morning weather in Tokyo"));
    assert!(one_day.contains("Jul 05 (Sat) 05:00  17.5°C"));
    assert!(one_day.contains("Jul 05 (Sat) 09:00  19.5°C"));
    assert!(!one_day.contains("04:00"));
    assert!(!one_day.contains("Jul 06"));

    let two_days = render_period(&weather, "Tokyo", morning(), 2);
    assert!(two_days.contains("Jul 06 (Sun) 07:00  31.0°C | Mainly clear | 🌧️ 2.0mm"));
}

#[test]
fn test_period_view_without_hourly_data() {
    let mut weather = fixture_weather();
    weather.hourly.time.clear();

    let text = render_period(&weather, "Tokyo", morning(), 1);

    assert_eq!(text, format!("{NO_PERIOD_DATA}\n"));
}

#[test]
fn test_date_view_shows_requested_day() {
    let text = render_date(&fixture_weather(), "Tokyo", DaySpec::Tomorrow);

    assert!(text.contains("🌤️ Weather in Tokyo: Tomorrow"));
    assert!(text.contains("📅 Jul 06 (Sun) (Tomorrow)"));
    assert!(text.contains("24.0°C to 31.0°C"));
    assert!(text.contains("☁️ Light rain"));
    assert!(text.contains("Chance of rain: 80%"));
    assert!(text.contains("Max UV index: 6.0"));
    assert!(text.contains("Sunrise 04:31 / Sunset 19:00"));
    assert!(!text.contains("Jul 05"));
}

#[test]
fn test_date_view_beyond_forecast() {
    let mut weather = fixture_weather();
    weather.daily.time.truncate(2);

    let text = render_date(&weather, "Tokyo", DaySpec::DayAfterTomorrow);

    assert_eq!(text, format!("{NO_DATE_DATA}\n"));
}

#[test]
fn test_date_period_view_uses_that_date() {
    let text = render_date_period(&fixture_weather(), "Tokyo", DaySpec::Tomorrow, morning());

    assert!(text.contains("Weather in Tokyo: Tomorrow morning"));
    assert!(text.contains("Jul 06 (Sun) 05:00  31.0°C"));
    assert!(text.contains("Jul 06 (Sun) 09:00"));
    assert!(!text.contains("Jul 05"));
    assert_eq!(text.matches("Jul 06 (Sun)").count(), 5);
}

#[test]
fn test_date_period_view_without_hours_for_date() {
    let mut weather = fixture_weather();
    weather.hourly.time.truncate(48);

    let text = render_date_period(&weather, "Tokyo", DaySpec::DayAfterTomorrow, morning());

    assert_eq!(text, format!("{NO_PERIOD_DATA}\n"));
}

#[test]
fn test_running_current_without_air_quality() {
    let options = RunningOptions::new(fixture_now());

    let text = render_running_current(&fixture_weather(), "Tokyo", &options);

    assert!(text.starts_with("🏃 Running conditions in Tokyo\n"));
    assert!(text.contains("🏆 Running score: 100/100 (excellent)"));
    assert!(text.contains("💡 Perfect weather for running!"));
    assert!(text.contains("👕 Recommended gear:"));
    assert!(text.contains("   • Thin long sleeves"));
    assert!(!text.contains("Warnings"));
    assert!(!text.contains("Yellow dust"));
}

#[test]
fn test_running_current_with_heavy_dust() {
    let air = fixture_air_quality();
    let options = RunningOptions::new(fixture_now()).with_air_quality(Some(&air));

    let text = render_running_current(&fixture_weather(), "Tokyo", &options);

    assert!(text.contains("🏆 Running score: 70/100 (good)"));
    assert!(text.contains("🌫️ Yellow dust: Heavy (250 µg/m³)"));
    assert!(text.contains("PM2.5: 20 µg/m³ / PM10: 30 µg/m³"));
    assert!(text.contains("wearing a mask is recommended"));
    assert!(text.contains("Consider indoor training"));
    assert!(text.contains("• Sports mask"));
    assert!(text.contains("• Sunglasses (eye protection)"));
}

#[test]
fn test_running_current_for_full_marathon() {
    let options =
        RunningOptions::new(fixture_now()).with_profile(Some(DistanceKey::Full.profile()));

    let text = render_running_current(&fixture_weather(), "Tokyo", &options);

    assert!(text.starts_with("🏃 Running conditions in Tokyo (Full Marathon)\n"));
    assert!(text.contains("📏 Target distance: Full Marathon (40.0-44.0 km)"));
    assert!(text.contains("🏆 Running score: 50/100 (fair)"));
    assert!(text.contains("Run the Full Marathon with care"));
}

#[test]
fn test_running_forecast_scores_daily_summaries() {
    let air = fixture_air_quality();
    let options = RunningOptions::new(fixture_now()).with_air_quality(Some(&air));

    let text = render_running_forecast(&fixture_weather(), "Tokyo", 3, &options);

    assert!(text.contains("🏃 3-day running forecast for Tokyo"));
    assert!(text.contains("📅 Now: 18.0°C | Mainly clear | Score: 100/100"));
    assert!(text.contains("🏆 Running score: 100/100 (excellent)"));
    assert!(text.contains("🏆 Running score: 75/100 (good)"));
    assert!(text.contains("🏆 Running score: 60/100 (good)"));
    // Daily outlook ignores dust
    assert!(!text.contains("Yellow dust"));
}

#[test]
fn test_running_period_picks_best_hour() {
    let air = fixture_air_quality();
    let options = RunningOptions::new(fixture_now()).with_air_quality(Some(&air));

    let text = render_running_period(&fixture_weather(), "Tokyo", morning(), 1, &options);

    assert!(text.contains("🏃 Morning running conditions in Tokyo"));
    assert!(text.contains("⏰ Morning (5:00-9:00)"));
    assert!(text.contains("🕐 Jul 05 (Sat) 05:00  80/100 (excellent)"));
    assert!(text.contains("🕐 Jul 05 (Sat) 07:00  70/100 (good)"));
    assert!(text.contains("Mainly clear | 🌫️ Heavy"));
    assert!(text.contains("🏆 Best time: Jul 05 (Sat) 06:00 (score 100/100)"));
}

#[test]
fn test_running_period_ties_keep_earliest_hour() {
    let options = RunningOptions::new(fixture_now());

    let text = render_running_period(&fixture_weather(), "Tokyo", morning(), 1, &options);

    // Without dust, 06:00 to 09:00 all score 100
    assert!(text.contains("🕐 Jul 05 (Sat) 07:00  100/100 (excellent)"));
    assert!(text.contains("🏆 Best time: Jul 05 (Sat) 06:00 (score 100/100)"));
}

#[test]
fn test_running_date_uses_noon_air_quality() {
    let air = fixture_air_quality();
    let options = RunningOptions::new(fixture_now()).with_air_quality(Some(&air));

    let text = render_running_date(&fixture_weather(), "Tokyo", DaySpec::Tomorrow, &options);

    assert!(text.contains("🏃 Running conditions in Tokyo: Tomorrow"));
    assert!(text.contains("📅 Jul 06 (Sun) (Tomorrow)"));
    assert!(text.contains("🏆 Running score: 45/100 (fair)"));
    assert!(text.contains("24.0°C to 31.0°C"));
    assert!(text.contains("🌫️ Yellow dust: Moderate (120 µg/m³)"));
    assert!(text.contains("PM2.5: 55 µg/m³"));
    assert!(text.contains("Rain: watch for slippery surfaces"));
    assert!(text.contains("PM2.5 elevated"));
    assert!(!text.contains("PM2.5 at alert level"));
    assert!(text.contains("• Sports mask"));
}

#[test]
fn test_running_date_today_uses_current_air_quality() {
    let air = fixture_air_quality();
    let options = RunningOptions::new(fixture_now()).with_air_quality(Some(&air));

    let text = render_running_date(&fixture_weather(), "Tokyo", DaySpec::Today, &options);

    assert!(text.contains("📅 Jul 05 (Sat) (Today)"));
    assert!(text.contains("🏆 Running score: 70/100 (good)"));
    assert!(text.contains("Yellow dust: Heavy"));
}

#[test]
fn test_running_date_beyond_forecast() {
    let mut weather = fixture_weather();
    weather.daily.time.truncate(1);
    let options = RunningOptions::new(fixture_now());

    let text = render_running_date(&weather, "Tokyo", DaySpec::Tomorrow, &options);

    assert_eq!(text, format!("{NO_DATE_DATA}\n"));
}

#[test]
fn test_running_date_period_scores_that_date() {
    let air = fixture_air_quality();
    let options = RunningOptions::new(fixture_now())
        .with_air_quality(Some(&air))
        .with_profile(Some(DistanceKey::FiveK.profile()));

    let text = render_running_date_period(
        &fixture_weather(),
        "Tokyo",
        DaySpec::Tomorrow,
        morning(),
        &options,
    );

    assert!(text.contains("Running conditions in Tokyo: Tomorrow morning (5K)"));
    assert!(text.contains("🕐 Jul 06 (Sun) 05:00  65/100 (good)"));
    assert!(text.contains("🕐 Jul 06 (Sun) 07:00  40/100 (fair)"));
    assert!(!text.contains("Jul 05"));
    assert!(text.contains("🏆 Best time: Jul 06 (Sun) 05:00 (score 65/100)"));
    assert!(text.contains("💡 Good weather for a 5K"));
    assert!(text.contains("Heatstroke risk"));
}
