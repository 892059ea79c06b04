// ABOUTME: Plain weather views for current conditions, forecasts, and parts of the day
// ABOUTME: Renders text without any running assessment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

use runcast_core::models::{WeatherData, WeatherSample};
use runcast_core::weather_codes::describe;
use runcast_intelligence::{
    extract_day, extract_period_samples, extract_period_samples_for_date, DaySpec, TimePeriod,
};

use super::{format_date, push_conditions, temperature_icon, Report};

/// Shown when a part of the day has no usable hourly samples
pub const NO_PERIOD_DATA: &str = "No forecast data found for the requested time of day";
/// Shown when the forecast does not reach the requested date
pub const NO_DATE_DATA: &str = "No forecast data found for the requested date";

/// Current conditions
#[must_use]
pub fn render_current(weather: &WeatherData, city: &str) -> String {
    let mut report = Report::titled(format!("🌤️ Current weather in {city}"));
    push_conditions(&mut report, &weather.current.to_sample());
    report.finish()
}

/// Current conditions followed by up to `days` daily summaries
#[must_use]
pub fn render_forecast(weather: &WeatherData, city: &str, days: usize) -> String {
    let mut report = Report::titled(format!("🌤️ {days}-day forecast for {city}"));
    report.line(format!(
        "📅 Now: {:.1}°C | {}",
        weather.current.temperature,
        describe(weather.current.weather_code)
    ));
    report.rule();

    let daily = &weather.daily;
    let shown: Vec<usize> = (0..days.min(daily.len()))
        .filter(|index| daily.has_required_at(*index))
        .collect();
    for (position, index) in shown.iter().enumerate() {
        let (max, min) = (daily.temperature_max[*index], daily.temperature_min[*index]);
        report.line(format!("📅 {}", format_date(&daily.time[*index])));
        report.line(format!(
            "   🌡️ {} {min:.1}°C to {max:.1}°C",
            temperature_icon((max + min) / 2.0)
        ));
        report.line(format!("   ☁️ {}", describe(daily.weather_code[*index])));
        report.line(format!("   🌬️ Max wind: {:.1} m/s", daily.wind_speed_max[*index]));
        if daily.precipitation_sum[*index] > 0.0 {
            report.line(format!(
                "   🌧️ Precipitation: {:.1} mm",
                daily.precipitation_sum[*index]
            ));
        }
        if position + 1 < shown.len() {
            report.separator();
        }
    }

    report.finish()
}

/// Hourly samples of a part of the day over `days` days
#[must_use]
pub fn render_period(
    weather: &WeatherData,
    city: &str,
    period: &TimePeriod,
    days: usize,
) -> String {
    let samples = extract_period_samples(&weather.hourly, period.key, days);
    if samples.is_empty() {
        return format!("{NO_PERIOD_DATA}\n");
    }

    let mut report = Report::titled(format!("🌤️ {} weather in {city}", period.display_name));
    push_hourly_lines(&mut report, &samples);
    report.finish()
}

/// Daily summary for one relative day
#[must_use]
pub fn render_date(weather: &WeatherData, city: &str, day: DaySpec) -> String {
    if !weather.daily.has_required_at(day.offset()) {
        return format!("{NO_DATE_DATA}\n");
    }
    // Narrowed views hold the requested day at index 0, and so does the
    // unnarrowed forecast for today
    let view = extract_day(weather, day.offset());
    let daily = &view.daily;

    let mut report = Report::titled(format!("🌤️ Weather in {city}: {}", day.display_name()));
    report.line(format!(
        "📅 {} ({})",
        format_date(&daily.time[0]),
        day.display_name()
    ));
    report.line(format!(
        "🌡️ {:.1}°C to {:.1}°C",
        daily.temperature_min[0], daily.temperature_max[0]
    ));
    report.line(format!("☁️ {}", describe(daily.weather_code[0])));
    if daily.precipitation_sum[0] > 0.0 {
        report.line(format!(
            "🌧️ Precipitation: {:.1} mm",
            daily.precipitation_sum[0]
        ));
    }
    if let Some(probability) = daily.precipitation_probability_max.first() {
        report.line(format!("☔ Chance of rain: {probability:.0}%"));
    }
    if let Some(uv) = daily.uv_index_max.first() {
        report.line(format!("🕶️ Max UV index: {uv:.1}"));
    }
    if let (Some(sunrise), Some(sunset)) = (daily.sunrise.first(), daily.sunset.first()) {
        report.line(format!(
            "🌅 Sunrise {} / Sunset {}",
            clock_time(sunrise),
            clock_time(sunset)
        ));
    }
    report.finish()
}

/// Hourly samples of a part of one relative day
#[must_use]
pub fn render_date_period(
    weather: &WeatherData,
    city: &str,
    day: DaySpec,
    period: &TimePeriod,
) -> String {
    let samples = date_period_samples(weather, day, period);
    if samples.is_empty() {
        return format!("{NO_PERIOD_DATA}\n");
    }

    let mut report = Report::titled(format!(
        "🌤️ Weather in {city}: {} {}",
        day.display_name(),
        period.display_name.to_lowercase()
    ));
    push_hourly_lines(&mut report, &samples);
    report.finish()
}

/// Hourly samples of `period` on the calendar date of `day`
pub(super) fn date_period_samples(
    weather: &WeatherData,
    day: DaySpec,
    period: &TimePeriod,
) -> Vec<WeatherSample> {
    weather
        .daily
        .time
        .get(day.offset())
        .filter(|_| weather.daily.has_required_at(day.offset()))
        .map_or_else(Vec::new, |date| {
            extract_period_samples_for_date(&weather.hourly, period.key, date)
        })
}

fn push_hourly_lines(report: &mut Report, samples: &[WeatherSample]) {
    for (index, sample) in samples.iter().enumerate() {
        report.line(format!(
            "📅 {} {}:00  {:.1}°C | {}{}",
            format_date(&sample.time),
            sample.hour_label(),
            sample.temperature,
            describe(sample.weather_code),
            precipitation_suffix(sample.precipitation)
        ));
        if (index + 1) % 3 == 0 && index + 1 < samples.len() {
            report.separator();
        }
    }
}

/// ` | 🌧️ 1.2mm` when any precipitation is expected
pub(super) fn precipitation_suffix(precipitation: f64) -> String {
    if precipitation > 0.0 {
        format!(" | 🌧️ {precipitation:.1}mm")
    } else {
        String::new()
    }
}

/// `HH:MM` part of a local timestamp
fn clock_time(timestamp: &str) -> &str {
    timestamp.get(11..16).unwrap_or(timestamp)
}
