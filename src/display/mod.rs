// ABOUTME: Terminal rendering of weather and running assessments
// ABOUTME: Shared report builder, date formatting, and temperature markers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

//! # Display
//!
//! Every view is a pure function returning the text to print, so views can
//! be tested without capturing stdout.

/// Running views
pub mod running;
/// Plain weather views
pub mod weather;

use chrono::NaiveDate;
use runcast_core::models::WeatherSample;
use runcast_core::weather_codes::{compass_direction, describe};
use runcast_intelligence::{DistanceProfile, RunningCondition};

pub use running::{
    render_running_current, render_running_date, render_running_date_period,
    render_running_forecast, render_running_period,
};
pub use weather::{
    render_current, render_date, render_date_period, render_forecast, render_period,
};

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";
const THIN_RULE: &str = "   ────────────────────────────";

/// Line-oriented text builder for a single view
#[derive(Debug, Default)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    /// Start a report with a title followed by a rule
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        let mut report = Self::default();
        report.line(title);
        report.rule();
        report
    }

    /// Append a line
    pub fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    /// Append a heavy rule
    pub fn rule(&mut self) {
        self.line(RULE);
    }

    /// Append a light separator
    pub fn separator(&mut self) {
        self.line(THIN_RULE);
    }

    /// Append a heading and one indented line per item, preceded by a rule
    pub fn section<S: AsRef<str>>(&mut self, heading: &str, items: &[S], bullet: &str) {
        if items.is_empty() {
            return;
        }
        self.rule();
        self.line(heading);
        for item in items {
            self.line(format!("   {bullet}{}", item.as_ref()));
        }
    }

    /// Close with a rule and join into printable text
    #[must_use]
    pub fn finish(mut self) -> String {
        self.rule();
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// Marker shown before a temperature range
#[must_use]
pub fn temperature_icon(temperature: f64) -> &'static str {
    match temperature {
        t if t >= 30.0 => "🔥",
        t if t >= 25.0 => "☀️",
        t if t >= 20.0 => "🌤️",
        t if t >= 15.0 => "🌥️",
        t if t >= 10.0 => "☁️",
        _ => "❄️",
    }
}

/// Format a `YYYY-MM-DD...` timestamp as `Jul 05 (Sat)`
///
/// Text that does not start with a valid date is returned unchanged.
#[must_use]
pub fn format_date(timestamp: &str) -> String {
    timestamp
        .get(..10)
        .and_then(|date| NaiveDate::parse_from_str(date, "%Y-%m-%d").ok())
        .map_or_else(
            || timestamp.to_owned(),
            |date| date.format("%b %d (%a)").to_string(),
        )
}

/// Title suffix naming the target distance
fn distance_suffix(profile: Option<&DistanceProfile>) -> String {
    profile.map_or_else(String::new, |p| format!(" ({})", p.display_name))
}

/// Target distance block shown under the title
fn push_distance_block(report: &mut Report, profile: Option<&DistanceProfile>) {
    if let Some(profile) = profile {
        report.line(format!(
            "📏 Target distance: {} ({:.1}-{:.1} km)",
            profile.display_name, profile.min_km, profile.max_km
        ));
        report.line(format!("💭 {}", profile.description));
        report.rule();
    }
}

/// Detailed conditions of one sample
fn push_conditions(report: &mut Report, sample: &WeatherSample) {
    report.line(format!(
        "🌡️ Temperature: {:.1}°C (feels like {:.1}°C)",
        sample.temperature, sample.apparent_temperature
    ));
    report.line(format!("💧 Humidity: {}%", sample.humidity));
    report.line(format!(
        "🌬️ Wind: {} {:.1} m/s",
        compass_direction(sample.wind_direction),
        sample.wind_speed
    ));
    report.line(format!("☁️ Weather: {}", describe(sample.weather_code)));
    if sample.precipitation > 0.0 {
        report.line(format!("🌧️ Precipitation: {:.1} mm", sample.precipitation));
    }
}

/// Clothing and warning lists of an assessment
fn push_advice(report: &mut Report, condition: &RunningCondition) {
    report.section("👕 Recommended gear:", &condition.clothing, "• ");
    report.section("⚠️ Warnings:", &condition.warnings, "");
}
