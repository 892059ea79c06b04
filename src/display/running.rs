// ABOUTME: Running views that score conditions and print advice
// ABOUTME: Covers current, multi-day, part-of-day, and date-scoped running reports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

use chrono::{NaiveDate, NaiveDateTime};
use runcast_core::models::{AirQualityData, WeatherData, WeatherSample};
use runcast_core::weather_codes::describe;
use runcast_intelligence::air_quality::{current_reading, hourly_reading};
use runcast_intelligence::thresholds::air_quality::PM25_GOOD_MAX;
use runcast_intelligence::windowing::{daily_sample, extract_hour};
use runcast_intelligence::{
    apply_dust_penalty, assess_for_distance, best_time, extract_day, extract_period_samples,
    AirQualityLevel, DaySpec, DistanceProfile, RunningCondition, TimePeriod, TimedAssessment,
};

use super::weather::{date_period_samples, precipitation_suffix, NO_DATE_DATA, NO_PERIOD_DATA};
use super::{
    distance_suffix, format_date, push_advice, push_conditions, push_distance_block,
    temperature_icon, Report,
};
use crate::logging::AppLogger;

/// Hour whose air-quality reading stands for a whole future day
pub const DAILY_AIR_QUALITY_HOUR: u32 = 12;

/// Inputs shared by every running view
#[derive(Debug, Clone, Copy)]
pub struct RunningOptions<'a> {
    /// Target race distance, if any
    pub profile: Option<&'static DistanceProfile>,
    /// Hourly air-quality payload, if it was fetched
    pub air_quality: Option<&'a AirQualityData>,
    /// Local time used to pick the current air-quality reading
    pub now: NaiveDateTime,
}

impl<'a> RunningOptions<'a> {
    /// Options without a distance or air-quality data
    #[must_use]
    pub const fn new(now: NaiveDateTime) -> Self {
        Self {
            profile: None,
            air_quality: None,
            now,
        }
    }

    /// Score for a target distance
    #[must_use]
    pub const fn with_profile(mut self, profile: Option<&'static DistanceProfile>) -> Self {
        self.profile = profile;
        self
    }

    /// Apply dust and PM2.5 penalties from `air_quality`
    #[must_use]
    pub const fn with_air_quality(mut self, air_quality: Option<&'a AirQualityData>) -> Self {
        self.air_quality = air_quality;
        self
    }

    fn current_reading(&self) -> Option<AirQualityLevel> {
        self.air_quality
            .and_then(|payload| current_reading(payload, self.now))
    }

    fn reading_for_day(&self, date: &str, day: DaySpec) -> Option<AirQualityLevel> {
        if day.offset() == 0 {
            return self.current_reading();
        }
        let payload = self.air_quality?;
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()?;
        hourly_reading(payload, date, DAILY_AIR_QUALITY_HOUR)
    }

    fn reading_for_sample(&self, sample: &WeatherSample) -> Option<AirQualityLevel> {
        let payload = self.air_quality?;
        let date = NaiveDate::parse_from_str(sample.date_label(), "%Y-%m-%d").ok()?;
        hourly_reading(payload, date, extract_hour(&sample.time)?)
    }

    fn score(
        &self,
        sample: &WeatherSample,
        reading: Option<&AirQualityLevel>,
    ) -> RunningCondition {
        let condition = apply_dust_penalty(
            assess_for_distance(sample, self.profile),
            reading,
            self.profile,
        );
        AppLogger::log_assessment(
            &sample.time,
            condition.score,
            condition.level.as_str(),
            self.profile.map(|p| p.key.as_str()),
        );
        condition
    }
}

/// Running assessment of the current conditions
#[must_use]
pub fn render_running_current(
    weather: &WeatherData,
    city: &str,
    options: &RunningOptions<'_>,
) -> String {
    let sample = weather.current.to_sample();
    let reading = options.current_reading();
    let condition = options.score(&sample, reading.as_ref());

    let mut report = Report::titled(format!(
        "🏃 Running conditions in {city}{}",
        distance_suffix(options.profile)
    ));
    push_distance_block(&mut report, options.profile);
    push_score(&mut report, &condition);
    push_conditions(&mut report, &sample);
    push_air_quality(&mut report, reading.as_ref());
    push_advice(&mut report, &condition);
    report.finish()
}

/// Running outlook for the next `days` days from daily summaries
#[must_use]
pub fn render_running_forecast(
    weather: &WeatherData,
    city: &str,
    days: usize,
    options: &RunningOptions<'_>,
) -> String {
    let mut report = Report::titled(format!(
        "🏃 {days}-day running forecast for {city}{}",
        distance_suffix(options.profile)
    ));
    push_distance_block(&mut report, options.profile);

    let now = options.score(&weather.current.to_sample(), None);
    report.line(format!(
        "📅 Now: {:.1}°C | {} | Score: {}/100",
        weather.current.temperature,
        describe(weather.current.weather_code),
        now.score
    ));
    report.rule();

    let samples: Vec<WeatherSample> = (0..days)
        .filter_map(|index| daily_sample(&weather.daily, index))
        .collect();
    for (position, sample) in samples.iter().enumerate() {
        let condition = options.score(sample, None);
        report.line(format!("📅 {}", format_date(&sample.time)));
        report.line(format!(
            "   🌡️ {} {:.1}°C average",
            temperature_icon(sample.temperature),
            sample.temperature
        ));
        report.line(format!(
            "   🏆 Running score: {}/100 ({})",
            condition.score, condition.level
        ));
        report.line(format!(
            "   ☁️ {}{}",
            describe(sample.weather_code),
            precipitation_suffix(sample.precipitation)
        ));
        if position + 1 < samples.len() {
            report.separator();
        }
    }

    report.finish()
}

/// Hour-by-hour running scores for a part of the day over `days` days
#[must_use]
pub fn render_running_period(
    weather: &WeatherData,
    city: &str,
    period: &TimePeriod,
    days: usize,
    options: &RunningOptions<'_>,
) -> String {
    let samples = extract_period_samples(&weather.hourly, period.key, days);
    let title = format!(
        "🏃 {} running conditions in {city}{}",
        period.display_name,
        distance_suffix(options.profile)
    );
    render_hourly_running(title, period, &samples, options)
}

/// Running assessment of one relative day from its daily summary
#[must_use]
pub fn render_running_date(
    weather: &WeatherData,
    city: &str,
    day: DaySpec,
    options: &RunningOptions<'_>,
) -> String {
    if !weather.daily.has_required_at(day.offset()) {
        return format!("{NO_DATE_DATA}\n");
    }
    let view = extract_day(weather, day.offset());
    let Some(sample) = daily_sample(&view.daily, 0) else {
        return format!("{NO_DATE_DATA}\n");
    };
    let reading = options.reading_for_day(&sample.time, day);
    let condition = options.score(&sample, reading.as_ref());
    let daily = &view.daily;

    let mut report = Report::titled(format!(
        "🏃 Running conditions in {city}: {}{}",
        day.display_name(),
        distance_suffix(options.profile)
    ));
    push_distance_block(&mut report, options.profile);
    report.line(format!(
        "📅 {} ({})",
        format_date(&sample.time),
        day.display_name()
    ));
    push_score(&mut report, &condition);
    report.line(format!(
        "🌡️ {} {:.1}°C to {:.1}°C",
        temperature_icon(sample.temperature),
        daily.temperature_min[0],
        daily.temperature_max[0]
    ));
    report.line(format!("☁️ {}", describe(sample.weather_code)));
    report.line(format!("🌬️ Max wind: {:.1} m/s", sample.wind_speed));
    if sample.precipitation > 0.0 {
        report.line(format!("🌧️ Precipitation: {:.1} mm", sample.precipitation));
    }
    push_air_quality(&mut report, reading.as_ref());
    push_advice(&mut report, &condition);
    report.finish()
}

/// Hour-by-hour running scores for a part of one relative day
#[must_use]
pub fn render_running_date_period(
    weather: &WeatherData,
    city: &str,
    day: DaySpec,
    period: &TimePeriod,
    options: &RunningOptions<'_>,
) -> String {
    let samples = date_period_samples(weather, day, period);
    let title = format!(
        "🏃 Running conditions in {city}: {} {}{}",
        day.display_name(),
        period.display_name.to_lowercase(),
        distance_suffix(options.profile)
    );
    render_hourly_running(title, period, &samples, options)
}

fn render_hourly_running(
    title: String,
    period: &TimePeriod,
    samples: &[WeatherSample],
    options: &RunningOptions<'_>,
) -> String {
    if samples.is_empty() {
        return format!("{NO_PERIOD_DATA}\n");
    }

    let readings: Vec<Option<AirQualityLevel>> = samples
        .iter()
        .map(|sample| options.reading_for_sample(sample))
        .collect();
    let assessments: Vec<TimedAssessment> = samples
        .iter()
        .zip(&readings)
        .map(|(sample, reading)| TimedAssessment {
            sample: sample.clone(),
            condition: options.score(sample, reading.as_ref()),
        })
        .collect();

    let mut report = Report::titled(title);
    push_distance_block(&mut report, options.profile);
    report.line(format!(
        "⏰ {} ({}:00-{}:00)",
        period.display_name, period.start_hour, period.end_hour
    ));
    report.rule();

    for (timed, reading) in assessments.iter().zip(&readings) {
        let (sample, condition) = (&timed.sample, &timed.condition);
        report.line(format!(
            "🕐 {} {}:00  {}/100 ({})",
            format_date(&sample.time),
            sample.hour_label(),
            condition.score,
            condition.level
        ));
        report.line(format!(
            "   🌡️ {:.1}°C (feels like {:.1}°C) | 💧 {}%",
            sample.temperature, sample.apparent_temperature, sample.humidity
        ));
        report.line(format!(
            "   ☁️ {}{}{}",
            describe(sample.weather_code),
            precipitation_suffix(sample.precipitation),
            dust_suffix(reading.as_ref())
        ));
        report.separator();
    }

    if let Some(best) = best_time(&assessments) {
        report.line(format!(
            "🏆 Best time: {} {}:00 (score {}/100)",
            format_date(&best.sample.time),
            best.sample.hour_label(),
            best.condition.score
        ));
        report.line(format!("💡 {}", best.condition.recommendation));
        report.section("⚠️ Warnings:", &best.condition.warnings, "");
    }

    report.finish()
}

/// ` | 🌫️ Light` when the hour has any dust
fn dust_suffix(reading: Option<&AirQualityLevel>) -> String {
    reading
        .filter(|reading| reading.level > 0)
        .map_or_else(String::new, |reading| format!(" | 🌫️ {}", reading.display_name))
}

fn push_score(report: &mut Report, condition: &RunningCondition) {
    report.line(format!(
        "🏆 Running score: {}/100 ({})",
        condition.score, condition.level
    ));
    report.line(format!("💡 {}", condition.recommendation));
    report.rule();
}

fn push_air_quality(report: &mut Report, reading: Option<&AirQualityLevel>) {
    let Some(reading) = reading else {
        return;
    };
    if reading.level == 0 && reading.pm2_5 <= PM25_GOOD_MAX {
        return;
    }
    report.line(format!(
        "🌫️ Yellow dust: {} ({:.0} µg/m³)",
        reading.display_name, reading.dust
    ));
    report.line(format!(
        "   PM2.5: {:.0} µg/m³ / PM10: {:.0} µg/m³",
        reading.pm2_5, reading.pm10
    ));
}
