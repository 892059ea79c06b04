// ABOUTME: Layered running condition scoring engine
// ABOUTME: Base weather rules, distance-profile adjustment, and dust post-processing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

//! Running condition scoring
//!
//! An assessment is built in up to three layers, each taking the previous
//! result:
//!
//! 1. [`assess`] starts at 100 and applies independent weather deductions.
//! 2. [`assess_for_distance`] subtracts the profile's weights and adds
//!    long-distance warnings and gear.
//! 3. [`apply_dust_penalty`] prices dust and PM2.5 on top of either.
//!
//! The level is a function of the score alone; warnings never change it.

use runcast_core::models::WeatherSample;
use runcast_core::weather_codes::{SHOWER_CODE_MIN, THUNDERSTORM_CODE_MIN};
use serde::Serialize;

use crate::air_quality::AirQualityLevel;
use crate::condition::RunningCondition;
use crate::distance::{dust_multiplier, DistanceKey, DistanceProfile};
use crate::thresholds::{
    air_quality::{AVOID_SEVERITY, INDOOR_SEVERITY, MASK_SEVERITY, PM25_ELEVATED_MAX, PM25_HIGH_MAX},
    apparent_temperature, distance, humidity, precipitation, score::MAX_SCORE, temperature,
    weather_code, wind,
};

const HEATSTROKE_WARNING: &str = "Heatstroke risk: apparent temperature is too high";
const HUMIDITY_WARNING: &str = "High humidity: sweat will not evaporate easily";
const SPORTS_MASK: &str = "Sports mask";

/// Base assessment of one sample
#[must_use]
pub fn assess(sample: &WeatherSample) -> RunningCondition {
    let (temperature_penalty, temperature_warning, clothing) =
        temperature_rule(sample.temperature);

    let rules = [
        (temperature_penalty, temperature_warning),
        apparent_temperature_rule(sample.apparent_temperature),
        humidity_rule(sample.humidity),
        wind_rule(sample.wind_speed),
        precipitation_rule(sample.precipitation),
        weather_code_rule(sample.weather_code),
    ];

    let score = MAX_SCORE - rules.iter().map(|(penalty, _)| penalty).sum::<i32>();
    let warnings = rules
        .iter()
        .filter_map(|(_, warning)| warning.map(str::to_owned))
        .collect();

    RunningCondition::new(
        score,
        warnings,
        clothing.iter().copied().map(str::to_owned).collect(),
    )
}

/// Penalty, warning and clothing set for the air temperature tier
fn temperature_rule(celsius: f64) -> (i32, Option<&'static str>, &'static [&'static str]) {
    match celsius {
        t if t < temperature::FREEZING_BELOW => (
            temperature::FREEZING_PENALTY,
            Some("Low temperature: dress warmly against the cold"),
            &["Long sleeves", "Long pants", "Gloves", "Hat"],
        ),
        t if t < temperature::COLD_BELOW => (
            temperature::COLD_PENALTY,
            Some("Cold: dress in layers to regulate body temperature"),
            &["Long sleeves", "Long pants", "Light gloves"],
        ),
        t if t < temperature::COOL_BELOW => {
            (temperature::COOL_PENALTY, None, &["Long sleeves", "Long pants"])
        }
        t if t < temperature::MILD_BELOW => (0, None, &["Thin long sleeves", "Shorts"]),
        t if t < temperature::WARM_BELOW => (0, None, &["Thin short sleeves", "Shorts"]),
        t if t < temperature::HOT_BELOW => (0, None, &["Thin short sleeves", "Hat recommended"]),
        _ => (
            temperature::EXTREME_HEAT_PENALTY,
            Some("High temperature: run in the cool early morning or evening"),
            &["Thin short sleeves", "Hat required", "Sunglasses"],
        ),
    }
}

fn apparent_temperature_rule(celsius: f64) -> (i32, Option<&'static str>) {
    match celsius {
        t if t > apparent_temperature::SEVERE_ABOVE => {
            (apparent_temperature::SEVERE_PENALTY, Some(HEATSTROKE_WARNING))
        }
        t if t > apparent_temperature::ELEVATED_ABOVE => {
            (apparent_temperature::ELEVATED_PENALTY, Some(HEATSTROKE_WARNING))
        }
        _ => (0, None),
    }
}

fn humidity_rule(percent: i32) -> (i32, Option<&'static str>) {
    match percent {
        h if h > humidity::VERY_HIGH_ABOVE => (humidity::VERY_HIGH_PENALTY, Some(HUMIDITY_WARNING)),
        h if h > humidity::HIGH_ABOVE => (humidity::HIGH_PENALTY, Some(HUMIDITY_WARNING)),
        _ => (0, None),
    }
}

fn wind_rule(speed: f64) -> (i32, Option<&'static str>) {
    match speed {
        w if w > wind::STRONG_ABOVE => (
            wind::STRONG_PENALTY,
            Some("Strong wind: risk of falls and injury"),
        ),
        w if w > wind::MODERATE_ABOVE => (
            wind::MODERATE_PENALTY,
            Some("Windy: take extra care while running"),
        ),
        _ => (0, None),
    }
}

fn precipitation_rule(millimetres: f64) -> (i32, Option<&'static str>) {
    match millimetres {
        p if p > precipitation::HEAVY_ABOVE => (
            precipitation::HEAVY_PENALTY,
            Some("Heavy rain: running is not recommended"),
        ),
        p if p > precipitation::RAIN_ABOVE => (
            precipitation::RAIN_PENALTY,
            Some("Rain: watch for slippery surfaces"),
        ),
        p if p > precipitation::LIGHT_ABOVE => (
            precipitation::LIGHT_PENALTY,
            Some("Light rain: light rain gear is advisable"),
        ),
        _ => (0, None),
    }
}

fn weather_code_rule(code: u16) -> (i32, Option<&'static str>) {
    match code {
        c if c >= THUNDERSTORM_CODE_MIN => (
            weather_code::THUNDERSTORM_PENALTY,
            Some("Thunderstorm: do not run outdoors"),
        ),
        c if c >= SHOWER_CODE_MIN => (
            weather_code::SHOWER_PENALTY,
            Some("Showers: watch for sudden rain"),
        ),
        _ => (0, None),
    }
}

/// Assessment tuned to a target distance
///
/// Without a profile this is exactly [`assess`].
#[must_use]
pub fn assess_for_distance(
    sample: &WeatherSample,
    profile: Option<&DistanceProfile>,
) -> RunningCondition {
    let mut condition = assess(sample);
    let Some(profile) = profile else {
        return condition;
    };

    let mut score = i32::from(condition.score) - profile.base_penalty();

    if sample.temperature > distance::TEMP_EXTRA_ABOVE {
        score -= profile.temp_penalty;
    }
    if sample.temperature > distance::TEMP_SEVERE_ABOVE {
        score -= profile.temp_penalty * 2;
    }
    if sample.humidity > distance::HUMIDITY_EXTRA_ABOVE {
        score -= profile.humidity_penalty;
    }
    if sample.humidity > distance::HUMIDITY_SEVERE_ABOVE {
        score -= profile.humidity_penalty * 2;
    }
    if sample.apparent_temperature > distance::HEAT_INDEX_EXTRA_ABOVE {
        score -= profile.heat_index_penalty;
    }
    if sample.apparent_temperature > distance::HEAT_INDEX_SEVERE_ABOVE {
        score -= profile.heat_index_penalty * 2;
    }

    if profile.is_long_distance() {
        if sample.temperature > distance::LONG_HEAT_WARNING_ABOVE {
            condition
                .warnings
                .push("Long-distance warning: prolonged exercise in heat is dangerous".into());
        }
        if sample.humidity > distance::LONG_HUMIDITY_WARNING_ABOVE {
            condition
                .warnings
                .push("Long-distance warning: high humidity raises dehydration risk".into());
        }
        if profile.key == DistanceKey::Full
            && sample.temperature > distance::MARATHON_HEAT_WARNING_ABOVE
        {
            condition
                .warnings
                .push("Marathon warning: hours of running in warm weather are dangerous".into());
        }

        if sample.temperature > distance::FUELING_GEAR_ABOVE {
            condition
                .clothing
                .extend(["Hydration gear".to_owned(), "Energy gels".to_owned()]);
        }
        if sample.temperature > distance::COOLING_GEAR_ABOVE {
            condition
                .clothing
                .extend(["Cooling towel".to_owned(), "Electrolytes".to_owned()]);
        }
    }

    condition.rescore_for_distance(score, profile);
    condition
}

/// Price dust and PM2.5 on top of an existing assessment
///
/// Leaves the assessment untouched when there is no reading or its dust
/// severity is 0; PM2.5 is only priced alongside dust. Otherwise the level and
/// recommendation are recomputed with generic phrasing, even when a
/// distance profile shaped the incoming assessment.
#[must_use]
pub fn apply_dust_penalty(
    mut condition: RunningCondition,
    air_quality: Option<&AirQualityLevel>,
    profile: Option<&DistanceProfile>,
) -> RunningCondition {
    let Some(reading) = air_quality.filter(|reading| reading.level > 0) else {
        return condition;
    };

    let dust_penalty = (f64::from(reading.dust_penalty()) * dust_multiplier(profile)) as i32;
    let score = i32::from(condition.score) - dust_penalty - reading.pm25_penalty();

    if reading.level >= MASK_SEVERITY {
        condition
            .warnings
            .push("Yellow dust in the air: wearing a mask is recommended".into());
    }
    if reading.level >= INDOOR_SEVERITY {
        condition
            .warnings
            .push("Consider indoor training if you have respiratory concerns".into());
    }
    if reading.level >= AVOID_SEVERITY {
        condition
            .warnings
            .push("Very heavy yellow dust: avoid running outdoors".into());
    }

    if reading.pm2_5 > PM25_HIGH_MAX {
        condition.warnings.push(
            "PM2.5 at alert level (over 70 µg/m³): avoid strenuous outdoor exercise".into(),
        );
    } else if reading.pm2_5 > PM25_ELEVATED_MAX {
        condition
            .warnings
            .push("PM2.5 elevated (over 50 µg/m³): limit long outdoor sessions".into());
    }

    if reading.level >= MASK_SEVERITY || reading.pm2_5 > PM25_ELEVATED_MAX {
        condition.clothing.push(SPORTS_MASK.into());
    }
    if reading.level >= INDOOR_SEVERITY {
        condition.clothing.push("Sunglasses (eye protection)".into());
    }

    condition.rescore(score);
    condition
}

/// One sample with its final assessment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimedAssessment {
    /// The sample that was scored
    pub sample: WeatherSample,
    /// Its assessment
    pub condition: RunningCondition,
}

/// Recommended time among scored samples
///
/// The first sample with the strictly highest score wins ties.
#[must_use]
pub fn best_time(assessments: &[TimedAssessment]) -> Option<&TimedAssessment> {
    assessments.iter().fold(None, |best, candidate| match best {
        Some(current) if current.condition.score >= candidate.condition.score => Some(current),
        _ => Some(candidate),
    })
}
