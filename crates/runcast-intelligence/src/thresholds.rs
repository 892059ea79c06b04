// ABOUTME: Threshold and penalty constants for running condition scoring
// ABOUTME: Temperature, humidity, wind, precipitation, distance, and air-quality breakpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

//! Scoring constants
//!
//! Every breakpoint the engine compares against lives here so the rule
//! bodies read as plain comparisons. Temperatures are °C, wind m/s,
//! precipitation mm, humidity percent and concentrations µg/m³.

/// Score bounds and level bands
pub mod score {
    /// Score every assessment starts from
    pub const MAX_SCORE: i32 = 100;

    /// Lowest possible score after clamping
    pub const MIN_SCORE: i32 = 0;

    /// Lower bound of the "excellent" band
    pub const EXCELLENT_MIN: u8 = 80;

    /// Lower bound of the "good" band
    pub const GOOD_MIN: u8 = 60;

    /// Lower bound of the "fair" band
    pub const FAIR_MIN: u8 = 40;

    /// Lower bound of the "caution" band
    pub const CAUTION_MIN: u8 = 20;
}

/// Air temperature tiers
pub mod temperature {
    /// Below this: freezing tier
    pub const FREEZING_BELOW: f64 = 5.0;
    /// Deduction for the freezing tier
    pub const FREEZING_PENALTY: i32 = 30;

    /// Below this: cold tier
    pub const COLD_BELOW: f64 = 10.0;
    /// Deduction for the cold tier
    pub const COLD_PENALTY: i32 = 15;

    /// Below this: cool tier
    pub const COOL_BELOW: f64 = 15.0;
    /// Deduction for the cool tier
    pub const COOL_PENALTY: i32 = 5;

    /// Below this: mild tier
    pub const MILD_BELOW: f64 = 20.0;

    /// Below this: warm tier
    pub const WARM_BELOW: f64 = 25.0;

    /// Below this: hot tier; at or above: extreme heat
    pub const HOT_BELOW: f64 = 30.0;

    /// Deduction at or above `HOT_BELOW`
    pub const EXTREME_HEAT_PENALTY: i32 = 20;
}

/// Apparent ("feels-like") temperature tiers
pub mod apparent_temperature {
    /// Above this: severe heat-stress
    pub const SEVERE_ABOVE: f64 = 35.0;
    /// Deduction for severe heat-stress
    pub const SEVERE_PENALTY: i32 = 30;

    /// Above this: elevated heat-stress
    pub const ELEVATED_ABOVE: f64 = 32.0;
    /// Deduction for elevated heat-stress
    pub const ELEVATED_PENALTY: i32 = 15;
}

/// Relative humidity tiers
pub mod humidity {
    /// Above this: very humid
    pub const VERY_HIGH_ABOVE: i32 = 85;
    /// Deduction when very humid
    pub const VERY_HIGH_PENALTY: i32 = 20;

    /// Above this: humid
    pub const HIGH_ABOVE: i32 = 70;
    /// Deduction when humid
    pub const HIGH_PENALTY: i32 = 10;
}

/// Wind speed tiers
pub mod wind {
    /// Above this: strong wind
    pub const STRONG_ABOVE: f64 = 10.0;
    /// Deduction for strong wind
    pub const STRONG_PENALTY: i32 = 25;

    /// Above this: moderate wind
    pub const MODERATE_ABOVE: f64 = 7.0;
    /// Deduction for moderate wind
    pub const MODERATE_PENALTY: i32 = 10;
}

/// Precipitation tiers
pub mod precipitation {
    /// Above this: heavy rain
    pub const HEAVY_ABOVE: f64 = 5.0;
    /// Deduction for heavy rain
    pub const HEAVY_PENALTY: i32 = 40;

    /// Above this: rain
    pub const RAIN_ABOVE: f64 = 1.0;
    /// Deduction for rain
    pub const RAIN_PENALTY: i32 = 25;

    /// Above this: light rain
    pub const LIGHT_ABOVE: f64 = 0.0;
    /// Deduction for light rain
    pub const LIGHT_PENALTY: i32 = 10;
}

/// Weather-code severity deductions
pub mod weather_code {
    /// Deduction for thunderstorm-class codes
    pub const THUNDERSTORM_PENALTY: i32 = 50;

    /// Deduction for shower-class codes
    pub const SHOWER_PENALTY: i32 = 30;
}

/// Second-stage thresholds applied with a distance profile
pub mod distance {
    /// Above this the temperature weight applies again
    pub const TEMP_EXTRA_ABOVE: f64 = 28.0;
    /// Above this the temperature weight applies twice more
    pub const TEMP_SEVERE_ABOVE: f64 = 32.0;

    /// Above this the humidity weight applies again
    pub const HUMIDITY_EXTRA_ABOVE: i32 = 80;
    /// Above this the humidity weight applies twice more
    pub const HUMIDITY_SEVERE_ABOVE: i32 = 90;

    /// Above this the heat-index weight applies again
    pub const HEAT_INDEX_EXTRA_ABOVE: f64 = 30.0;
    /// Above this the heat-index weight applies twice more
    pub const HEAT_INDEX_SEVERE_ABOVE: f64 = 35.0;

    /// Long-distance heat warning threshold
    pub const LONG_HEAT_WARNING_ABOVE: f64 = 25.0;
    /// Long-distance dehydration warning threshold
    pub const LONG_HUMIDITY_WARNING_ABOVE: i32 = 70;
    /// Full-marathon heat warning threshold
    pub const MARATHON_HEAT_WARNING_ABOVE: f64 = 22.0;

    /// Hydration and energy gear suggested above this
    pub const FUELING_GEAR_ABOVE: f64 = 20.0;
    /// Cooling gear suggested above this
    pub const COOLING_GEAR_ABOVE: f64 = 25.0;
}

/// Air-quality breakpoints and penalties
pub mod air_quality {
    /// Dust concentration above which severity is 1
    pub const DUST_LIGHT_ABOVE: f64 = 50.0;
    /// Dust concentration above which severity is 2
    pub const DUST_MODERATE_ABOVE: f64 = 100.0;
    /// Dust concentration above which severity is 3
    pub const DUST_HEAVY_ABOVE: f64 = 200.0;
    /// Dust concentration above which severity is 4
    pub const DUST_VERY_HEAVY_ABOVE: f64 = 500.0;

    /// Base dust penalty indexed by severity level 0-4
    pub const DUST_PENALTIES: [i32; 5] = [0, 5, 15, 30, 50];

    /// Severity at which a mask is recommended
    pub const MASK_SEVERITY: u8 = 2;
    /// Severity at which indoor training is suggested and eye protection added
    pub const INDOOR_SEVERITY: u8 = 3;
    /// Severity at which outdoor running should be avoided
    pub const AVOID_SEVERITY: u8 = 4;

    /// PM2.5 at or below this carries no penalty
    pub const PM25_GOOD_MAX: f64 = 35.0;
    /// PM2.5 at or below this: slightly elevated
    pub const PM25_ELEVATED_MAX: f64 = 50.0;
    /// PM2.5 at or below this: high
    pub const PM25_HIGH_MAX: f64 = 70.0;

    /// Penalty for slightly elevated PM2.5
    pub const PM25_ELEVATED_PENALTY: i32 = 5;
    /// Penalty for high PM2.5
    pub const PM25_HIGH_PENALTY: i32 = 15;
    /// Penalty for alert-level PM2.5
    pub const PM25_ALERT_PENALTY: i32 = 30;
}

/// Assumptions for scoring a daily summary as a single sample
pub mod daily_estimate {
    /// Daily summaries carry no humidity; this value stands in
    pub const ASSUMED_HUMIDITY: i32 = 60;
}
