// ABOUTME: Running-suitability scoring engine and forecast windowing extractor
// ABOUTME: Pure rules over runcast-core models with static distance and period tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

#![deny(unsafe_code)]

//! # Runcast Intelligence
//!
//! Turns forecast samples into running assessments and selects which
//! samples to assess.
//!
//! Everything here is synchronous and side-effect free apart from debug
//! logging. The lookup tables are immutable statics, so every function is
//! safe to call from any thread.
//!
//! ## Modules
//!
//! - **scoring**: base, distance-adjusted and dust-adjusted assessments
//! - **condition**: the assessment type and its five levels
//! - **distance**: race-distance profiles
//! - **air_quality**: dust severity and reading selection
//! - **windowing**: part-of-day and single-day extraction
//! - **day**: relative day specifications
//! - **thresholds**: every breakpoint and penalty

/// Dust severity levels and air-quality reading selection
pub mod air_quality;
/// Running condition assessment and levels
pub mod condition;
/// Relative day specifications
pub mod day;
/// Race-distance profiles
pub mod distance;
/// Layered scoring engine
pub mod scoring;
/// Scoring thresholds and penalties
pub mod thresholds;
/// Forecast windowing extractor
pub mod windowing;

pub use air_quality::AirQualityLevel;
pub use condition::{ConditionLevel, RunningCondition};
pub use day::DaySpec;
pub use distance::{DistanceKey, DistanceProfile};
pub use scoring::{apply_dust_penalty, assess, assess_for_distance, best_time, TimedAssessment};
pub use windowing::{extract_day, extract_period_samples, extract_period_samples_for_date, TimePeriod};
