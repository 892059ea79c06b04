// ABOUTME: Running condition assessment and its five ordered suitability levels
// ABOUTME: Maps a clamped score to a level label plus generic or distance-aware advice
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

use std::fmt;

use serde::Serialize;

use crate::distance::DistanceProfile;
use crate::thresholds::score::{
    CAUTION_MIN, EXCELLENT_MIN, FAIR_MIN, GOOD_MIN, MAX_SCORE, MIN_SCORE,
};

/// Qualitative suitability band, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConditionLevel {
    /// Score 80-100
    Excellent,
    /// Score 60-79
    Good,
    /// Score 40-59
    Fair,
    /// Score 20-39
    Caution,
    /// Score 0-19
    Dangerous,
}

impl ConditionLevel {
    /// Band containing `score`
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            s if s >= EXCELLENT_MIN => Self::Excellent,
            s if s >= GOOD_MIN => Self::Good,
            s if s >= FAIR_MIN => Self::Fair,
            s if s >= CAUTION_MIN => Self::Caution,
            _ => Self::Dangerous,
        }
    }

    /// Lowercase label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Caution => "caution",
            Self::Dangerous => "dangerous",
        }
    }

    /// Advice for a run of unspecified length
    #[must_use]
    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::Excellent => "Perfect weather for running!",
            Self::Good => "Good weather. Enjoy your run",
            Self::Fair => "Check the warnings before heading out",
            Self::Caution => "Warnings in effect. Keep the run light",
            Self::Dangerous => "Poor weather. Running is not recommended",
        }
    }

    /// Advice naming the target distance
    #[must_use]
    pub fn distance_recommendation(self, profile: &DistanceProfile) -> String {
        let name = profile.display_name;
        match self {
            Self::Excellent => format!("Perfect weather for a {name}!"),
            Self::Good => format!("Good weather for a {name}"),
            Self::Fair => format!("Run the {name} with care and listen to your body"),
            Self::Caution => format!("Take the {name} easy and consider shortening it"),
            Self::Dangerous => format!("Skipping the {name} is recommended"),
        }
    }
}

impl fmt::Display for ConditionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Running suitability assessment
///
/// `level` always matches `score`; `warnings` and `clothing` keep the order
/// in which the rules fired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunningCondition {
    /// Suitability score, 0-100
    pub score: u8,
    /// Band for `score`
    pub level: ConditionLevel,
    /// Free-text advice
    pub recommendation: String,
    /// Hazard warnings in evaluation order
    pub warnings: Vec<String>,
    /// Clothing and gear suggestions, duplicates allowed
    pub clothing: Vec<String>,
}

impl RunningCondition {
    /// Build an assessment from a raw score using generic advice
    #[must_use]
    pub fn new(raw_score: i32, warnings: Vec<String>, clothing: Vec<String>) -> Self {
        let score = clamp_score(raw_score);
        let level = ConditionLevel::from_score(score);
        Self {
            score,
            level,
            recommendation: level.recommendation().to_owned(),
            warnings,
            clothing,
        }
    }

    /// Replace the score and refresh level and generic advice
    pub fn rescore(&mut self, raw_score: i32) {
        self.score = clamp_score(raw_score);
        self.level = ConditionLevel::from_score(self.score);
        self.recommendation = self.level.recommendation().to_owned();
    }

    /// Replace the score and refresh level and distance-aware advice
    pub fn rescore_for_distance(&mut self, raw_score: i32, profile: &DistanceProfile) {
        self.score = clamp_score(raw_score);
        self.level = ConditionLevel::from_score(self.score);
        self.recommendation = self.level.distance_recommendation(profile);
    }
}

/// Clamp an unbounded score into 0-100
#[must_use]
pub fn clamp_score(raw_score: i32) -> u8 {
    u8::try_from(raw_score.clamp(MIN_SCORE, MAX_SCORE)).unwrap_or(0)
}
