// ABOUTME: Relative day specifications mapped to forecast day offsets
// ABOUTME: Parses today, tomorrow, and day-after-tomorrow
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

use std::fmt;
use std::str::FromStr;

use runcast_core::AppError;

/// Day relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DaySpec {
    /// Offset 0
    Today,
    /// Offset 1
    Tomorrow,
    /// Offset 2
    DayAfterTomorrow,
}

impl DaySpec {
    /// All specifications in offset order
    pub const ALL: [Self; 3] = [Self::Today, Self::Tomorrow, Self::DayAfterTomorrow];

    /// Day offset from today
    #[must_use]
    pub const fn offset(self) -> usize {
        match self {
            Self::Today => 0,
            Self::Tomorrow => 1,
            Self::DayAfterTomorrow => 2,
        }
    }

    /// Command-line key
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Tomorrow => "tomorrow",
            Self::DayAfterTomorrow => "day-after-tomorrow",
        }
    }

    /// Name shown to the user
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Tomorrow => "Tomorrow",
            Self::DayAfterTomorrow => "Day after tomorrow",
        }
    }
}

impl fmt::Display for DaySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DaySpec {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|spec| spec.as_str() == s)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown date '{s}' (expected one of: today, tomorrow, day-after-tomorrow)"
                ))
            })
    }
}
