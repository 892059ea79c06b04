// ABOUTME: Core types and constants for the runcast running-weather toolkit
// ABOUTME: Foundation crate with error handling, forecast payload models, and weather code tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

#![deny(unsafe_code)]

//! # Runcast Core
//!
//! Foundation crate providing shared types and constants for runcast. It is
//! designed to change infrequently so the engine and application crates can
//! build on a stable vocabulary.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **models**: Forecast and air-quality payloads, weather samples, locations
//! - **weather_codes**: WMO weather code descriptions and compass directions

/// Unified error handling system with standard error codes
pub mod errors;

/// Decoded forecast payloads, weather samples and locations
pub mod models;

/// WMO weather code descriptions and wind direction naming
pub mod weather_codes;

pub use errors::{AppError, AppResult, ErrorCode};
