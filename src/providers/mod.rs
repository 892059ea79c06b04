// ABOUTME: Weather data providers behind a common async trait
// ABOUTME: Exposes the provider trait, its error type, and the Open-Meteo client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

//! # Weather providers
//!
//! The CLI only talks to [`WeatherProvider`], so tests can swap the HTTP
//! client for a mock server or an in-memory implementation.

/// Provider trait
pub mod core;
/// Provider error type
pub mod errors;
/// Open-Meteo HTTP client
pub mod open_meteo;

pub use self::core::WeatherProvider;
pub use errors::WeatherError;
pub use open_meteo::OpenMeteoClient;
