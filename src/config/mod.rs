// ABOUTME: Configuration module for runcast runtime settings and custom locations
// ABOUTME: Environment-driven API settings plus TOML-defined named locations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

//! Configuration
//!
//! - **environment**: API endpoints, timezone and timeouts from environment variables
//! - **locations**: user-defined named locations loaded from a TOML file

/// API settings from environment variables
pub mod environment;
/// Custom named locations from a TOML file
pub mod locations;

pub use environment::ApiConfig;
pub use locations::LocationsConfig;
