// ABOUTME: HTTP client construction with request and connection timeouts
// ABOUTME: Builds the reqwest client used by weather providers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

use reqwest::{Client, ClientBuilder};
use std::time::Duration;

/// User agent sent with every weather request
pub const USER_AGENT: &str = concat!("runcast/", env!("CARGO_PKG_VERSION"));

/// Create an HTTP client with custom timeout settings
///
/// Falls back to a default client if the builder fails.
#[must_use]
pub fn create_client_with_timeout(timeout_secs: u64, connect_timeout_secs: u64) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(connect_timeout_secs))
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|_| Client::new())
}
