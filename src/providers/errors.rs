// ABOUTME: Error type for weather provider calls
// ABOUTME: Converts HTTP, status, and decode failures into application errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

use runcast_core::{AppError, ErrorCode};

/// Weather provider errors
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    /// Provider rejected the request
    #[error("Weather API request failed: {0}")]
    ApiError(String),

    /// Provider answered with a non-success status
    #[error("{service} returned status {status}: {body}")]
    HttpStatus {
        /// Service that answered
        service: &'static str,
        /// HTTP status code
        status: u16,
        /// Response body, possibly truncated
        body: String,
    },

    /// Response body did not match the expected payload
    #[error("Failed to decode {service} response: {message}")]
    Decode {
        /// Service that answered
        service: &'static str,
        /// Decoder message
        message: String,
    },

    /// Network communication error
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl WeatherError {
    /// Whether the failure suggests the service could not be reached at all
    #[must_use]
    pub fn is_unavailable(&self) -> bool {
        match self {
            Self::Network(e) => e.is_connect() || e.is_timeout(),
            Self::HttpStatus { status, .. } => *status >= 500,
            Self::ApiError(_) | Self::Decode { .. } => false,
        }
    }
}

impl From<WeatherError> for AppError {
    fn from(error: WeatherError) -> Self {
        let code = if error.is_unavailable() {
            ErrorCode::ExternalServiceUnavailable
        } else {
            ErrorCode::ExternalServiceError
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
