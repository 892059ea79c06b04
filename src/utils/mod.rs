// ABOUTME: Shared utility modules for the runcast application
// ABOUTME: Currently holds HTTP client construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

/// HTTP client construction with timeouts
pub mod http_client;
