// ABOUTME: Application error types re-exported from runcast-core
// ABOUTME: Lets the CLI and providers share one error vocabulary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 The runcast Authors

pub use runcast_core::errors::*;
