// ABOUTME: Error types re-exported from the core crate for library consumers
// ABOUTME: AppError, ErrorCode, AppResult, and the aggregated ValidationFailure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Unified error handling, re-exported from `tiizi-core`

pub use tiizi_core::errors::{AppError, AppResult, ErrorCode, ValidationFailure};
