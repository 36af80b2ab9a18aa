// ABOUTME: Aggregated validation failure raised by guarded operations
// ABOUTME: Joins every rule violation into one "Validation failed" message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Error produced when a guarded operation is invoked with rejected input.
///
/// Displays as `Validation failed: <error 1>, <error 2>, ...` in the order the
/// validator reported the errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed: {}", .errors.join(", "))]
pub struct ValidationFailure {
    errors: Vec<String>,
}

impl ValidationFailure {
    /// Wrap the errors reported by a validator
    #[must_use]
    pub fn new(errors: Vec<String>) -> Self {
        Self { errors }
    }

    /// Individual rule violations, in reported order
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }
}
