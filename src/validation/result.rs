// ABOUTME: Validation verdict returned by every field and composite validator
// ABOUTME: Immutable pass/fail flag plus the ordered list of human-readable errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tiizi_core::errors::ValidationFailure;

/// Outcome of validating one input.
///
/// `is_valid` is true exactly when `errors` is empty. Serializes with the
/// `isValid`/`errors` keys the client screens read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// Whether all rules passed
    pub is_valid: bool,
    /// Rule violations, in the order they were detected
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// A passing result
    #[must_use]
    pub const fn valid() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// Build a result from collected errors
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// A failing result with a single error
    #[must_use]
    pub fn invalid(error: impl Into<String>) -> Self {
        Self::from_errors(vec![error.into()])
    }

    /// Concatenate the errors of several results, preserving order
    #[must_use]
    pub fn merge(results: impl IntoIterator<Item = Self>) -> Self {
        let errors = results
            .into_iter()
            .flat_map(|result| result.errors)
            .collect();
        Self::from_errors(errors)
    }

    /// Whether any error mentions `needle`
    #[must_use]
    pub fn has_error_containing(&self, needle: &str) -> bool {
        self.errors.iter().any(|error| error.contains(needle))
    }

    /// Convert a failing result into the error raised by guarded operations
    ///
    /// # Errors
    ///
    /// Returns the collected errors as a [`ValidationFailure`] when the result is invalid
    pub fn into_result(self) -> Result<(), ValidationFailure> {
        if self.is_valid {
            Ok(())
        } else {
            Err(ValidationFailure::new(self.errors))
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::valid()
    }
}
