// ABOUTME: Validation wrappers for operations and raw inputs
// ABOUTME: Guards async operations behind a validator and falls back to defaults for rejected input
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::future::Future;
use tiizi_core::errors::ValidationFailure;
use tracing::warn;

use super::result::ValidationResult;

/// An async operation that only runs when its arguments pass a validator.
///
/// Built by [`with_validation`]. Each [`call`](Self::call) validates
/// synchronously, then awaits the operation exactly once. There is no retry,
/// timeout or deduplication: concurrent calls run independently.
#[derive(Debug, Clone)]
pub struct ValidatedOperation<O, V> {
    operation: O,
    validator: V,
}

impl<O, V> ValidatedOperation<O, V> {
    /// Validate `args`, then run the operation with them.
    ///
    /// # Errors
    ///
    /// Returns `E::from(ValidationFailure)` without invoking the operation when
    /// the validator rejects `args`; otherwise returns whatever the operation
    /// returns, unchanged.
    pub async fn call<A, T, E, Fut>(&self, args: A) -> Result<T, E>
    where
        V: Fn(&A) -> ValidationResult,
        O: Fn(A) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: From<ValidationFailure>,
    {
        (self.validator)(&args).into_result()?;
        (self.operation)(args).await
    }
}

/// Guard `operation` with `validator`.
///
/// ```
/// # use tiizi_validation::validation::{validate_post_content, with_validation};
/// # use tiizi_core::errors::AppError;
/// # async fn demo() {
/// let publish = with_validation(
///     |content: String| async move { Ok::<_, AppError>(content.len()) },
///     |content: &String| validate_post_content(content.as_str()),
/// );
/// let err = publish.call(String::new()).await.unwrap_err();
/// assert_eq!(err.message, "Validation failed: Post content is required");
/// # }
/// ```
pub const fn with_validation<O, V>(operation: O, validator: V) -> ValidatedOperation<O, V> {
    ValidatedOperation {
        operation,
        validator,
    }
}

/// Return `input` when it passes `validator`, otherwise `default_value`.
///
/// Rejected input is dropped after a warning is logged; no error is raised.
pub fn get_validated_input<T, V>(input: T, validator: V, default_value: T) -> T
where
    V: FnOnce(&T) -> ValidationResult,
{
    let result = validator(&input);
    if result.is_valid {
        input
    } else {
        warn!(
            errors = ?result.errors,
            "Input failed validation, using default value"
        );
        default_value
    }
}
