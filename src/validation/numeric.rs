// ABOUTME: Numeric field validation for reps, durations, and pledge amounts
// ABOUTME: Coerces numeric strings, checks bounds, and applies the whole-number rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use tiizi_core::constants::numeric;

use super::result::ValidationResult;

/// A numeric form value: either already a number or the text typed into a field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    /// Number supplied directly
    Number(f64),
    /// Text to coerce
    Text(String),
}

impl NumericInput {
    /// Numeric value; text that does not start with a number yields `NaN`
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Number(value) => *value,
            Self::Text(text) => parse_float(text),
        }
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for NumericInput {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<u32> for NumericInput {
    fn from(value: u32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for NumericInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for NumericInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Length of the run of ASCII digits at the start of `bytes`
fn digit_run(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|byte| byte.is_ascii_digit()).count()
}

/// Parse the longest numeric prefix of `text`, as a browser's `parseFloat` does.
///
/// Leading whitespace is skipped, trailing garbage is ignored, `Infinity` is
/// recognised, and text with no numeric prefix yields `NaN`.
///
/// # Examples
/// ```
/// # use tiizi_validation::validation::parse_float;
/// assert!((parse_float(" 12.5kg") - 12.5).abs() < f64::EPSILON);
/// assert!(parse_float("abc").is_nan());
/// ```
#[must_use]
pub fn parse_float(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();

    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let negative = bytes.first() == Some(&b'-');
    let unsigned = &trimmed[sign_len..];

    if unsigned.starts_with("Infinity") {
        return if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let unsigned_bytes = unsigned.as_bytes();
    let int_digits = digit_run(unsigned_bytes);
    let mut end = int_digits;
    let mut mantissa_digits = int_digits;

    if unsigned_bytes.get(end) == Some(&b'.') {
        let frac_digits = digit_run(&unsigned_bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
            mantissa_digits += frac_digits;
        }
    }

    if mantissa_digits == 0 {
        return f64::NAN;
    }

    if matches!(unsigned_bytes.get(end), Some(b'e' | b'E')) {
        let exp_sign = usize::from(matches!(unsigned_bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = digit_run(&unsigned_bytes[(end + 1 + exp_sign).min(unsigned_bytes.len())..]);
        if exp_digits > 0 {
            end += 1 + exp_sign + exp_digits;
        }
    }

    trimmed[..sign_len + end].parse().unwrap_or(f64::NAN)
}

/// Bounds and whole-number policy for numeric fields.
///
/// Every field must hold a whole number unless its name is in
/// `integer_exempt_fields`. The default exempts only `durationSec`, which
/// means pledge amounts such as `0.01` are rejected as fractional.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumericRules {
    integer_exempt_fields: BTreeSet<String>,
}

impl Default for NumericRules {
    fn default() -> Self {
        Self::new([numeric::DURATION_SEC_FIELD])
    }
}

impl NumericRules {
    /// Build rules exempting the given field names from the whole-number check
    #[must_use]
    pub fn new<I, S>(integer_exempt_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            integer_exempt_fields: integer_exempt_fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Field names that may hold fractional values
    #[must_use]
    pub const fn integer_exempt_fields(&self) -> &BTreeSet<String> {
        &self.integer_exempt_fields
    }

    /// Whether `field_name` may hold a fractional value
    #[must_use]
    pub fn allows_fraction(&self, field_name: &str) -> bool {
        self.integer_exempt_fields.contains(field_name)
    }

    /// Validate `value` against `min..=max`.
    ///
    /// A value that does not coerce to a number reports only
    /// `"<field> must be a valid number"`. Otherwise the lower bound, upper
    /// bound and whole-number checks each add their own error.
    #[must_use]
    pub fn validate(
        &self,
        value: &NumericInput,
        field_name: &str,
        min: f64,
        max: f64,
    ) -> ValidationResult {
        let number = value.as_f64();
        if number.is_nan() {
            return ValidationResult::invalid(format!("{field_name} must be a valid number"));
        }

        let mut errors = Vec::new();
        if number < min {
            errors.push(format!("{field_name} must be at least {min}"));
        }
        if number > max {
            errors.push(format!("{field_name} must be at most {max}"));
        }
        if !self.allows_fraction(field_name) && !is_whole(number) {
            errors.push(format!("{field_name} must be a whole number"));
        }
        ValidationResult::from_errors(errors)
    }

    /// Validate a pledge amount (0.01 to 1,000,000) under these rules
    #[must_use]
    pub fn validate_pledge_amount(&self, amount: &NumericInput) -> ValidationResult {
        self.validate(
            amount,
            numeric::PLEDGE_AMOUNT_LABEL,
            numeric::PLEDGE_AMOUNT_MIN,
            numeric::PLEDGE_AMOUNT_MAX,
        )
    }
}

/// Exact integer test; infinities are not whole numbers
#[allow(clippy::float_cmp)]
fn is_whole(number: f64) -> bool {
    number.is_finite() && number.trunc() == number
}

/// Validate a numeric field with the default rules.
///
/// Pass `f64::INFINITY` as `max` for an unbounded field.
///
/// # Examples
/// ```
/// # use tiizi_validation::validation::validate_numeric;
/// assert!(!validate_numeric(5.5, "Reps", 1.0, 1000.0).is_valid);
/// assert!(validate_numeric(5.5, "durationSec", 1.0, 86_400.0).is_valid);
/// ```
#[must_use]
pub fn validate_numeric(
    value: impl Into<NumericInput>,
    field_name: &str,
    min: f64,
    max: f64,
) -> ValidationResult {
    NumericRules::default().validate(&value.into(), field_name, min, max)
}

/// Validate a pledge amount: between 0.01 and 1,000,000 under the default rules
#[must_use]
pub fn validate_pledge_amount(amount: impl Into<NumericInput>) -> ValidationResult {
    NumericRules::default().validate_pledge_amount(&amount.into())
}
