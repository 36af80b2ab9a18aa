// ABOUTME: Integration tests for numeric field validation
// ABOUTME: Tests coercion, NaN short-circuit, bounds, whole-number rule, and pledge amounts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used)]

use tiizi_validation::validation::{
    validate_numeric, validate_pledge_amount, NumericInput, NumericRules,
};

#[test]
fn test_numbers_and_numeric_strings_accepted() {
    assert!(validate_numeric(25, "Reps", 1.0, 1000.0).is_valid);
    assert!(validate_numeric("25", "Reps", 1.0, 1000.0).is_valid);
    assert!(validate_numeric(" 25 reps", "Reps", 1.0, 1000.0).is_valid);
}

#[test]
fn test_not_a_number_is_terminal() {
    for input in [
        NumericInput::from("abc"),
        NumericInput::from(""),
        NumericInput::Number(f64::NAN),
    ] {
        let result = validate_numeric(input, "Reps", 1.0, 1000.0);
        assert_eq!(result.errors, vec!["Reps must be a valid number".to_owned()]);
    }
}

#[test]
fn test_bounds() {
    let low = validate_numeric(0, "Reps", 1.0, 1000.0);
    assert_eq!(low.errors, vec!["Reps must be at least 1".to_owned()]);

    let high = validate_numeric(1001, "Reps", 1.0, 1000.0);
    assert_eq!(high.errors, vec!["Reps must be at most 1000".to_owned()]);

    assert!(validate_numeric(1, "Reps", 1.0, 1000.0).is_valid);
    assert!(validate_numeric(1000, "Reps", 1.0, 1000.0).is_valid);
}

#[test]
fn test_unbounded_maximum() {
    assert!(validate_numeric(1e12, "Steps", 0.0, f64::INFINITY).is_valid);
}

#[test]
fn test_whole_number_rule() {
    let result = validate_numeric(5.5, "Reps", 1.0, 1000.0);
    assert!(!result.is_valid);
    assert_eq!(result.errors, vec!["Reps must be a whole number".to_owned()]);

    // durationSec is the only exempt field by default
    assert!(validate_numeric(5.5, "durationSec", 1.0, 86_400.0).is_valid);
    assert!(!validate_numeric(5.5, "DurationSec", 1.0, 86_400.0).is_valid);
}

#[test]
fn test_violations_accumulate() {
    let result = validate_numeric(-0.5, "Reps", 1.0, 1000.0);
    assert_eq!(result.errors.len(), 2);
    assert!(result.has_error_containing("at least 1"));
    assert!(result.has_error_containing("whole number"));
}

#[test]
fn test_infinity_is_not_whole() {
    let result = validate_numeric("Infinity", "Steps", 0.0, f64::INFINITY);
    assert_eq!(result.errors, vec!["Steps must be a whole number".to_owned()]);
}

#[test]
fn test_pledge_amount_bounds() {
    let zero = validate_pledge_amount(0);
    assert!(!zero.is_valid);
    assert!(zero.has_error_containing("Pledge amount must be at least 0.01"));

    assert!(validate_pledge_amount(50).is_valid);
    assert!(validate_pledge_amount(1_000_000).is_valid);

    let over = validate_pledge_amount(1_000_001);
    assert!(over.has_error_containing("must be at most 1000000"));
}

#[test]
fn test_pledge_amount_rejects_cents_known_quirk() {
    // Pledge amounts are not exempt from the whole-number rule, so the
    // minimum amount itself is rejected
    let result = validate_pledge_amount(0.01);
    assert!(!result.is_valid);
    assert_eq!(
        result.errors,
        vec!["Pledge amount must be a whole number".to_owned()]
    );
    assert!(!validate_pledge_amount("19.99").is_valid);
}

#[test]
fn test_configurable_exemptions() {
    let rules = NumericRules::new(["durationSec", "Pledge amount"]);
    assert!(rules.allows_fraction("Pledge amount"));
    assert!(rules
        .validate(&NumericInput::from(0.01), "Pledge amount", 0.01, 1_000_000.0)
        .is_valid);

    let strict = NumericRules::new(Vec::<String>::new());
    assert!(!strict
        .validate(&NumericInput::from(5.5), "durationSec", 1.0, 86_400.0)
        .is_valid);
}

#[test]
fn test_default_rules_exempt_duration_only() {
    let rules = NumericRules::default();
    assert_eq!(rules.integer_exempt_fields().len(), 1);
    assert!(rules.allows_fraction("durationSec"));
}

#[test]
fn test_numeric_input_deserializes_from_json() {
    let number: NumericInput = serde_json::from_str("12.5").unwrap();
    assert_eq!(number, NumericInput::Number(12.5));
    let text: NumericInput = serde_json::from_str("\"12\"").unwrap();
    assert_eq!(text, NumericInput::Text("12".to_owned()));
}
