// ABOUTME: Per-field validators for user-entered text
// ABOUTME: Applies the field constraint table plus character-class and reserved-name rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Field validators
//!
//! Every validator takes the raw form value (`None` or `""` when the field
//! was left blank) and returns a [`ValidationResult`]. Checks run in a fixed
//! order: required, maximum length, character class, then minimum length and
//! domain rules. A blank required field reports only the "is required" error.
//!
//! Free-text fields are sanitized before they are measured. `username` and
//! `displayName` are matched raw, so markup in them is rejected by the
//! character class instead of being stripped.

use regex::Regex;
use std::sync::LazyLock;
use tiizi_core::constants::{fields, usernames, FieldConstraint};
use tracing::debug;

use super::result::ValidationResult;
use super::sanitizer::default_sanitizer;

static USERNAME_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_]{3,50}$").ok());

static DISPLAY_NAME_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\s\-']{1,100}$").ok());

static GROUP_NAME_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r#"^[A-Za-z0-9\s\-_.,!?()&'":;]+$"#).ok());

/// Character-class rule applied after the length check
struct FormatRule {
    pattern: &'static LazyLock<Option<Regex>>,
    message: &'static str,
}

impl FormatRule {
    fn matches(&self, value: &str) -> bool {
        // A pattern that failed to compile rejects everything
        self.pattern
            .as_ref()
            .is_some_and(|regex| regex.is_match(value))
    }
}

static USERNAME_FORMAT: FormatRule = FormatRule {
    pattern: &USERNAME_PATTERN,
    message: "Username can only contain letters, numbers, and underscores",
};

static DISPLAY_NAME_FORMAT: FormatRule = FormatRule {
    pattern: &DISPLAY_NAME_PATTERN,
    message: "Display name can only contain letters, numbers, spaces, hyphens, and apostrophes",
};

static GROUP_NAME_FORMAT: FormatRule = FormatRule {
    pattern: &GROUP_NAME_PATTERN,
    message: "Group name contains invalid characters",
};

fn min_length_error(constraint: &FieldConstraint, length: usize) -> Option<String> {
    match constraint.min_length {
        0 => None,
        1 if length == 0 => Some(format!("{} cannot be empty", constraint.label)),
        min if length < min => Some(format!(
            "{} must be at least {min} characters",
            constraint.label
        )),
        _ => None,
    }
}

/// Run the table-driven checks for one field and collect every violation
fn check_field(
    constraint: &FieldConstraint,
    raw: Option<&str>,
    format: Option<&FormatRule>,
) -> Vec<String> {
    let Some(raw) = raw.filter(|value| !value.is_empty()) else {
        return if constraint.required {
            vec![format!("{} is required", constraint.label)]
        } else {
            Vec::new()
        };
    };

    let value = if constraint.sanitized {
        default_sanitizer().sanitize(raw)
    } else {
        raw.to_owned()
    };
    let length = value.chars().count();

    let mut errors = Vec::new();
    if length > constraint.max_length {
        errors.push(format!(
            "{} must be {} characters or less",
            constraint.label, constraint.max_length
        ));
    }
    if let Some(rule) = format {
        if !rule.matches(&value) {
            errors.push(rule.message.to_owned());
        }
    }
    if let Some(error) = min_length_error(constraint, length) {
        errors.push(error);
    }
    errors
}

fn finish(constraint: &FieldConstraint, errors: Vec<String>) -> ValidationResult {
    if !errors.is_empty() {
        debug!(
            field = constraint.key,
            error_count = errors.len(),
            "Field validation rejected input"
        );
    }
    ValidationResult::from_errors(errors)
}

/// Validate a username: 3 to 50 letters, digits or underscores, not reserved.
///
/// # Examples
/// ```
/// # use tiizi_validation::validation::validate_username;
/// assert!(validate_username("runner_42").is_valid);
/// assert!(!validate_username("Admin").is_valid);
/// ```
#[must_use]
pub fn validate_username<'a>(username: impl Into<Option<&'a str>>) -> ValidationResult {
    let raw = username.into();
    let constraint = &fields::USERNAME;
    let mut errors = check_field(constraint, raw, Some(&USERNAME_FORMAT));
    if let Some(name) = raw.filter(|value| !value.is_empty()) {
        if usernames::is_reserved(name) {
            errors.push("This username is reserved".to_owned());
        }
    }
    finish(constraint, errors)
}

/// Validate a display name: up to 100 letters, digits, spaces, hyphens or apostrophes
#[must_use]
pub fn validate_display_name<'a>(display_name: impl Into<Option<&'a str>>) -> ValidationResult {
    let constraint = &fields::DISPLAY_NAME;
    finish(
        constraint,
        check_field(constraint, display_name.into(), Some(&DISPLAY_NAME_FORMAT)),
    )
}

/// Validate an optional profile bio (500 characters after sanitizing)
#[must_use]
pub fn validate_bio<'a>(bio: impl Into<Option<&'a str>>) -> ValidationResult {
    let constraint = &fields::BIO;
    finish(constraint, check_field(constraint, bio.into(), None))
}

/// Validate a group name (100 characters, restricted punctuation)
#[must_use]
pub fn validate_group_name<'a>(name: impl Into<Option<&'a str>>) -> ValidationResult {
    let constraint = &fields::GROUP_NAME;
    finish(
        constraint,
        check_field(constraint, name.into(), Some(&GROUP_NAME_FORMAT)),
    )
}

/// Validate an optional group description (1000 characters after sanitizing)
#[must_use]
pub fn validate_group_description<'a>(
    description: impl Into<Option<&'a str>>,
) -> ValidationResult {
    let constraint = &fields::GROUP_DESCRIPTION;
    finish(constraint, check_field(constraint, description.into(), None))
}

/// Validate feed post content
#[must_use]
pub fn validate_post_content<'a>(content: impl Into<Option<&'a str>>) -> ValidationResult {
    let constraint = &fields::POST_CONTENT;
    finish(constraint, check_field(constraint, content.into(), None))
}

/// Validate comment content
#[must_use]
pub fn validate_comment_content<'a>(content: impl Into<Option<&'a str>>) -> ValidationResult {
    let constraint = &fields::COMMENT_CONTENT;
    finish(constraint, check_field(constraint, content.into(), None))
}

/// Validate the workout type of a logged session
#[must_use]
pub fn validate_workout_type<'a>(workout_type: impl Into<Option<&'a str>>) -> ValidationResult {
    let constraint = &fields::WORKOUT_TYPE;
    finish(constraint, check_field(constraint, workout_type.into(), None))
}

/// Validate a challenge title (3 to 200 characters after sanitizing)
#[must_use]
pub fn validate_challenge_title<'a>(title: impl Into<Option<&'a str>>) -> ValidationResult {
    let constraint = &fields::CHALLENGE_TITLE;
    finish(constraint, check_field(constraint, title.into(), None))
}

/// Validate any table field without a character-class rule.
///
/// Used by composite validators for fields that only have length and
/// presence rules (support request title and description).
#[must_use]
pub fn validate_text_field(constraint: &FieldConstraint, value: Option<&str>) -> ValidationResult {
    finish(constraint, check_field(constraint, value, None))
}

