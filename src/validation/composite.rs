// ABOUTME: Composite validators for multi-field forms (registration, groups, posts, workouts, support)
// ABOUTME: Runs every constituent field validator and concatenates their errors in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Composite form validators
//!
//! A composite never stops at the first failing field: each constituent
//! validator runs and the errors are concatenated in field order, so a form
//! can show every problem at once.

use serde::{Deserialize, Serialize};
use tiizi_core::constants::{fields, numeric};

use super::fields::{
    validate_bio, validate_display_name, validate_group_description, validate_group_name,
    validate_post_content, validate_text_field, validate_username, validate_workout_type,
};
use super::file::{FileUpload, UploadRules};
use super::numeric::{NumericInput, NumericRules};
use super::result::ValidationResult;

/// Sign-up form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRegistration {
    /// Requested username
    pub username: Option<String>,
    /// Name shown to other members
    pub display_name: Option<String>,
    /// Optional profile text
    pub bio: Option<String>,
}

/// New group form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupCreation {
    /// Group name
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
}

/// New feed post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCreation {
    /// Post body
    pub content: Option<String>,
    /// Attached image, if any
    pub image: Option<FileUpload>,
}

/// Logged workout session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutLog {
    /// Exercise or activity name
    pub workout_type: Option<String>,
    /// Repetitions completed
    pub reps: Option<NumericInput>,
    /// Session length in seconds
    pub duration_sec: Option<NumericInput>,
}

/// Request for pledged support toward a group cause
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupportRequest {
    /// Short title
    pub title: Option<String>,
    /// What the support is for
    pub description: Option<String>,
    /// Amount requested
    pub amount: Option<NumericInput>,
}

/// Validate a sign-up form: username, display name and bio
#[must_use]
pub fn validate_user_registration(form: &UserRegistration) -> ValidationResult {
    ValidationResult::merge([
        validate_username(form.username.as_deref()),
        validate_display_name(form.display_name.as_deref()),
        validate_bio(form.bio.as_deref()),
    ])
}

/// Validate a new group: name and description
#[must_use]
pub fn validate_group_creation(form: &GroupCreation) -> ValidationResult {
    ValidationResult::merge([
        validate_group_name(form.name.as_deref()),
        validate_group_description(form.description.as_deref()),
    ])
}

/// Validate a new post; an attached image is checked against the default upload rules
#[must_use]
pub fn validate_post_creation(form: &PostCreation) -> ValidationResult {
    validate_post_creation_with(form, &UploadRules::default())
}

/// Validate a new post, checking an attached image against `uploads`
#[must_use]
pub fn validate_post_creation_with(form: &PostCreation, uploads: &UploadRules) -> ValidationResult {
    let image = form
        .image
        .as_ref()
        .map_or_else(ValidationResult::valid, |file| uploads.validate(Some(file)));
    ValidationResult::merge([validate_post_content(form.content.as_deref()), image])
}

/// Validate a logged workout: type, plus reps and duration when supplied
#[must_use]
pub fn validate_workout_logging(form: &WorkoutLog) -> ValidationResult {
    validate_workout_logging_with(form, &NumericRules::default())
}

/// Validate a logged workout with the given numeric rules
#[must_use]
pub fn validate_workout_logging_with(form: &WorkoutLog, rules: &NumericRules) -> ValidationResult {
    let reps = form.reps.as_ref().map_or_else(ValidationResult::valid, |reps| {
        rules.validate(reps, numeric::REPS_LABEL, numeric::REPS_MIN, numeric::REPS_MAX)
    });
    let duration = form
        .duration_sec
        .as_ref()
        .map_or_else(ValidationResult::valid, |duration| {
            rules.validate(
                duration,
                numeric::DURATION_SEC_FIELD,
                numeric::DURATION_SEC_MIN,
                numeric::DURATION_SEC_MAX,
            )
        });
    ValidationResult::merge([
        validate_workout_type(form.workout_type.as_deref()),
        reps,
        duration,
    ])
}

/// Validate a support request: title, description and amount.
///
/// A missing amount is reported as `"Pledge amount is required"`.
#[must_use]
pub fn validate_support_request(form: &SupportRequest) -> ValidationResult {
    validate_support_request_with(form, &NumericRules::default())
}

/// Validate a support request, checking the amount with the given numeric rules
#[must_use]
pub fn validate_support_request_with(
    form: &SupportRequest,
    rules: &NumericRules,
) -> ValidationResult {
    let amount = form.amount.as_ref().map_or_else(
        || ValidationResult::invalid(format!("{} is required", numeric::PLEDGE_AMOUNT_LABEL)),
        |amount| rules.validate_pledge_amount(amount),
    );
    ValidationResult::merge([
        validate_text_field(&fields::SUPPORT_TITLE, form.title.as_deref()),
        validate_text_field(&fields::SUPPORT_DESCRIPTION, form.description.as_deref()),
        amount,
    ])
}
