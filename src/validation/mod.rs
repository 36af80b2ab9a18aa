// ABOUTME: Input validation layer between untrusted client input and the document store
// ABOUTME: Sanitization, field validators, numeric and upload rules, composites, and guards
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Input Validation
//!
//! Pure, synchronous checks for everything a member types or uploads:
//! profile fields, group and post text, workout numbers, pledge amounts and
//! images. Invalid input is reported through [`ValidationResult`], never as
//! an `Err`; the only error path is [`with_validation`], which refuses to run
//! a guarded operation on rejected input.
//!
//! ## Example
//!
//! ```
//! use tiizi_validation::validation::{validate_user_registration, UserRegistration};
//!
//! let form = UserRegistration {
//!     username: Some("admin".into()),
//!     display_name: Some("Team Lead".into()),
//!     bio: None,
//! };
//! let result = validate_user_registration(&form);
//! assert!(!result.is_valid);
//! assert_eq!(result.errors, vec!["This username is reserved".to_owned()]);
//! ```

/// Multi-field form validators
pub mod composite;
/// Per-field text validators
pub mod fields;
/// Upload validation
pub mod file;
/// Operation and input guards
pub mod guard;
/// Numeric field validation
pub mod numeric;
/// Validation verdict type
pub mod result;
/// Free-text sanitization
pub mod sanitizer;

pub use composite::{
    validate_group_creation, validate_post_creation, validate_post_creation_with,
    validate_support_request, validate_support_request_with, validate_user_registration,
    validate_workout_logging, validate_workout_logging_with, GroupCreation, PostCreation,
    SupportRequest, UserRegistration, WorkoutLog,
};
pub use fields::{
    validate_bio, validate_challenge_title, validate_comment_content, validate_display_name,
    validate_group_description, validate_group_name, validate_post_content, validate_text_field,
    validate_username, validate_workout_type,
};
pub use file::{validate_file, FileUpload, UploadRules};
pub use guard::{get_validated_input, with_validation, ValidatedOperation};
pub use numeric::{parse_float, validate_numeric, validate_pledge_amount, NumericInput, NumericRules};
pub use result::ValidationResult;
pub use sanitizer::{
    default_sanitizer, sanitize_optional, sanitize_text, DenylistSanitizer, TextSanitizer,
};
