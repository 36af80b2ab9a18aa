// ABOUTME: Field constraint table for user-entered text
// ABOUTME: Labels, length bounds, and required/sanitize flags for every validated field
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;

/// Length and presence rules for one text field.
///
/// Lengths count Unicode scalar values. `min_length` of 0 means no minimum;
/// a minimum of 1 is reported as "cannot be empty".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldConstraint {
    /// Stable key used by callers and the CLI
    pub key: &'static str,
    /// Human-readable label used in error messages
    pub label: &'static str,
    /// Longest accepted value
    pub max_length: usize,
    /// Shortest accepted value
    pub min_length: usize,
    /// Whether an absent or empty value is an error
    pub required: bool,
    /// Whether the value is sanitized before length and format checks
    pub sanitized: bool,
}

/// `username`: checked raw against `^[A-Za-z0-9_]{3,50}$`
pub const USERNAME: FieldConstraint = FieldConstraint {
    key: "username",
    label: "Username",
    max_length: 50,
    min_length: 3,
    required: true,
    sanitized: false,
};

/// `displayName`: checked raw against `^[A-Za-z0-9\s\-']{1,100}$`
pub const DISPLAY_NAME: FieldConstraint = FieldConstraint {
    key: "displayName",
    label: "Display name",
    max_length: 100,
    min_length: 0,
    required: true,
    sanitized: false,
};

/// `bio`: optional profile text
pub const BIO: FieldConstraint = FieldConstraint {
    key: "bio",
    label: "Bio",
    max_length: 500,
    min_length: 0,
    required: false,
    sanitized: true,
};

/// `groupName`
pub const GROUP_NAME: FieldConstraint = FieldConstraint {
    key: "groupName",
    label: "Group name",
    max_length: 100,
    min_length: 0,
    required: true,
    sanitized: true,
};

/// `groupDescription`: optional
pub const GROUP_DESCRIPTION: FieldConstraint = FieldConstraint {
    key: "groupDescription",
    label: "Group description",
    max_length: 1000,
    min_length: 0,
    required: false,
    sanitized: true,
};

/// `postContent`
pub const POST_CONTENT: FieldConstraint = FieldConstraint {
    key: "postContent",
    label: "Post content",
    max_length: 1000,
    min_length: 1,
    required: true,
    sanitized: true,
};

/// `commentContent`
pub const COMMENT_CONTENT: FieldConstraint = FieldConstraint {
    key: "commentContent",
    label: "Comment",
    max_length: 500,
    min_length: 1,
    required: true,
    sanitized: true,
};

/// `workoutType`
pub const WORKOUT_TYPE: FieldConstraint = FieldConstraint {
    key: "workoutType",
    label: "Workout type",
    max_length: 50,
    min_length: 1,
    required: true,
    sanitized: true,
};

/// `challengeTitle`
pub const CHALLENGE_TITLE: FieldConstraint = FieldConstraint {
    key: "challengeTitle",
    label: "Challenge title",
    max_length: 200,
    min_length: 3,
    required: true,
    sanitized: true,
};

/// Title of a support request
pub const SUPPORT_TITLE: FieldConstraint = FieldConstraint {
    key: "supportTitle",
    label: "Title",
    max_length: 200,
    min_length: 3,
    required: true,
    sanitized: true,
};

/// Body of a support request
pub const SUPPORT_DESCRIPTION: FieldConstraint = FieldConstraint {
    key: "supportDescription",
    label: "Description",
    max_length: 1000,
    min_length: 1,
    required: true,
    sanitized: true,
};

/// Every text field, in table order
pub const ALL: &[FieldConstraint] = &[
    USERNAME,
    DISPLAY_NAME,
    BIO,
    GROUP_NAME,
    GROUP_DESCRIPTION,
    POST_CONTENT,
    COMMENT_CONTENT,
    WORKOUT_TYPE,
    CHALLENGE_TITLE,
    SUPPORT_TITLE,
    SUPPORT_DESCRIPTION,
];

/// Look up a constraint by its key
#[must_use]
pub fn by_key(key: &str) -> Option<&'static FieldConstraint> {
    ALL.iter().find(|constraint| constraint.key == key)
}
