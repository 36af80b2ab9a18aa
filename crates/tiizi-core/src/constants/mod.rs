// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Field constraint table, reserved names, upload limits, and numeric bounds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Every value here is immutable for the lifetime of the process and read
//! without synchronization.

/// Per-field text constraints (the field constraint table)
pub mod fields;

pub use fields::FieldConstraint;

/// Usernames that can never be registered (compared case-insensitively)
pub mod usernames {
    /// Reserved usernames
    pub const RESERVED: &[&str] = &[
        "admin",
        "root",
        "system",
        "null",
        "undefined",
        "tiizi",
        "support",
    ];

    /// Check a candidate against the reserved set, ignoring ASCII case
    #[must_use]
    pub fn is_reserved(candidate: &str) -> bool {
        RESERVED
            .iter()
            .any(|reserved| reserved.eq_ignore_ascii_case(candidate))
    }
}

/// File upload limits
pub mod uploads {
    /// Maximum accepted upload size: 5 MiB
    pub const MAX_FILE_SIZE_BYTES: u64 = 5 * 1024 * 1024;

    /// MIME types accepted for uploads (exact match only)
    pub const ALLOWED_IMAGE_TYPES: &[&str] =
        &["image/jpeg", "image/png", "image/webp", "image/gif"];
}

/// Numeric field bounds
pub mod numeric {
    /// Field name whose values may be fractional
    pub const DURATION_SEC_FIELD: &str = "durationSec";

    /// Label used in pledge amount errors
    pub const PLEDGE_AMOUNT_LABEL: &str = "Pledge amount";
    /// Smallest pledge amount
    pub const PLEDGE_AMOUNT_MIN: f64 = 0.01;
    /// Largest pledge amount
    pub const PLEDGE_AMOUNT_MAX: f64 = 1_000_000.0;

    /// Label used in repetition count errors
    pub const REPS_LABEL: &str = "Reps";
    /// Fewest repetitions in a logged workout
    pub const REPS_MIN: f64 = 1.0;
    /// Most repetitions in a logged workout
    pub const REPS_MAX: f64 = 1000.0;

    /// Shortest logged workout in seconds
    pub const DURATION_SEC_MIN: f64 = 1.0;
    /// Longest logged workout in seconds (one day)
    pub const DURATION_SEC_MAX: f64 = 86_400.0;
}

/// Environment variable names read by the configuration layer
pub mod env_config {
    /// Comma separated field names exempt from the whole-number rule
    pub const INTEGER_EXEMPT_FIELDS: &str = "TIIZI_INTEGER_EXEMPT_FIELDS";
    /// Maximum upload size in bytes
    pub const MAX_UPLOAD_BYTES: &str = "TIIZI_MAX_UPLOAD_BYTES";
    /// Comma separated MIME allow-list
    pub const ALLOWED_UPLOAD_TYPES: &str = "TIIZI_ALLOWED_UPLOAD_TYPES";
}

/// Service identity for structured logging
pub mod service_names {
    /// Default service name
    pub const TIIZI_VALIDATION: &str = "tiizi-validation";
}
