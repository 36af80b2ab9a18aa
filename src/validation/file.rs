// ABOUTME: Upload validation for profile, group, and post images
// ABOUTME: Checks MIME type against an exact allow-list and enforces the size ceiling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use tiizi_core::constants::uploads;

use super::result::ValidationResult;

/// Metadata of a file picked by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileUpload {
    /// Original file name
    pub name: String,
    /// MIME type reported by the client
    #[serde(rename = "type")]
    pub mime_type: String,
    /// Size in bytes
    pub size: u64,
}

impl FileUpload {
    /// Describe an upload
    #[must_use]
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            size,
        }
    }
}

/// Allow-list and size ceiling for uploads
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRules {
    allowed_types: Vec<String>,
    max_bytes: u64,
}

impl Default for UploadRules {
    fn default() -> Self {
        Self::new(
            uploads::ALLOWED_IMAGE_TYPES.iter().copied(),
            uploads::MAX_FILE_SIZE_BYTES,
        )
    }
}

impl UploadRules {
    /// Build rules from an allow-list and a byte limit
    #[must_use]
    pub fn new<I, S>(allowed_types: I, max_bytes: u64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_types: allowed_types.into_iter().map(Into::into).collect(),
            max_bytes,
        }
    }

    /// Accepted MIME types
    #[must_use]
    pub fn allowed_types(&self) -> &[String] {
        &self.allowed_types
    }

    /// Largest accepted size in bytes
    #[must_use]
    pub const fn max_bytes(&self) -> u64 {
        self.max_bytes
    }

    fn size_label(&self) -> String {
        const MIB: u64 = 1024 * 1024;
        if self.max_bytes >= MIB && self.max_bytes % MIB == 0 {
            format!("{}MB", self.max_bytes / MIB)
        } else {
            format!("{} bytes", self.max_bytes)
        }
    }

    /// Validate an upload. Type and size are checked independently, so both
    /// errors can be reported together.
    #[must_use]
    pub fn validate(&self, file: Option<&FileUpload>) -> ValidationResult {
        let Some(file) = file else {
            return ValidationResult::invalid("File is required");
        };

        let mut errors = Vec::new();
        if !self.allowed_types.iter().any(|allowed| *allowed == file.mime_type) {
            errors.push(format!(
                "File type must be one of: {}",
                self.allowed_types.join(", ")
            ));
        }
        if file.size > self.max_bytes {
            errors.push(format!("File size must be less than {}", self.size_label()));
        }
        ValidationResult::from_errors(errors)
    }
}

/// Validate an upload with the default image allow-list and 5 MiB ceiling
#[must_use]
pub fn validate_file(file: Option<&FileUpload>) -> ValidationResult {
    UploadRules::default().validate(file)
}
