// ABOUTME: Integration tests for upload validation
// ABOUTME: Tests required check, exact MIME allow-list, size ceiling, and configured rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used)]

use tiizi_validation::constants::uploads::MAX_FILE_SIZE_BYTES;
use tiizi_validation::validation::{validate_file, FileUpload, UploadRules};

#[test]
fn test_missing_file() {
    let result = validate_file(None);
    assert_eq!(result.errors, vec!["File is required".to_owned()]);
}

#[test]
fn test_allowed_image_types() {
    for mime in ["image/jpeg", "image/png", "image/webp", "image/gif"] {
        let file = FileUpload::new("avatar", mime, 1024);
        assert!(validate_file(Some(&file)).is_valid, "{mime} should be allowed");
    }
}

#[test]
fn test_type_matching_is_exact() {
    for mime in ["image/svg+xml", "image/*", "IMAGE/PNG", "image/png; charset=x", "application/pdf"] {
        let file = FileUpload::new("x", mime, 10);
        let result = validate_file(Some(&file));
        assert!(!result.is_valid, "{mime} should be rejected");
        assert!(result.has_error_containing("File type must be one of"));
    }
}

#[test]
fn test_size_ceiling() {
    let at_limit = FileUpload::new("big.png", "image/png", MAX_FILE_SIZE_BYTES);
    assert!(validate_file(Some(&at_limit)).is_valid);

    let over = FileUpload::new("huge.png", "image/png", MAX_FILE_SIZE_BYTES + 1);
    let result = validate_file(Some(&over));
    assert_eq!(
        result.errors,
        vec!["File size must be less than 5MB".to_owned()]
    );
}

#[test]
fn test_type_and_size_errors_reported_together() {
    let file = FileUpload::new("movie.mp4", "video/mp4", 50 * 1024 * 1024);
    let result = validate_file(Some(&file));
    assert_eq!(result.errors.len(), 2);
}

#[test]
fn test_custom_rules() {
    let rules = UploadRules::new(["application/pdf"], 1000);
    assert!(rules
        .validate(Some(&FileUpload::new("doc.pdf", "application/pdf", 999)))
        .is_valid);

    let result = rules.validate(Some(&FileUpload::new("doc.pdf", "application/pdf", 1001)));
    assert_eq!(
        result.errors,
        vec!["File size must be less than 1000 bytes".to_owned()]
    );
}

#[test]
fn test_file_upload_json_shape() {
    let file: FileUpload =
        serde_json::from_str(r#"{"name":"a.gif","type":"image/gif","size":42}"#).unwrap();
    assert_eq!(file, FileUpload::new("a.gif", "image/gif", 42));
}
