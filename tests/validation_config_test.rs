// ABOUTME: Integration tests for environment-driven validation configuration
// ABOUTME: Tests defaults, overrides, and rejection of malformed values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use serial_test::serial;
use std::env;
use tiizi_validation::config::ValidationConfig;
use tiizi_validation::constants::env_config;
use tiizi_validation::errors::ErrorCode;
use tiizi_validation::validation::{
    validate_support_request_with, FileUpload, NumericInput, SupportRequest,
};

fn clear_env() {
    env::remove_var(env_config::INTEGER_EXEMPT_FIELDS);
    env::remove_var(env_config::MAX_UPLOAD_BYTES);
    env::remove_var(env_config::ALLOWED_UPLOAD_TYPES);
}

#[test]
#[serial]
fn test_defaults_without_env() {
    common::init_test_logging();
    clear_env();

    let config = ValidationConfig::from_env().unwrap();
    assert_eq!(config, ValidationConfig::default());
    assert!(config.integer_exempt_fields.contains("durationSec"));
    assert_eq!(config.max_upload_bytes, 5 * 1024 * 1024);
    assert_eq!(config.allowed_upload_types.len(), 4);
}

#[test]
#[serial]
fn test_env_overrides() {
    clear_env();
    env::set_var(env_config::INTEGER_EXEMPT_FIELDS, "durationSec, Pledge amount ,");
    env::set_var(env_config::MAX_UPLOAD_BYTES, " 2048 ");
    env::set_var(env_config::ALLOWED_UPLOAD_TYPES, "image/png,application/pdf");

    let config = ValidationConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.integer_exempt_fields.len(), 2);
    assert_eq!(config.max_upload_bytes, 2048);

    let numeric = config.numeric_rules();
    assert!(numeric
        .validate(&NumericInput::from(0.01), "Pledge amount", 0.01, 1_000_000.0)
        .is_valid);

    let uploads = config.upload_rules();
    assert!(uploads
        .validate(Some(&FileUpload::new("doc.pdf", "application/pdf", 2048)))
        .is_valid);
    assert!(!uploads
        .validate(Some(&FileUpload::new("a.gif", "image/gif", 10)))
        .is_valid);
}

#[test]
#[serial]
fn test_empty_exempt_list_disables_exemptions() {
    clear_env();
    env::set_var(env_config::INTEGER_EXEMPT_FIELDS, "");

    let config = ValidationConfig::from_env().unwrap();
    clear_env();

    assert!(config.integer_exempt_fields.is_empty());
    assert!(!config.numeric_rules().allows_fraction("durationSec"));
}

#[test]
#[serial]
fn test_malformed_upload_size() {
    clear_env();
    env::set_var(env_config::MAX_UPLOAD_BYTES, "five megabytes");

    let err = ValidationConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
    assert!(err.message.contains(env_config::MAX_UPLOAD_BYTES));
}

#[test]
#[serial]
fn test_empty_upload_type_list() {
    clear_env();
    env::set_var(env_config::ALLOWED_UPLOAD_TYPES, " , ");

    let err = ValidationConfig::from_env().unwrap_err();
    clear_env();

    assert_eq!(err.code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_env_exemption_reaches_support_request() {
    clear_env();
    env::set_var(env_config::INTEGER_EXEMPT_FIELDS, "durationSec,Pledge amount");

    let config = ValidationConfig::from_env().unwrap();
    clear_env();

    let request = SupportRequest {
        title: Some("Coach travel".to_owned()),
        description: Some("Bus fare to the regional meet".to_owned()),
        amount: Some(NumericInput::from("0.01")),
    };
    assert!(validate_support_request_with(&request, &config.numeric_rules()).is_valid);
    assert!(!validate_support_request_with(&request, &ValidationConfig::default().numeric_rules())
        .is_valid);
}
