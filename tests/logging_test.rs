// ABOUTME: Integration tests for logging configuration
// ABOUTME: Tests environment handling and the verbose override
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used)]

use serial_test::serial;
use std::env;
use tiizi_validation::logging::{LogFormat, LoggingConfig};

fn clear_env() {
    for key in ["RUST_LOG", "LOG_FORMAT", "ENVIRONMENT", "SERVICE_NAME", "LOG_INCLUDE_LOCATION"] {
        env::remove_var(key);
    }
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    clear_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");
    env::set_var("SERVICE_NAME", "seed-checker");

    let config = LoggingConfig::from_env();
    clear_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.environment, "production");
    assert_eq!(config.service_name, "seed-checker");
    assert!(config.include_location);
}

#[test]
#[serial]
fn test_logging_defaults() {
    clear_env();
    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.service_name, "tiizi-validation");
    assert!(!config.include_location);
}

#[test]
fn test_verbose_raises_level() {
    let config = LoggingConfig::default().verbose();
    assert_eq!(config.level, "debug");
}
