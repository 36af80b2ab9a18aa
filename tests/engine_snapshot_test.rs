// ABOUTME: Integration tests for the exercise engine snapshot status
// ABOUTME: Tests counts and validation errors reported for a loaded catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use common::{movement_exercise, wellness_exercise};
use serde_json::json;
use tiizi_validation::exercise_engine::EngineSnapshotStatus;

#[test]
fn test_valid_snapshot_counts() {
    let status = EngineSnapshotStatus::evaluate(
        vec![
            movement_exercise("plank"),
            movement_exercise("squat"),
            wellness_exercise("hydrate"),
        ],
        Some(json!({ "xpMultiplier": 2 })),
    );
    assert!(status.is_payload_valid);
    assert!(status.validation_errors.is_empty());
    assert_eq!(status.exercise_count, 3);
    assert_eq!(status.movement_count, 2);
    assert_eq!(status.wellness_count, 1);
}

#[test]
fn test_missing_config_invalidates_snapshot() {
    let status = EngineSnapshotStatus::evaluate(vec![wellness_exercise("hydrate")], None);
    assert!(!status.is_payload_valid);
    assert_eq!(
        status.validation_errors,
        vec!["systemConfig must be a non-null object".to_owned()]
    );
    assert_eq!(status.wellness_count, 1);
}

#[test]
fn test_malformed_entries_are_counted_but_not_classified() {
    let status = EngineSnapshotStatus::evaluate(
        vec![movement_exercise("plank"), json!({ "id": "ghost" })],
        Some(json!({})),
    );
    assert!(!status.is_payload_valid);
    assert_eq!(status.exercise_count, 2);
    assert_eq!(status.movement_count, 1);
    assert_eq!(status.wellness_count, 0);
    assert!(status.validation_errors[0].contains("index 1 (ghost)"));
}

#[test]
fn test_snapshot_serializes_camel_case() {
    let status = EngineSnapshotStatus::evaluate(Vec::new(), Some(json!({})));
    let value = serde_json::to_value(&status).unwrap();
    assert_eq!(value["isPayloadValid"], true);
    assert_eq!(value["exerciseCount"], 0);
    assert!(value["validationErrors"].as_array().unwrap().is_empty());
}
