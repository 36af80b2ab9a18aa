// ABOUTME: Engine status summary for a snapshot of the exercise store
// ABOUTME: Wraps stored exercise documents and the global config into a payload verdict
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::Serialize;
use serde_json::{json, Value};

use super::payload::validate_exercise_engine_payload;
use super::predicates::classify_exercise;

/// What the admin engine screen shows about the stored catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineSnapshotStatus {
    /// Whether the assembled payload passed validation
    pub is_payload_valid: bool,
    /// Validation errors for the assembled payload
    pub validation_errors: Vec<String>,
    /// Documents in the snapshot
    pub exercise_count: usize,
    /// Documents classified as movement exercises
    pub movement_count: usize,
    /// Documents classified as wellness exercises
    pub wellness_count: usize,
}

impl EngineSnapshotStatus {
    /// Evaluate a snapshot of the `exercises` collection and the optional
    /// `systemConfig/global` document. A missing config document is treated
    /// as `null` and reported by the payload validator.
    #[must_use]
    pub fn evaluate(exercises: Vec<Value>, system_config: Option<Value>) -> Self {
        let payload = json!({
            "exercises": exercises,
            "systemConfig": system_config.unwrap_or(Value::Null),
        });
        let verdict = validate_exercise_engine_payload(&payload);

        let entries = payload
            .get("exercises")
            .and_then(Value::as_array)
            .map_or(&[][..], Vec::as_slice);
        let classified: Vec<_> = entries.iter().filter_map(classify_exercise).collect();

        Self {
            is_payload_valid: verdict.valid,
            validation_errors: verdict.errors,
            exercise_count: entries.len(),
            movement_count: classified.iter().filter(|doc| doc.is_movement()).count(),
            wellness_count: classified.iter().filter(|doc| doc.is_wellness()).count(),
        }
    }
}
