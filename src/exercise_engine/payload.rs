// ABOUTME: Exercise engine payload validation and typed ingestion
// ABOUTME: Checks the exercises/systemConfig envelope and reports every invalid entry
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tiizi_core::models::ExerciseDoc;
use tracing::{debug, warn};

use super::predicates::{classify_exercise, is_exercise_doc, is_non_null_object};

/// Verdict on an engine payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadValidation {
    /// Whether every check passed
    pub valid: bool,
    /// Every failed check, in detection order
    pub errors: Vec<String>,
}

impl PayloadValidation {
    fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// A validated payload with every exercise classified
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnginePayload {
    /// Classified exercises, in payload order
    pub exercises: Vec<ExerciseDoc>,
    /// Engine-wide settings, passed through untouched
    pub system_config: Value,
}

/// Label used for an entry in error messages: its `id`, or `unknown id`
fn exercise_label(entry: &Value) -> String {
    match entry.get("id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Null) | None => "unknown id".to_owned(),
        Some(other) => other.to_string(),
    }
}

fn invalid_exercise_error(index: usize, entry: &Value) -> String {
    format!(
        "Exercise at index {index} ({}) does not match the movement or wellness shape",
        exercise_label(entry)
    )
}

/// Validate an engine payload `{ exercises: [...], systemConfig: {...} }`.
///
/// A payload that is not an object gets a single error and nothing else is
/// checked. Otherwise the exercises check and the `systemConfig` check both
/// run, and every invalid exercise is reported by index.
#[must_use]
pub fn validate_exercise_engine_payload(payload: &Value) -> PayloadValidation {
    if !is_non_null_object(payload) {
        return PayloadValidation::from_errors(vec![
            "Payload must be a non-null object".to_owned()
        ]);
    }

    let mut errors = Vec::new();

    match payload.get("exercises").and_then(Value::as_array) {
        Some(exercises) => {
            errors.extend(
                exercises
                    .iter()
                    .enumerate()
                    .filter(|(_, entry)| !is_exercise_doc(entry))
                    .map(|(index, entry)| invalid_exercise_error(index, entry)),
            );
        }
        None => errors.push("exercises must be an array".to_owned()),
    }

    if !payload.get("systemConfig").is_some_and(is_non_null_object) {
        errors.push("systemConfig must be a non-null object".to_owned());
    }

    debug!(error_count = errors.len(), "Validated exercise engine payload");
    PayloadValidation::from_errors(errors)
}

/// Validate a payload and decode it into typed exercises.
///
/// # Errors
///
/// Returns the [`PayloadValidation`] verdict when the payload is invalid
pub fn ingest_engine_payload(payload: &Value) -> Result<EnginePayload, PayloadValidation> {
    let verdict = validate_exercise_engine_payload(payload);
    if !verdict.valid {
        warn!(
            error_count = verdict.errors.len(),
            "Rejected exercise engine payload"
        );
        return Err(verdict);
    }

    let entries = payload
        .get("exercises")
        .and_then(Value::as_array)
        .map_or(&[][..], Vec::as_slice);

    let mut exercises = Vec::with_capacity(entries.len());
    let mut errors = Vec::new();
    for (index, entry) in entries.iter().enumerate() {
        match classify_exercise(entry) {
            Some(exercise) => exercises.push(exercise),
            None => errors.push(invalid_exercise_error(index, entry)),
        }
    }
    if !errors.is_empty() {
        return Err(PayloadValidation::from_errors(errors));
    }

    Ok(EnginePayload {
        exercises,
        system_config: payload.get("systemConfig").cloned().unwrap_or_default(),
    })
}
