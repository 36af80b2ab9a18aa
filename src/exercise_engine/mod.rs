// ABOUTME: Exercise engine data contract validation
// ABOUTME: Structural predicates, payload verdicts, typed ingestion, and snapshot status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Exercise Engine Contract
//!
//! The exercise catalog is stored as loosely typed documents. This module
//! checks an engine payload (`{ exercises: [...], systemConfig: {...} }`)
//! without mutating it, and converts valid payloads into
//! [`ExerciseDoc`](tiizi_core::models::ExerciseDoc) values whose variant is
//! decided once, at ingestion.

/// Payload verdicts and typed ingestion
pub mod payload;
/// Structural shape predicates
pub mod predicates;
/// Store snapshot status
pub mod snapshot;

pub use payload::{
    ingest_engine_payload, validate_exercise_engine_payload, EnginePayload, PayloadValidation,
};
pub use predicates::{
    classify_exercise, is_exercise_base, is_exercise_doc, is_movement_exercise,
    is_non_null_object, is_wellness_exercise,
};
pub use snapshot::EngineSnapshotStatus;

use serde_json::Value;
use std::fs;
use std::path::Path;
use tiizi_core::errors::{AppError, AppResult};

/// Read a JSON payload from disk. Validation is a separate step.
///
/// # Errors
///
/// Returns `InternalError` when the file cannot be read and
/// `SerializationError` when it is not valid JSON
pub fn load_payload_file(path: &Path) -> AppResult<Value> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::internal(format!("Failed to read {}: {e}", path.display())).with_source(e)
    })?;
    Ok(serde_json::from_str(&contents)?)
}
