// ABOUTME: Structural type predicates for exercise documents
// ABOUTME: Decides movement vs wellness by field presence and JSON type, never by a tag
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise shape predicates
//!
//! Documents are classified the way the client app reads them: by which
//! fields are present and what JSON type each holds. No enum values are
//! checked, so `category: "bogus"` passes as long as it is a string. The
//! variant predicates are additive rather than exclusive: a document that
//! carries both movement and wellness fields satisfies both.

use serde::Deserialize;
use serde_json::{Map, Value};
use tiizi_core::models::{ExerciseBase, ExerciseDoc, MovementDetails, WellnessDetails};

const BASE_STRING_FIELDS: &[&str] = &["id", "name", "category", "subcategory", "challengeLevel"];
const BASE_NUMBER_FIELDS: &[&str] = &["difficultyScore", "estimatedCaloriesPerMinute", "xpReward"];
const BADGE_TIERS: &[&str] = &["starter", "committed", "elite"];
const STREAK_BADGE_TIERS: &[&str] = &["threeDay", "sevenDay", "thirtyDay"];
const LEADERBOARD_FLAGS: &[&str] = &["trackReps", "trackDuration", "trackCalories", "trackStreak"];

const MOVEMENT_STRING_FIELDS: &[&str] = &["setup", "execution", "progression", "regression"];
const MOVEMENT_LIST_FIELDS: &[&str] = &["formCues", "commonMistakes", "musclesWorked"];

const WELLNESS_STRING_FIELDS: &[&str] = &["description"];
const WELLNESS_LIST_FIELDS: &[&str] = &["trackingFields"];

/// `typeof value === "object" && value !== null`: objects and arrays
#[must_use]
pub fn is_non_null_object(value: &Value) -> bool {
    value.is_object() || value.is_array()
}

fn all_strings(object: &Map<String, Value>, keys: &[&str]) -> bool {
    keys.iter().all(|key| object.get(*key).is_some_and(Value::is_string))
}

fn all_numbers(object: &Map<String, Value>, keys: &[&str]) -> bool {
    keys.iter().all(|key| object.get(*key).is_some_and(Value::is_number))
}

fn all_booleans(object: &Map<String, Value>, keys: &[&str]) -> bool {
    keys.iter().all(|key| object.get(*key).is_some_and(Value::is_boolean))
}

fn all_string_lists(object: &Map<String, Value>, keys: &[&str]) -> bool {
    keys.iter().all(|key| {
        object
            .get(*key)
            .and_then(Value::as_array)
            .is_some_and(|items| items.iter().all(Value::is_string))
    })
}

fn is_badge_tier(value: &Value) -> bool {
    value.as_object().is_some_and(|tier| {
        tier.get("requirement").is_some_and(Value::is_number)
            && tier.get("badgeId").is_some_and(Value::is_string)
    })
}

fn has_badge_group(object: &Map<String, Value>, key: &str, tiers: &[&str]) -> bool {
    object.get(key).and_then(Value::as_object).is_some_and(|group| {
        tiers
            .iter()
            .all(|tier| group.get(*tier).is_some_and(is_badge_tier))
    })
}

fn has_leaderboard_metrics(object: &Map<String, Value>) -> bool {
    object
        .get("leaderboardMetrics")
        .and_then(Value::as_object)
        .is_some_and(|metrics| all_booleans(metrics, LEADERBOARD_FLAGS))
}

fn base_fields(value: &Value) -> Option<&Map<String, Value>> {
    let object = value.as_object()?;
    let complete = all_strings(object, BASE_STRING_FIELDS)
        && all_numbers(object, BASE_NUMBER_FIELDS)
        && has_badge_group(object, "badges", BADGE_TIERS)
        && has_badge_group(object, "streakBadges", STREAK_BADGE_TIERS)
        && has_leaderboard_metrics(object)
        && object
            .get("eligibleForChallenges")
            .is_some_and(Value::is_boolean)
        && all_string_lists(object, &["challengeTags"]);
    complete.then_some(object)
}

/// Whether `value` has the shared base shape
#[must_use]
pub fn is_exercise_base(value: &Value) -> bool {
    base_fields(value).is_some()
}

/// Whether `value` has the base shape plus every movement field
#[must_use]
pub fn is_movement_exercise(value: &Value) -> bool {
    base_fields(value).is_some_and(|object| {
        all_strings(object, MOVEMENT_STRING_FIELDS) && all_string_lists(object, MOVEMENT_LIST_FIELDS)
    })
}

/// Whether `value` has the base shape plus every wellness field
#[must_use]
pub fn is_wellness_exercise(value: &Value) -> bool {
    base_fields(value).is_some_and(|object| {
        all_strings(object, WELLNESS_STRING_FIELDS) && all_string_lists(object, WELLNESS_LIST_FIELDS)
    })
}

/// Whether `value` is a movement or a wellness exercise
#[must_use]
pub fn is_exercise_doc(value: &Value) -> bool {
    is_movement_exercise(value) || is_wellness_exercise(value)
}

/// Classify and decode a document.
///
/// Movement is tried first, so a document satisfying both shapes becomes a
/// movement exercise. Returns `None` for anything [`is_exercise_doc`] rejects.
#[must_use]
pub fn classify_exercise(value: &Value) -> Option<ExerciseDoc> {
    if is_movement_exercise(value) {
        let base = ExerciseBase::deserialize(value).ok()?;
        let details = MovementDetails::deserialize(value).ok()?;
        Some(ExerciseDoc::movement(base, details))
    } else if is_wellness_exercise(value) {
        let base = ExerciseBase::deserialize(value).ok()?;
        let details = WellnessDetails::deserialize(value).ok()?;
        Some(ExerciseDoc::wellness(base, details))
    } else {
        None
    }
}
