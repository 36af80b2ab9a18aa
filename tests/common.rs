// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides quiet logging setup and exercise document builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `tiizi_validation`

use serde_json::{json, Value};
use std::env;
use std::io::{self, Write};
use std::sync::{Arc, Mutex, Once};
use tracing::{subscriber, Level};
use tracing_subscriber::fmt::MakeWriter;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // TEST_LOG controls the level; default to WARN for quiet tests
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// In-memory log sink for asserting on emitted events
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Everything written so far
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = Self;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Run `f` with a thread-local subscriber recording WARN and above
pub fn capture_warnings<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let recorder = tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(logs.clone())
        .finish();
    let output = subscriber::with_default(recorder, f);
    (output, logs.contents())
}

/// One badge tier
pub fn badge_tier(requirement: u32, badge_id: &str) -> Value {
    json!({ "requirement": requirement, "badgeId": badge_id })
}

/// Fields shared by every exercise document
pub fn base_exercise(id: &str, name: &str, category: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "category": category,
        "subcategory": "general",
        "difficultyScore": 2,
        "estimatedCaloriesPerMinute": 4.5,
        "badges": {
            "starter": badge_tier(10, &format!("{id}-starter")),
            "committed": badge_tier(100, &format!("{id}-committed")),
            "elite": badge_tier(500, &format!("{id}-elite")),
        },
        "streakBadges": {
            "threeDay": badge_tier(3, &format!("{id}-streak-3")),
            "sevenDay": badge_tier(7, &format!("{id}-streak-7")),
            "thirtyDay": badge_tier(30, &format!("{id}-streak-30")),
        },
        "leaderboardMetrics": {
            "trackReps": true,
            "trackDuration": false,
            "trackCalories": true,
            "trackStreak": true,
        },
        "challengeLevel": "Beginner",
        "xpReward": 10,
        "eligibleForChallenges": true,
        "challengeTags": [],
    })
}

/// Merge `extra` object fields into `target`
pub fn with_fields(mut target: Value, extra: Value) -> Value {
    let target_map = target.as_object_mut().unwrap();
    for (key, value) in extra.as_object().unwrap() {
        target_map.insert(key.clone(), value.clone());
    }
    target
}

/// Movement-only fields
pub fn movement_fields() -> Value {
    json!({
        "setup": "Forearms on the floor, elbows under shoulders",
        "execution": "Hold a straight line from head to heels",
        "formCues": ["Brace the core", "Squeeze the glutes"],
        "commonMistakes": ["Hips sagging"],
        "musclesWorked": ["rectus abdominis", "transverse abdominis"],
        "progression": "Single-leg plank",
        "regression": "Knee plank",
    })
}

/// Wellness-only fields
pub fn wellness_fields() -> Value {
    json!({
        "description": "Drink a glass of water after waking up",
        "trackingFields": ["glasses", "timeOfDay"],
    })
}

/// A complete movement exercise
pub fn movement_exercise(id: &str) -> Value {
    with_fields(base_exercise(id, "Plank", "Core"), movement_fields())
}

/// A complete wellness exercise
pub fn wellness_exercise(id: &str) -> Value {
    with_fields(
        base_exercise(id, "Morning Hydration", "Wellness"),
        wellness_fields(),
    )
}
