// ABOUTME: Domain models shared by the validation layer
// ABOUTME: Re-exports the typed exercise catalog used after payload ingestion
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain models

// Exercise catalog domain
mod exercise;
pub use exercise::{
    BadgeTier, ChallengeLevel, ExerciseBadges, ExerciseBase, ExerciseCategory, ExerciseDoc,
    ExerciseKind, LeaderboardMetrics, MovementDetails, StreakBadges, WellnessDetails,
};
