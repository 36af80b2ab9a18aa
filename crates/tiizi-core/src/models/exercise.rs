// ABOUTME: Exercise catalog models for the exercise engine
// ABOUTME: Shared base record plus movement and wellness variants with an untagged kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog category of an exercise.
///
/// Stored documents carry the category as free text; this enum is for
/// consumers that want to branch on the known values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ExerciseCategory {
    /// Trunk stability work
    Core,
    /// Legs and glutes
    #[serde(rename = "Lower Body")]
    LowerBody,
    /// Conditioning
    Cardio,
    /// Range-of-motion work
    Mobility,
    /// Breathing, sleep, hydration and similar habits
    Wellness,
}

impl ExerciseCategory {
    /// Parse the stored representation, case-sensitively
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Core" => Some(Self::Core),
            "Lower Body" => Some(Self::LowerBody),
            "Cardio" => Some(Self::Cardio),
            "Mobility" => Some(Self::Mobility),
            "Wellness" => Some(Self::Wellness),
            _ => None,
        }
    }

    /// Stored representation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Core => "Core",
            Self::LowerBody => "Lower Body",
            Self::Cardio => "Cardio",
            Self::Mobility => "Mobility",
            Self::Wellness => "Wellness",
        }
    }
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Challenge difficulty band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ChallengeLevel {
    /// Entry level
    Beginner,
    /// Mid level
    Intermediate,
    /// Top level
    Advanced,
}

impl ChallengeLevel {
    /// Parse the stored representation, case-sensitively
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Beginner" => Some(Self::Beginner),
            "Intermediate" => Some(Self::Intermediate),
            "Advanced" => Some(Self::Advanced),
            _ => None,
        }
    }
}

/// A badge awarded once `requirement` is reached
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeTier {
    /// Threshold to earn the badge (reps, minutes or sessions)
    pub requirement: f64,
    /// Badge document id
    pub badge_id: String,
}

/// Volume badges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseBadges {
    /// First tier
    pub starter: BadgeTier,
    /// Second tier
    pub committed: BadgeTier,
    /// Top tier
    pub elite: BadgeTier,
}

/// Consecutive-day badges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakBadges {
    /// Three day streak
    pub three_day: BadgeTier,
    /// Seven day streak
    pub seven_day: BadgeTier,
    /// Thirty day streak
    pub thirty_day: BadgeTier,
}

/// Which leaderboards an exercise feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardMetrics {
    /// Rank by repetitions
    pub track_reps: bool,
    /// Rank by time under work
    pub track_duration: bool,
    /// Rank by estimated calories
    pub track_calories: bool,
    /// Rank by streak length
    pub track_streak: bool,
}

/// Fields shared by every exercise document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseBase {
    /// Document id
    pub id: String,
    /// Display name
    pub name: String,
    /// Category as stored; see [`ExerciseCategory::parse`]
    pub category: String,
    /// Free-form subcategory
    pub subcategory: String,
    /// Relative difficulty
    pub difficulty_score: f64,
    /// Calorie estimate used by the workout logger
    pub estimated_calories_per_minute: f64,
    /// Volume badges
    pub badges: ExerciseBadges,
    /// Streak badges
    pub streak_badges: StreakBadges,
    /// Leaderboard participation
    pub leaderboard_metrics: LeaderboardMetrics,
    /// Challenge level as stored; see [`ChallengeLevel::parse`]
    pub challenge_level: String,
    /// Experience points per completed session
    pub xp_reward: f64,
    /// Whether challenges may include this exercise
    pub eligible_for_challenges: bool,
    /// Tags used when assembling challenges
    pub challenge_tags: Vec<String>,
}

impl ExerciseBase {
    /// Category, when it is one of the known values
    #[must_use]
    pub fn category_kind(&self) -> Option<ExerciseCategory> {
        ExerciseCategory::parse(&self.category)
    }

    /// Challenge level, when it is one of the known values
    #[must_use]
    pub fn challenge_level_kind(&self) -> Option<ChallengeLevel> {
        ChallengeLevel::parse(&self.challenge_level)
    }
}

/// Coaching content for a physical movement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementDetails {
    /// Starting position
    pub setup: String,
    /// How to perform one repetition
    pub execution: String,
    /// Short coaching cues
    pub form_cues: Vec<String>,
    /// Errors to watch for
    pub common_mistakes: Vec<String>,
    /// Target muscles
    pub muscles_worked: Vec<String>,
    /// Harder variation
    pub progression: String,
    /// Easier variation
    pub regression: String,
}

/// Content for a habit-style wellness practice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WellnessDetails {
    /// What the practice is
    pub description: String,
    /// Which values a session records
    pub tracking_fields: Vec<String>,
}

/// Variant-specific part of an exercise document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ExerciseKind {
    /// Physical movement with coaching content
    Movement(MovementDetails),
    /// Wellness practice
    Wellness(WellnessDetails),
}

/// A classified exercise document.
///
/// The variant is decided once, at ingestion, from which fields the stored
/// document carries. Serializing flattens back to the stored shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExerciseDoc {
    /// Shared fields
    #[serde(flatten)]
    pub base: ExerciseBase,
    /// Variant fields
    #[serde(flatten)]
    pub kind: ExerciseKind,
}

impl ExerciseDoc {
    /// Build a movement exercise
    #[must_use]
    pub const fn movement(base: ExerciseBase, details: MovementDetails) -> Self {
        Self {
            base,
            kind: ExerciseKind::Movement(details),
        }
    }

    /// Build a wellness exercise
    #[must_use]
    pub const fn wellness(base: ExerciseBase, details: WellnessDetails) -> Self {
        Self {
            base,
            kind: ExerciseKind::Wellness(details),
        }
    }

    /// Document id
    #[must_use]
    pub fn id(&self) -> &str {
        &self.base.id
    }

    /// Movement content, for movement exercises
    #[must_use]
    pub const fn movement_details(&self) -> Option<&MovementDetails> {
        match &self.kind {
            ExerciseKind::Movement(details) => Some(details),
            ExerciseKind::Wellness(_) => None,
        }
    }

    /// Wellness content, for wellness exercises
    #[must_use]
    pub const fn wellness_details(&self) -> Option<&WellnessDetails> {
        match &self.kind {
            ExerciseKind::Wellness(details) => Some(details),
            ExerciseKind::Movement(_) => None,
        }
    }

    /// Whether this is a movement exercise
    #[must_use]
    pub const fn is_movement(&self) -> bool {
        matches!(self.kind, ExerciseKind::Movement(_))
    }

    /// Whether this is a wellness exercise
    #[must_use]
    pub const fn is_wellness(&self) -> bool {
        matches!(self.kind, ExerciseKind::Wellness(_))
    }
}
