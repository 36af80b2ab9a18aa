// ABOUTME: Main library entry point for Tiizi input validation
// ABOUTME: Text sanitization, field validators, and the exercise engine data contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Tiizi Validation
//!
//! The integrity boundary between untrusted client input and the Tiizi
//! document store (users, groups, posts, challenges, exercises).
//!
//! ## Components
//!
//! - **validation**: sanitizes free text and validates every user-entered
//!   field, upload and form. Invalid input comes back as a
//!   [`ValidationResult`](validation::ValidationResult), never as an error.
//! - **`exercise_engine`**: structural validation of the polymorphic exercise
//!   catalog and its `{ exercises, systemConfig }` payload envelope.
//!
//! The two components share no state and do not call each other. Every
//! function is pure and synchronous except
//! [`with_validation`](validation::with_validation), which awaits the
//! operation it guards.
//!
//! ## Example Usage
//!
//! ```rust
//! use serde_json::json;
//! use tiizi_validation::exercise_engine::validate_exercise_engine_payload;
//! use tiizi_validation::validation::{sanitize_text, validate_username};
//!
//! assert_eq!(sanitize_text("hi<script>steal()</script>"), "hi");
//! assert!(validate_username("plank_master").is_valid);
//!
//! let verdict = validate_exercise_engine_payload(&json!({ "exercises": [] }));
//! assert_eq!(verdict.errors, vec!["systemConfig must be a non-null object".to_owned()]);
//! ```

/// Validation tunables and environment loading
pub mod config;

/// Error types re-exported from `tiizi-core`
pub mod errors;

/// Exercise engine payload validation
pub mod exercise_engine;

/// Structured logging setup
pub mod logging;

/// Text sanitization and input validation
pub mod validation;

pub use tiizi_core::{constants, models};
