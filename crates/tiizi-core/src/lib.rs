// ABOUTME: Core types and constants for the Tiizi validation layer
// ABOUTME: Foundation crate with error handling, field constraints, and exercise models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Tiizi Core
//!
//! Foundation crate providing shared types and constants for Tiizi input
//! validation. It changes rarely, so the validation crate above it can be
//! rebuilt without touching these definitions.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the aggregated `ValidationFailure`
//! - **constants**: the field constraint table, reserved usernames, upload and numeric limits
//! - **models**: the typed exercise catalog (`ExerciseDoc` and friends)

/// Unified error handling with standard error codes
pub mod errors;

/// Constants organized by domain
pub mod constants;

/// Exercise catalog models
pub mod models;
