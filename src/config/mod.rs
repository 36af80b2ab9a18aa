// ABOUTME: Configuration module for validation tunables and their environment overrides
// ABOUTME: Exposes ValidationConfig, the source of configured numeric and upload rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//! Configuration module
//!
//! The free validator functions always use the built-in defaults. Deployments
//! that need different numeric exemptions or upload limits build a
//! [`ValidationConfig`](validation::ValidationConfig) and use the rule objects
//! it produces.

/// Validation tunables
pub mod validation;

pub use validation::ValidationConfig;
