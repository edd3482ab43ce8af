// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Pure data constants organized by domain for the Mealwise toolkit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// Well-known keys in the client-local key-value store
pub mod storage_keys;
/// Daily reference values used for percentage-of-goal display
pub mod daily_values;
/// Serving menu and recipe scaling heuristics
pub mod scaling;

pub use daily_values::*;
pub use storage_keys::*;
