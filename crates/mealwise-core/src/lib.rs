// ABOUTME: Core types and constants for the Mealwise meal-planning toolkit
// ABOUTME: Foundation crate with error handling, data models, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mealwise Core
//!
//! Foundation crate providing shared types and constants for the Mealwise
//! meal-planning toolkit. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **constants**: Storage keys, daily reference values, and the serving menu
//! - **models**: Recipes, meal plans, and grocery items

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Core data models (Recipe, `MealPlan`, `GroceryItem`, etc.)
pub mod models;
