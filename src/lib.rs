// ABOUTME: Main library entry point for the Mealwise meal-planning toolkit
// ABOUTME: Provides storage backends, domain services, and logging setup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mealwise
//!
//! Recipe discovery and meal planning. The derivations (grocery lists and
//! nutrition scaling) live in `mealwise-intelligence`; this crate adds
//! persistence, catalog search, plan editing, and the command-line front end.
//!
//! ## Architecture
//!
//! - **storage**: whole-value key-value store trait with in-memory and JSON file backends
//! - **services**: grocery list, meal plan, and recipe catalog operations
//! - **logging**: `tracing` subscriber configuration from the environment
//!
//! ## Example
//!
//! ```rust,no_run
//! use mealwise::services::GroceryListService;
//! use mealwise::storage::InMemoryStore;
//! use mealwise_core::models::{MealPlan, MealSlot, PlannedMeal};
//!
//! # fn example() -> Result<(), mealwise_core::errors::AppError> {
//! let mut plan = MealPlan::new();
//! plan.set_meal(
//!     "2024-12-16",
//!     MealSlot::Breakfast,
//!     PlannedMeal::new("Omelette").with_ingredients(["Egg", "Onion"]),
//! );
//!
//! let service = GroceryListService::new(InMemoryStore::new());
//! let items = service.generate_from_meal_plan(&plan)?;
//! assert_eq!(items.len(), 2);
//! # Ok(())
//! # }
//! ```

/// Logging configuration and subscriber setup
pub mod logging;

/// Domain services over storage and the derivation engine
pub mod services;

/// Key-value storage abstraction and backends
pub mod storage;

pub use mealwise_core::errors::{AppError, AppResult, ErrorCode};
