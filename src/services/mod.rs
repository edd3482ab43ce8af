// ABOUTME: Domain service layer over the key-value store and the derivation engine
// ABOUTME: Grocery lists, meal plans, nutrition intake tracking, and the recipe catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services own a [`KeyValueStore`](crate::storage::KeyValueStore) handle and
//! wrap the pure derivations from `mealwise-intelligence` with persistence.
//! They are front-end agnostic: the CLI and tests drive the same operations.

/// Grocery checklist generation and management
pub mod grocery;

/// Meal plan editing, weekly summaries, and seeded generation
pub mod meal_plan;

/// Daily nutrition intake and progress against reference values
pub mod nutrition;

/// Recipe catalog loading and search
pub mod recipes;

pub use grocery::{GroceryListService, GroceryProgress};
pub use meal_plan::{GenerationPreferences, MealPlanService, WeeklySummary};
pub use nutrition::{LoggedMeal, NutritionTracker, WeekProgress};
pub use recipes::{RecipeCatalog, RecipeQuery};
