// ABOUTME: Core data models for recipes, meal plans, and grocery lists
// ABOUTME: Re-exports Recipe, MealPlan, GroceryItem and the lenient serde helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Plain data shared by the derivations and services. Recipes come from a
//! static catalog, meal plans and grocery lists from the key-value store.
//!
//! ## Core Models
//!
//! - `Recipe`: catalog entry with per-serving nutrition
//! - `MealPlan`: date-keyed map of `DayPlan` slots
//! - `GroceryItem`: deduplicated, categorized checklist line

mod grocery;
mod meal_plan;
mod recipe;

/// Field deserializers that degrade malformed values to defaults
pub mod lenient;

// Recipe domain
pub use recipe::{Diet, Ingredient, NutritionFacts, Recipe, VitaminsMinerals};

// Meal plan domain
pub use meal_plan::{parse_day_key, DayPlan, MealPlan, MealSlot, MealTotals, PlannedMeal};

// Grocery domain
pub use grocery::{CategoryTag, GroceryItem};
