// ABOUTME: Derived-state engine for Mealwise: grocery lists and nutrition scaling
// ABOUTME: Pure, synchronous computations over recipes and meal plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Mealwise Intelligence
//!
//! The computations behind the meal-planning screens. Both derivations are
//! pure functions of their input: the same plan always yields the same grocery
//! list, the same recipe and serving size always yield the same scaled recipe.
//!
//! ## Modules
//!
//! - **grocery**: deduplicated, categorized grocery lists from a `MealPlan`
//! - **`nutrition_scaler`**: nutrition, quantities, and prep time scaled by servings
//! - **config**: tunable references, factors, and keyword lists

/// Scaling and grocery configuration with validation and env overrides
pub mod config;

/// Grocery list generation and ingredient classification
pub mod grocery;

/// Recipe nutrition, quantity, and prep time scaling
pub mod nutrition_scaler;

pub use config::{ConfigError, GroceryConfig, MealwiseConfig, ScalingConfig};
pub use grocery::{GroceryListBuilder, IngredientClassifier, KeywordClassifier};
pub use nutrition_scaler::{
    DailyValue, Nutrient, NutritionScaler, ScaledNutrition, ScaledRecipe, ServingSize,
};
