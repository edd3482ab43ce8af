// ABOUTME: Storage key constants for persisted meal plans, grocery lists, preferences, and intake
// ABOUTME: Values match the keys the client-local store has always used
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Key holding the persisted weekly meal plan
pub const MEAL_PLAN_KEY: &str = "meal-plan-store";

/// Key holding the persisted grocery list (replaced wholesale on regeneration)
pub const GROCERY_LIST_KEY: &str = "grocery-store";

/// Key holding the user's plan generation preferences
pub const PREFERENCES_KEY: &str = "recipe-preferences";

/// Key holding logged daily nutrition intake
pub const NUTRITION_LOG_KEY: &str = "nutrition-store";
