// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Meal plan commands for mealwise-cli
// ABOUTME: Generates seeded weekly plans and reports the stored plan and its totals

use crate::helpers::output::print_json;
use anyhow::Result;
use chrono::NaiveDate;
use mealwise::services::{GenerationPreferences, MealPlanService, RecipeCatalog};
use mealwise::storage::JsonFileStore;
use mealwise_core::models::{MealSlot, PlannedMeal};
use serde_json::json;

/// Generate a week and store it
pub fn generate(
    store: &JsonFileStore,
    catalog: &RecipeCatalog,
    start: NaiveDate,
    preferences: Option<GenerationPreferences>,
    seed: u64,
) -> Result<()> {
    let service = MealPlanService::new(store);
    let preferences = match preferences {
        Some(prefs) => {
            service.set_preferences(&prefs)?;
            prefs
        }
        None => service.preferences(),
    };
    let plan = service.generate_week(start, catalog, &preferences, seed)?;
    print_json(&plan)
}

/// Print the stored plan
pub fn show(store: &JsonFileStore) -> Result<()> {
    print_json(&MealPlanService::new(store).plan())
}

/// Print weekly totals
pub fn summary(store: &JsonFileStore) -> Result<()> {
    print_json(&MealPlanService::new(store).weekly_summary())
}

/// Put a catalog recipe into a slot
pub fn add(
    store: &JsonFileStore,
    catalog: &RecipeCatalog,
    date: &str,
    slot: MealSlot,
    recipe: &str,
) -> Result<()> {
    let meal = PlannedMeal::from_recipe(catalog.get(recipe)?);
    let replaced = MealPlanService::new(store).add_meal(date, slot, meal)?;
    print_json(&json!({ "date": date, "slot": slot, "replaced": replaced }))
}

/// Empty a slot
pub fn remove(store: &JsonFileStore, date: &str, slot: MealSlot) -> Result<()> {
    let removed = MealPlanService::new(store).remove_meal(date, slot)?;
    print_json(&json!({ "date": date, "slot": slot, "removed": removed }))
}

/// Clear one day, or the whole plan when no date is given
pub fn clear(store: &JsonFileStore, date: Option<&str>) -> Result<()> {
    let service = MealPlanService::new(store);
    match date {
        Some(date) => {
            let cleared = service.clear_day(date)?;
            print_json(&json!({ "date": date, "cleared": cleared }))
        }
        None => {
            service.clear_week()?;
            print_json(&json!({ "cleared": "all" }))
        }
    }
}
