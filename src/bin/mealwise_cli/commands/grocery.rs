// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Grocery list commands for mealwise-cli
// ABOUTME: Builds lists from plan files and manages the persisted checklist

use crate::helpers::output::print_json;
use anyhow::{Context as _, Result};
use mealwise::services::GroceryListService;
use mealwise::storage::JsonFileStore;
use mealwise_core::models::{CategoryTag, MealPlan};
use mealwise_intelligence::{GroceryListBuilder, KeywordClassifier, MealwiseConfig};
use serde_json::json;
use std::fs;
use std::path::Path;
use tracing::info;

fn builder() -> GroceryListBuilder {
    let classifier = KeywordClassifier::from_config(&MealwiseConfig::global().grocery);
    GroceryListBuilder::with_classifier(classifier)
}

fn service(store: &JsonFileStore) -> GroceryListService<&JsonFileStore> {
    GroceryListService::with_builder(store, builder())
}

/// Build a list from a plan file, or from the stored plan when no file is given
pub fn build(store: &JsonFileStore, plan_file: Option<&Path>, persist: bool) -> Result<()> {
    let service = service(store);
    let items = match plan_file {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("reading meal plan {}", path.display()))?;
            let plan: MealPlan = serde_json::from_str(&contents)
                .with_context(|| format!("parsing meal plan {}", path.display()))?;
            if persist {
                service.generate_from_meal_plan(&plan)?
            } else {
                builder().build(&plan)
            }
        }
        None => service.regenerate_from_stored_plan()?,
    };
    info!(items = items.len(), "Grocery list ready");
    print_json(&items)
}

/// Show the stored list, optionally grouped by category
pub fn show(store: &JsonFileStore, by_category: bool) -> Result<()> {
    let service = service(store);
    if by_category {
        print_json(&service.items_by_category())
    } else {
        print_json(&json!({
            "items": service.current_list(),
            "progress": service.progress(),
        }))
    }
}

/// Toggle one item by exact name
pub fn toggle(store: &JsonFileStore, name: &str) -> Result<()> {
    let item = service(store).toggle_checked(name)?;
    print_json(&item)
}

/// Add an item by hand
pub fn add(store: &JsonFileStore, name: &str, category: Option<CategoryTag>) -> Result<()> {
    let item = service(store).add_item(name, category)?;
    print_json(&item)
}

/// Delete one item by exact name
pub fn remove(store: &JsonFileStore, name: &str) -> Result<()> {
    let item = service(store).remove_item(name)?;
    print_json(&item)
}

/// Move one item to another category
pub fn categorize(store: &JsonFileStore, name: &str, category: CategoryTag) -> Result<()> {
    let item = service(store).set_category(name, category)?;
    print_json(&item)
}

/// Remove checked items
pub fn clear_checked(store: &JsonFileStore) -> Result<()> {
    let removed = service(store).clear_checked()?;
    print_json(&json!({ "removed": removed }))
}
