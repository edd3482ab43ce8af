// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Recipe commands for mealwise-cli
// ABOUTME: Scales a catalog recipe by serving size and searches the catalog

use crate::helpers::output::print_json;
use anyhow::Result;
use mealwise::services::{RecipeCatalog, RecipeQuery};
use mealwise_intelligence::{NutritionScaler, ServingSize};
use serde_json::json;

/// Scale a recipe by name
pub fn scale(catalog: &RecipeCatalog, name: &str, servings: ServingSize) -> Result<()> {
    let recipe = catalog.get(name)?;
    let scaled = NutritionScaler::from_global().scale(recipe, servings);
    print_json(&scaled)
}

/// Print recipes matching the query
pub fn search(catalog: &RecipeCatalog, query: &RecipeQuery, names_only: bool) -> Result<()> {
    let hits = catalog.search(query);
    if names_only {
        let names: Vec<&str> = hits.iter().map(|r| r.name.as_str()).collect();
        print_json(&names)
    } else {
        print_json(&hits)
    }
}

/// Print the diet and cuisine values present in the catalog
pub fn filters(catalog: &RecipeCatalog) -> Result<()> {
    print_json(&json!({
        "diets": catalog.diets(),
        "cuisines": catalog.cuisines(),
        "servings": ServingSize::menu(),
    }))
}
