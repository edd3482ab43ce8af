// ABOUTME: Recipe catalog loaded from static JSON with lookup, search, and filter listings
// ABOUTME: Malformed entries are skipped; a malformed document is a serialization error
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use mealwise_core::errors::{AppError, AppResult, ErrorCode};
use mealwise_core::models::{Diet, Recipe};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Filters for catalog search; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeQuery {
    /// Case-insensitive text matched against the name or any ingredient name
    pub text: Option<String>,
    /// Accepted diets; empty accepts all
    #[serde(default)]
    pub diets: Vec<Diet>,
    /// Accepted cuisines, compared case-insensitively; empty accepts all
    #[serde(default)]
    pub cuisines: Vec<String>,
    /// Shortest acceptable prep time in minutes
    pub min_time: Option<u32>,
    /// Longest acceptable prep time in minutes
    pub max_time: Option<u32>,
    /// Lowest acceptable calories per serving
    pub min_calories: Option<u32>,
    /// Highest acceptable calories per serving
    pub max_calories: Option<u32>,
}

impl RecipeQuery {
    /// Query matching every recipe
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Match text in the name or ingredients
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Accept a diet
    #[must_use]
    pub fn with_diet(mut self, diet: Diet) -> Self {
        self.diets.push(diet);
        self
    }

    /// Accept a cuisine
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisines.push(cuisine.into());
        self
    }

    /// Cap prep time
    #[must_use]
    pub const fn with_max_time(mut self, minutes: u32) -> Self {
        self.max_time = Some(minutes);
        self
    }

    /// Bound calories per serving
    #[must_use]
    pub const fn with_calorie_range(mut self, min: Option<u32>, max: Option<u32>) -> Self {
        self.min_calories = min;
        self.max_calories = max;
        self
    }

    /// Whether a recipe passes every filter
    #[must_use]
    pub fn matches(&self, recipe: &Recipe) -> bool {
        self.matches_text(recipe)
            && (self.diets.is_empty() || self.diets.contains(&recipe.diet))
            && (self.cuisines.is_empty()
                || self
                    .cuisines
                    .iter()
                    .any(|c| c.trim().eq_ignore_ascii_case(recipe.cuisine.trim())))
            && self.min_time.is_none_or(|min| recipe.time >= min)
            && self.max_time.is_none_or(|max| recipe.time <= max)
            && self
                .min_calories
                .is_none_or(|min| recipe.nutrition.calories >= f64::from(min))
            && self
                .max_calories
                .is_none_or(|max| recipe.nutrition.calories <= f64::from(max))
    }

    fn matches_text(&self, recipe: &Recipe) -> bool {
        let Some(text) = self.text.as_deref().map(str::trim).filter(|t| !t.is_empty()) else {
            return true;
        };
        let needle = text.to_lowercase();
        recipe.name.to_lowercase().contains(&needle)
            || recipe
                .ingredient_names()
                .any(|name| name.to_lowercase().contains(&needle))
    }
}

/// Read-only recipe catalog keyed by recipe name
#[derive(Debug, Clone, Default)]
pub struct RecipeCatalog {
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    /// Build a catalog from recipes, dropping later duplicates by name
    #[must_use]
    pub fn from_recipes(recipes: Vec<Recipe>) -> Self {
        let mut seen = HashSet::new();
        let mut unique = Vec::with_capacity(recipes.len());
        for recipe in recipes {
            if recipe.name.trim().is_empty() {
                warn!("Skipping recipe without a name");
                continue;
            }
            if seen.insert(recipe.name.clone()) {
                unique.push(recipe);
            } else {
                warn!(recipe = %recipe.name, "Skipping duplicate recipe");
            }
        }
        Self { recipes: unique }
    }

    /// Parse a catalog document
    ///
    /// Accepts either a JSON array of recipes or an object with a `recipes` array.
    /// Entries that are not valid recipes are skipped.
    ///
    /// # Errors
    ///
    /// Returns a serialization error for invalid JSON, or a missing-field error
    /// when the document holds no recipe array
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        let document: Value = serde_json::from_str(json)?;
        let entries = match document {
            Value::Array(entries) => entries,
            Value::Object(mut root) => match root.remove("recipes") {
                Some(Value::Array(entries)) => entries,
                _ => {
                    return Err(AppError::new(
                        ErrorCode::MissingRequiredField,
                        "catalog object has no 'recipes' array",
                    ))
                }
            },
            _ => {
                return Err(AppError::new(
                    ErrorCode::MissingRequiredField,
                    "catalog must be an array of recipes",
                ))
            }
        };

        let total = entries.len();
        let recipes: Vec<Recipe> = entries
            .into_iter()
            .filter_map(|entry| match serde_json::from_value::<Recipe>(entry) {
                Ok(recipe) => Some(recipe),
                Err(e) => {
                    warn!("Skipping malformed catalog entry: {e}");
                    None
                }
            })
            .collect();
        debug!(total, parsed = recipes.len(), "Parsed recipe catalog");
        Ok(Self::from_recipes(recipes))
    }

    /// Load a catalog file
    ///
    /// # Errors
    ///
    /// Returns a storage error if the file cannot be read, or any error from
    /// [`Self::from_json_str`]
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| {
            AppError::storage(format!("Failed to read catalog {}", path.display())).with_source(e)
        })?;
        let catalog = Self::from_json_str(&contents)?;
        info!(path = %path.display(), recipes = catalog.len(), "Loaded recipe catalog");
        Ok(catalog)
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// True when the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// All recipes in catalog order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Recipe with exactly this name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.name == name)
    }

    /// Recipe with exactly this name, or a not-found error
    ///
    /// # Errors
    ///
    /// Returns a resource-not-found error when no recipe has this name
    pub fn get(&self, name: &str) -> AppResult<&Recipe> {
        self.find(name)
            .ok_or_else(|| AppError::not_found(format!("Recipe '{name}'")))
    }

    /// Recipes passing every filter of the query, in catalog order
    #[must_use]
    pub fn search(&self, query: &RecipeQuery) -> Vec<&Recipe> {
        self.recipes.iter().filter(|r| query.matches(r)).collect()
    }

    /// Distinct diets present, sorted by label
    #[must_use]
    pub fn diets(&self) -> Vec<Diet> {
        let mut diets: Vec<Diet> = self
            .recipes
            .iter()
            .map(|r| r.diet)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();
        diets.sort_by_key(Diet::as_str);
        diets
    }

    /// Distinct non-empty cuisines, sorted
    #[must_use]
    pub fn cuisines(&self) -> Vec<String> {
        self.recipes
            .iter()
            .map(|r| r.cuisine.trim())
            .filter(|c| !c.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use mealwise_core::models::NutritionFacts;

    fn catalog() -> RecipeCatalog {
        RecipeCatalog::from_recipes(vec![
            Recipe::new("Chana Masala")
                .with_diet(Diet::Vegan)
                .with_cuisine("Indian")
                .with_time(40)
                .with_ingredient("Chickpeas", "200 g")
                .with_nutrition(NutritionFacts::macros(380.0, 15.0, 55.0, 9.0)),
            Recipe::new("Grilled Salmon")
                .with_diet(Diet::Pescatarian)
                .with_cuisine("Mediterranean")
                .with_time(25)
                .with_ingredient("Salmon", "180 g"),
            Recipe::new("Chana Masala").with_time(5),
        ])
    }

    #[test]
    fn test_duplicates_keep_first() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.find("Chana Masala").map(|r| r.time), Some(40));
    }

    #[test]
    fn test_text_search_covers_ingredients() {
        let catalog = catalog();
        let hits = catalog.search(&RecipeQuery::new().with_text("chickpea"));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Chana Masala");
    }

    #[test]
    fn test_unknown_recipe_is_not_found() {
        let err = catalog().get("Pad Thai").unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceNotFound);
    }
}
