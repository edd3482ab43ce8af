// ABOUTME: Grocery list service: generate from meal plans, persist, and manage the checklist
// ABOUTME: Each generation replaces the stored list wholesale, resetting checked state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::storage::{KeyValueStore, StoreExt};
use mealwise_core::constants::{GROCERY_LIST_KEY, MEAL_PLAN_KEY};
use mealwise_core::errors::{AppError, AppResult};
use mealwise_core::models::{CategoryTag, GroceryItem, MealPlan};
use mealwise_intelligence::grocery::{
    items_by_category, GroceryListBuilder, IngredientClassifier, KeywordClassifier,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

/// Checklist completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GroceryProgress {
    /// Items ticked off
    pub checked: usize,
    /// Items on the list
    pub total: usize,
}

impl GroceryProgress {
    /// Whole-number completion percentage, zero for an empty list
    #[must_use]
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.checked as f64 / self.total as f64 * 100.0).round() as u32
    }
}

/// Grocery checklist operations over a key-value store
pub struct GroceryListService<S, C = KeywordClassifier> {
    store: S,
    builder: GroceryListBuilder<C>,
}

impl<S: KeyValueStore> GroceryListService<S, KeywordClassifier> {
    /// Service using the default keyword classifier
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_builder(store, GroceryListBuilder::new())
    }
}

impl<S: KeyValueStore, C: IngredientClassifier> GroceryListService<S, C> {
    /// Service using a custom builder
    #[must_use]
    pub const fn with_builder(store: S, builder: GroceryListBuilder<C>) -> Self {
        Self { store, builder }
    }

    /// Underlying store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Build the list for a plan and replace the stored list with it
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the list cannot be encoded
    pub fn generate_from_meal_plan(&self, plan: &MealPlan) -> AppResult<Vec<GroceryItem>> {
        let items = self.builder.build(plan);
        self.store.save(GROCERY_LIST_KEY, &items)?;
        info!(items = items.len(), "Generated grocery list");
        Ok(items)
    }

    /// Regenerate from the meal plan currently in the store
    ///
    /// A missing or unreadable plan is treated as empty.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the list cannot be encoded
    pub fn regenerate_from_stored_plan(&self) -> AppResult<Vec<GroceryItem>> {
        let plan: MealPlan = self.store.load(MEAL_PLAN_KEY).unwrap_or_default();
        self.generate_from_meal_plan(&plan)
    }

    /// The stored list; empty when nothing has been generated
    #[must_use]
    pub fn current_list(&self) -> Vec<GroceryItem> {
        self.store.load(GROCERY_LIST_KEY).unwrap_or_default()
    }

    /// Flip the checked flag of the named item
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no item has this exact name
    pub fn toggle_checked(&self, name: &str) -> AppResult<GroceryItem> {
        let mut items = self.current_list();
        let item = items
            .iter_mut()
            .find(|i| i.name == name)
            .ok_or_else(|| AppError::not_found(format!("Grocery item '{name}'")))?;
        item.checked = !item.checked;
        let toggled = item.clone();
        self.store.save(GROCERY_LIST_KEY, &items)?;
        Ok(toggled)
    }

    /// Append a hand-entered item, classifying it when no category is given
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for a blank name and an already-exists
    /// error when an item with the same name is on the list
    pub fn add_item(&self, name: &str, category: Option<CategoryTag>) -> AppResult<GroceryItem> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_input("Grocery item name must not be blank"));
        }
        let mut items = self.current_list();
        if items.iter().any(|i| i.name == name) {
            return Err(AppError::already_exists(format!("Grocery item '{name}'")));
        }
        let category = category.unwrap_or_else(|| self.builder.classifier().classify(name));
        let item = GroceryItem::new(name, category);
        items.push(item.clone());
        self.store.save(GROCERY_LIST_KEY, &items)?;
        info!(item = name, %category, "Added grocery item");
        Ok(item)
    }

    /// Delete the named item, returning it
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no item has this exact name
    pub fn remove_item(&self, name: &str) -> AppResult<GroceryItem> {
        let mut items = self.current_list();
        let index = items
            .iter()
            .position(|i| i.name == name)
            .ok_or_else(|| AppError::not_found(format!("Grocery item '{name}'")))?;
        let removed = items.remove(index);
        self.store.save(GROCERY_LIST_KEY, &items)?;
        Ok(removed)
    }

    /// Move the named item to another aisle category
    ///
    /// # Errors
    ///
    /// Returns a not-found error if no item has this exact name
    pub fn set_category(&self, name: &str, category: CategoryTag) -> AppResult<GroceryItem> {
        let mut items = self.current_list();
        let item = items
            .iter_mut()
            .find(|i| i.name == name)
            .ok_or_else(|| AppError::not_found(format!("Grocery item '{name}'")))?;
        item.category = category;
        let updated = item.clone();
        self.store.save(GROCERY_LIST_KEY, &items)?;
        Ok(updated)
    }

    /// Drop every checked item, returning how many were removed
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the list cannot be encoded
    pub fn clear_checked(&self) -> AppResult<usize> {
        let mut items = self.current_list();
        let before = items.len();
        items.retain(|i| !i.checked);
        let removed = before - items.len();
        if removed > 0 {
            self.store.save(GROCERY_LIST_KEY, &items)?;
        }
        Ok(removed)
    }

    /// Stored items grouped by category
    #[must_use]
    pub fn items_by_category(&self) -> BTreeMap<CategoryTag, Vec<GroceryItem>> {
        let items = self.current_list();
        items_by_category(&items)
            .into_iter()
            .map(|(tag, group)| (tag, group.into_iter().cloned().collect()))
            .collect()
    }

    /// Checked and total counts
    #[must_use]
    pub fn progress(&self) -> GroceryProgress {
        let items = self.current_list();
        GroceryProgress {
            checked: items.iter().filter(|i| i.checked).count(),
            total: items.len(),
        }
    }
}
