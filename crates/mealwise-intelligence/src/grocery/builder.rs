// ABOUTME: Grocery list builder turning a meal plan into a deduplicated, categorized checklist
// ABOUTME: Walks days chronologically, then breakfast, lunch, dinner, keeping first-seen order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::categorization::{IngredientClassifier, KeywordClassifier};
use mealwise_core::models::{CategoryTag, GroceryItem, MealPlan};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Builds grocery lists from meal plans
///
/// Ingredients are deduplicated by exact name. Snacks are not part of the
/// shopping list; only breakfast, lunch and dinner slots are scanned.
#[derive(Debug, Clone, Default)]
pub struct GroceryListBuilder<C = KeywordClassifier> {
    classifier: C,
}

impl GroceryListBuilder<KeywordClassifier> {
    /// Builder using the default keyword classifier
    #[must_use]
    pub fn new() -> Self {
        Self::with_classifier(KeywordClassifier::new())
    }
}

impl<C: IngredientClassifier> GroceryListBuilder<C> {
    /// Builder using a custom classification policy
    #[must_use]
    pub const fn with_classifier(classifier: C) -> Self {
        Self { classifier }
    }

    /// The classification policy in use
    pub const fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Derive the grocery list for a plan
    ///
    /// Every ingredient named in a populated slot appears exactly once, unchecked,
    /// with its category assigned on first encounter. An empty plan yields an
    /// empty list.
    #[must_use]
    pub fn build(&self, plan: &MealPlan) -> Vec<GroceryItem> {
        let mut items: Vec<GroceryItem> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();
        let days = plan.days_chronological();

        for (_, day) in &days {
            for (_, meal) in day.meals() {
                for ingredient in &meal.ingredients {
                    if let Some(&pos) = index.get(ingredient.as_str()) {
                        items[pos].occurrences = items[pos].occurrences.saturating_add(1);
                        continue;
                    }
                    index.insert(ingredient.as_str(), items.len());
                    items.push(GroceryItem::new(
                        ingredient.as_str(),
                        self.classifier.classify(ingredient),
                    ));
                }
            }
        }

        debug!(
            days = days.len(),
            items = items.len(),
            "Built grocery list from meal plan"
        );
        items
    }
}

/// Group items by category, keeping list order within each group
///
/// Only categories with at least one item are present.
#[must_use]
pub fn items_by_category(items: &[GroceryItem]) -> BTreeMap<CategoryTag, Vec<&GroceryItem>> {
    let mut groups: BTreeMap<CategoryTag, Vec<&GroceryItem>> = BTreeMap::new();
    for item in items {
        groups.entry(item.category).or_default().push(item);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use mealwise_core::models::{MealSlot, PlannedMeal};

    fn meal(name: &str, ingredients: &[&str]) -> PlannedMeal {
        PlannedMeal::new(name).with_ingredients(ingredients.iter().copied())
    }

    #[test]
    fn test_dedup_across_days_keeps_first_seen_order() {
        let mut plan = MealPlan::new();
        plan.set_meal("2024-12-16", MealSlot::Breakfast, meal("Toast", &["Egg", "Bread"]));
        plan.set_meal("2024-12-17", MealSlot::Breakfast, meal("Rice Bowl", &["Bread", "Rice"]));

        let items = GroceryListBuilder::new().build(&plan);
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Egg", "Bread", "Rice"]);
        assert!(items.iter().all(|i| !i.checked));
        assert_eq!(items[1].occurrences, 2);
    }

    #[test]
    fn test_slot_order_within_day() {
        let mut plan = MealPlan::new();
        plan.set_meal("2024-12-16", MealSlot::Dinner, meal("Curry", &["Chicken"]));
        plan.set_meal("2024-12-16", MealSlot::Breakfast, meal("Oats", &["Oats"]));
        plan.set_meal("2024-12-16", MealSlot::Lunch, meal("Salad", &["Lettuce"]));

        let items = GroceryListBuilder::new().build(&plan);
        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Oats", "Lettuce", "Chicken"]);
    }

    #[test]
    fn test_snacks_are_not_shopped() {
        let mut plan = MealPlan::new();
        plan.day_mut("2024-12-16")
            .snacks
            .push(meal("Trail Mix", &["Almonds"]));
        assert!(GroceryListBuilder::new().build(&plan).is_empty());
    }

    #[test]
    fn test_names_compare_exactly() {
        let mut plan = MealPlan::new();
        plan.set_meal("2024-12-16", MealSlot::Lunch, meal("A", &["Onion", "onion", "Onions"]));
        assert_eq!(GroceryListBuilder::new().build(&plan).len(), 3);
    }

    #[test]
    fn test_custom_classifier() {
        let builder = GroceryListBuilder::with_classifier(|_: &str| CategoryTag::Dairy);
        let mut plan = MealPlan::new();
        plan.set_meal("2024-12-16", MealSlot::Lunch, meal("A", &["Rice"]));
        assert_eq!(builder.build(&plan)[0].category, CategoryTag::Dairy);
    }

    #[test]
    fn test_group_by_category() {
        let items = vec![
            GroceryItem::new("Rice", CategoryTag::Pantry),
            GroceryItem::new("Spinach", CategoryTag::Produce),
            GroceryItem::new("Salt", CategoryTag::Pantry),
        ];
        let groups = items_by_category(&items);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[&CategoryTag::Pantry].len(), 2);
        assert_eq!(groups.keys().next(), Some(&CategoryTag::Produce));
    }
}
