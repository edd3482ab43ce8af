// ABOUTME: Meal plan service: slot editing, snacks, weekly summaries, and seeded plan generation
// ABOUTME: Persists the whole plan under the meal-plan key after every change
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal plan editing and generation.
//!
//! Generation is deterministic for a given seed: the same catalog, preferences
//! and seed always produce the same week.

use super::recipes::{RecipeCatalog, RecipeQuery};
use crate::storage::{KeyValueStore, StoreExt};
use chrono::{Duration, NaiveDate};
use mealwise_core::constants::{MEAL_PLAN_KEY, PREFERENCES_KEY};
use mealwise_core::errors::AppResult;
use mealwise_core::models::{DayPlan, Diet, MealPlan, MealSlot, MealTotals, PlannedMeal, Recipe};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

/// Days in a generated plan
const DAYS_PER_WEEK: i64 = 7;

/// Recipes at or under this many minutes are eligible as snacks
const SNACK_MAX_MINUTES: u32 = 15;

/// Preferences steering plan generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationPreferences {
    /// Accepted diets; empty accepts all
    pub diets: Vec<Diet>,
    /// Accepted cuisines; empty accepts all
    pub cuisines: Vec<String>,
    /// Longest acceptable prep time per meal
    pub max_prep_time: Option<u32>,
    /// Add one quick snack per day
    pub include_snacks: bool,
    /// Allow a recipe to repeat before every candidate has been used
    pub repeat_meals: bool,
}

impl Default for GenerationPreferences {
    fn default() -> Self {
        Self {
            diets: Vec::new(),
            cuisines: Vec::new(),
            max_prep_time: Some(60),
            include_snacks: true,
            repeat_meals: false,
        }
    }
}

impl GenerationPreferences {
    /// Catalog query equivalent to these preferences
    #[must_use]
    pub fn to_query(&self) -> RecipeQuery {
        RecipeQuery {
            diets: self.diets.clone(),
            cuisines: self.cuisines.clone(),
            max_time: self.max_prep_time,
            ..RecipeQuery::default()
        }
    }
}

/// Totals for the whole plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WeeklySummary {
    /// Calories across main meals and snacks
    pub total_calories: u32,
    /// Prep minutes across main meals and snacks
    pub total_prep_minutes: u32,
    /// Populated breakfast, lunch and dinner slots
    pub planned_meals: usize,
    /// Snacks planned
    pub snacks: usize,
    /// Days with anything planned
    pub planned_days: usize,
}

/// Draws recipes for slots without repeating until the pool runs dry
struct RecipePicker<'a> {
    pool: Vec<&'a Recipe>,
    remaining: Vec<&'a Recipe>,
    repeat: bool,
}

impl<'a> RecipePicker<'a> {
    fn new(pool: Vec<&'a Recipe>, repeat: bool) -> Self {
        Self {
            remaining: pool.clone(),
            pool,
            repeat,
        }
    }

    fn pick(&mut self, rng: &mut ChaCha8Rng) -> Option<&'a Recipe> {
        if self.repeat {
            return self.pool.choose(rng).copied();
        }
        if self.remaining.is_empty() {
            self.remaining.clone_from(&self.pool);
        }
        if self.remaining.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.remaining.len());
        Some(self.remaining.swap_remove(index))
    }
}

/// Meal plan operations over a key-value store
pub struct MealPlanService<S> {
    store: S,
}

impl<S: KeyValueStore> MealPlanService<S> {
    /// Service over a store
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying store
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// The stored plan; empty when none exists
    #[must_use]
    pub fn plan(&self) -> MealPlan {
        self.store.load(MEAL_PLAN_KEY).unwrap_or_default()
    }

    /// Replace the stored plan
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the plan cannot be encoded
    pub fn save_plan(&self, plan: &MealPlan) -> AppResult<()> {
        self.store.save(MEAL_PLAN_KEY, plan)
    }

    /// Meals planned for a date key
    #[must_use]
    pub fn meals_for_date(&self, date: &str) -> Option<DayPlan> {
        self.plan().day(date).cloned()
    }

    /// Place a meal, returning the one it replaced
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the plan cannot be encoded
    pub fn add_meal(
        &self,
        date: &str,
        slot: MealSlot,
        meal: PlannedMeal,
    ) -> AppResult<Option<PlannedMeal>> {
        let mut plan = self.plan();
        let previous = plan.set_meal(date, slot, meal);
        self.save_plan(&plan)?;
        Ok(previous)
    }

    /// Empty a slot; a day left with nothing planned is removed
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the plan cannot be encoded
    pub fn remove_meal(&self, date: &str, slot: MealSlot) -> AppResult<Option<PlannedMeal>> {
        let mut plan = self.plan();
        let Some(day) = plan.day(date) else {
            return Ok(None);
        };
        let mut day = day.clone();
        let removed = day.remove(slot);
        if day.is_empty() {
            plan.remove_day(date);
        } else {
            plan.insert_day(date, day);
        }
        self.save_plan(&plan)?;
        Ok(removed)
    }

    /// Append a snack to a day
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the plan cannot be encoded
    pub fn add_snack(&self, date: &str, snack: PlannedMeal) -> AppResult<()> {
        let mut plan = self.plan();
        plan.day_mut(date).snacks.push(snack);
        self.save_plan(&plan)
    }

    /// Remove a snack by position; out-of-range positions are ignored
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the plan cannot be encoded
    pub fn remove_snack(&self, date: &str, index: usize) -> AppResult<Option<PlannedMeal>> {
        let mut plan = self.plan();
        let Some(day) = plan.day(date) else {
            return Ok(None);
        };
        if index >= day.snacks.len() {
            return Ok(None);
        }
        let mut day = day.clone();
        let removed = day.snacks.remove(index);
        if day.is_empty() {
            plan.remove_day(date);
        } else {
            plan.insert_day(date, day);
        }
        self.save_plan(&plan)?;
        Ok(Some(removed))
    }

    /// Remove everything planned for a date, returning whether anything was there
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the plan cannot be encoded
    pub fn clear_day(&self, date: &str) -> AppResult<bool> {
        let mut plan = self.plan();
        let existed = plan.remove_day(date).is_some();
        if existed {
            self.save_plan(&plan)?;
        }
        Ok(existed)
    }

    /// Remove every planned day
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the plan cannot be encoded
    pub fn clear_week(&self) -> AppResult<()> {
        self.save_plan(&MealPlan::new())
    }

    /// Totals across the stored plan
    #[must_use]
    pub fn weekly_summary(&self) -> WeeklySummary {
        let plan = self.plan();
        let mut totals = MealTotals::default();
        let mut summary = WeeklySummary::default();
        for (_, day) in plan.iter() {
            totals.merge(day.totals());
            summary.planned_meals += day.meal_count();
            summary.snacks += day.snacks.len();
            if !day.is_empty() {
                summary.planned_days += 1;
            }
        }
        summary.total_calories = totals.calories;
        summary.total_prep_minutes = totals.time;
        summary
    }

    /// Stored generation preferences, or defaults
    #[must_use]
    pub fn preferences(&self) -> GenerationPreferences {
        self.store.load(PREFERENCES_KEY).unwrap_or_default()
    }

    /// Replace the stored generation preferences
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the preferences cannot be encoded
    pub fn set_preferences(&self, preferences: &GenerationPreferences) -> AppResult<()> {
        self.store.save(PREFERENCES_KEY, preferences)
    }

    /// Generate seven consecutive days from `start` and replace the stored plan
    ///
    /// Each slot gets a catalog recipe matching the preferences. When nothing
    /// matches, the generated plan is empty.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the plan cannot be encoded
    pub fn generate_week(
        &self,
        start: NaiveDate,
        catalog: &RecipeCatalog,
        preferences: &GenerationPreferences,
        seed: u64,
    ) -> AppResult<MealPlan> {
        let candidates = catalog.search(&preferences.to_query());
        let mut plan = MealPlan::new();

        if candidates.is_empty() {
            warn!("No recipes match the generation preferences, plan left empty");
            self.save_plan(&plan)?;
            return Ok(plan);
        }

        let snack_pool: Vec<&Recipe> = candidates
            .iter()
            .copied()
            .filter(|r| r.time <= SNACK_MAX_MINUTES)
            .collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut meals = RecipePicker::new(candidates, preferences.repeat_meals);
        let mut snacks = RecipePicker::new(snack_pool, true);

        for offset in 0..DAYS_PER_WEEK {
            let date = start + Duration::days(offset);
            let key = date.format("%Y-%m-%d").to_string();
            let day = plan.day_mut(key);
            for slot in MealSlot::ALL {
                if let Some(recipe) = meals.pick(&mut rng) {
                    day.set(slot, PlannedMeal::from_recipe(recipe));
                }
            }
            if preferences.include_snacks {
                if let Some(recipe) = snacks.pick(&mut rng) {
                    day.snacks.push(PlannedMeal::from_recipe(recipe));
                }
            }
            debug!(date = %date, meals = day.meal_count(), "Generated day");
        }

        self.save_plan(&plan)?;
        info!(days = plan.len(), seed, "Generated weekly meal plan");
        Ok(plan)
    }
}
