// ABOUTME: Daily nutrition intake log with progress against daily reference values
// ABOUTME: Logs eaten meals per date and reports day totals, day progress, and weekly averages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition intake tracking.
//!
//! Intake is stored per ISO date. Day and week figures are recomputed from the
//! logged meals on every read; nothing derived is persisted.

use crate::storage::{KeyValueStore, StoreExt};
use chrono::{Duration, NaiveDate};
use mealwise_core::constants::NUTRITION_LOG_KEY;
use mealwise_core::errors::{AppError, AppResult};
use mealwise_core::models::{parse_day_key, Recipe};
use mealwise_intelligence::{DailyValue, NutritionScaler, ScaledNutrition, ServingSize};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

const DAYS_PER_WEEK: u32 = 7;

/// One meal as eaten
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggedMeal {
    /// Meal or recipe name
    pub name: String,
    /// Nutrition actually consumed
    #[serde(default)]
    pub nutrition: ScaledNutrition,
}

impl LoggedMeal {
    /// Meal with explicit nutrition
    #[must_use]
    pub fn new(name: impl Into<String>, nutrition: ScaledNutrition) -> Self {
        Self {
            name: name.into(),
            nutrition,
        }
    }
}

/// Intake for a seven-day window
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekProgress {
    /// First day of the window
    pub start: NaiveDate,
    /// Sum over all seven days
    pub totals: ScaledNutrition,
    /// Totals divided by seven, rounded
    pub daily_average: ScaledNutrition,
    /// Per-day totals in date order, days without intake included as zero
    pub days: Vec<(NaiveDate, ScaledNutrition)>,
}

type IntakeLog = BTreeMap<NaiveDate, Vec<LoggedMeal>>;

/// Nutrition intake operations over a key-value store
pub struct NutritionTracker<S> {
    store: S,
    scaler: NutritionScaler,
}

impl<S: KeyValueStore> NutritionTracker<S> {
    /// Tracker comparing against the default daily references
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_scaler(store, NutritionScaler::default())
    }

    /// Tracker comparing against a configured scaler's references
    #[must_use]
    pub const fn with_scaler(store: S, scaler: NutritionScaler) -> Self {
        Self { store, scaler }
    }

    fn log(&self) -> IntakeLog {
        self.store.load(NUTRITION_LOG_KEY).unwrap_or_default()
    }

    fn day(date: &str) -> AppResult<NaiveDate> {
        parse_day_key(date)
            .ok_or_else(|| AppError::invalid_input(format!("Unrecognized date '{date}'")))
    }

    /// Record a meal eaten on a date, returning the day's new totals
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for an unparseable date and a
    /// serialization error if the log cannot be encoded
    pub fn log_meal(&self, date: &str, meal: LoggedMeal) -> AppResult<ScaledNutrition> {
        let day = Self::day(date)?;
        let mut log = self.log();
        let meals = log.entry(day).or_default();
        debug!(%day, meal = %meal.name, "Logging meal");
        meals.push(meal);
        let totals = Self::sum(meals);
        self.store.save(NUTRITION_LOG_KEY, &log)?;
        Ok(totals)
    }

    /// Record a recipe eaten at a serving size
    ///
    /// # Errors
    ///
    /// Same as [`Self::log_meal`]
    pub fn log_recipe(
        &self,
        date: &str,
        recipe: &Recipe,
        servings: ServingSize,
    ) -> AppResult<ScaledNutrition> {
        let nutrition = self.scaler.scale_nutrition(&recipe.nutrition, servings);
        self.log_meal(date, LoggedMeal::new(recipe.name.clone(), nutrition))
    }

    /// Remove the meal at `index` from a date; a day left empty is dropped
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for an unparseable date and a
    /// serialization error if the log cannot be encoded
    pub fn remove_meal(&self, date: &str, index: usize) -> AppResult<Option<LoggedMeal>> {
        let day = Self::day(date)?;
        let mut log = self.log();
        let Some(meals) = log.get_mut(&day) else {
            return Ok(None);
        };
        if index >= meals.len() {
            return Ok(None);
        }
        let removed = meals.remove(index);
        if meals.is_empty() {
            log.remove(&day);
        }
        self.store.save(NUTRITION_LOG_KEY, &log)?;
        Ok(Some(removed))
    }

    /// Meals logged on a date
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for an unparseable date
    pub fn meals_on(&self, date: &str) -> AppResult<Vec<LoggedMeal>> {
        let day = Self::day(date)?;
        Ok(self.log().remove(&day).unwrap_or_default())
    }

    fn sum(meals: &[LoggedMeal]) -> ScaledNutrition {
        meals
            .iter()
            .fold(ScaledNutrition::default(), |acc, m| acc.saturating_add(m.nutrition))
    }

    /// Sum of everything logged on a date
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for an unparseable date
    pub fn day_totals(&self, date: &str) -> AppResult<ScaledNutrition> {
        Ok(Self::sum(&self.meals_on(date)?))
    }

    /// Day totals compared with the daily references, one entry per nutrient
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for an unparseable date
    pub fn day_progress(&self, date: &str) -> AppResult<Vec<DailyValue>> {
        Ok(self.scaler.daily_values(&self.day_totals(date)?))
    }

    /// Totals and daily averages for the seven days starting at `start`
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for an unparseable date
    pub fn week_progress(&self, start: &str) -> AppResult<WeekProgress> {
        let start = Self::day(start)?;
        let log = self.log();
        let days: Vec<(NaiveDate, ScaledNutrition)> = (0..i64::from(DAYS_PER_WEEK))
            .map(|offset| {
                let day = start + Duration::days(offset);
                let totals = log
                    .get(&day)
                    .map_or_else(ScaledNutrition::default, |meals| Self::sum(meals));
                (day, totals)
            })
            .collect();
        let totals = days
            .iter()
            .fold(ScaledNutrition::default(), |acc, (_, t)| acc.saturating_add(*t));
        Ok(WeekProgress {
            start,
            totals,
            daily_average: totals.per_day(DAYS_PER_WEEK),
            days,
        })
    }
}
