// ABOUTME: Meal plan models: MealPlan keyed by date, DayPlan slots, and PlannedMeal
// ABOUTME: Deserialization is lenient so stored plans with bad entries still load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::lenient;
use super::recipe::Recipe;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Date formats accepted for day keys, tried in order
const DAY_KEY_FORMATS: [&str; 2] = ["%Y-%m-%d", "%a %b %d %Y"];

/// One of the three main meal slots in a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
}

impl MealSlot {
    /// All slots in the order they occur during a day
    pub const ALL: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// Slot name as stored
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            other => Err(format!(
                "unknown meal slot '{other}', expected breakfast, lunch or dinner"
            )),
        }
    }
}

const fn one_serving() -> u32 {
    1
}

/// A meal placed into a plan slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedMeal {
    /// Recipe name
    #[serde(default)]
    pub name: String,
    /// Calories for the meal
    #[serde(default, deserialize_with = "lenient::count_or_zero")]
    pub calories: u32,
    /// Prep time in minutes
    #[serde(default, deserialize_with = "lenient::count_or_zero")]
    pub time: u32,
    /// Number of servings planned
    #[serde(default = "one_serving", deserialize_with = "lenient::servings_or_one")]
    pub servings: u32,
    /// Ingredient names
    #[serde(default, deserialize_with = "lenient::string_list")]
    pub ingredients: Vec<String>,
}

impl PlannedMeal {
    /// Create a single-serving meal with no ingredients
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            calories: 0,
            time: 0,
            servings: 1,
            ingredients: Vec::new(),
        }
    }

    /// Build a planned meal from a catalog recipe, one serving
    #[must_use]
    pub fn from_recipe(recipe: &Recipe) -> Self {
        Self {
            name: recipe.name.clone(),
            calories: recipe.nutrition.calories.round().max(0.0) as u32,
            time: recipe.time,
            servings: 1,
            ingredients: recipe.ingredient_names().map(str::to_owned).collect(),
        }
    }

    /// Set calories
    #[must_use]
    pub const fn with_calories(mut self, calories: u32) -> Self {
        self.calories = calories;
        self
    }

    /// Set prep time in minutes
    #[must_use]
    pub const fn with_time(mut self, mins: u32) -> Self {
        self.time = mins;
        self
    }

    /// Set servings; zero is stored as one
    #[must_use]
    pub fn with_servings(mut self, servings: u32) -> Self {
        self.servings = servings.max(1);
        self
    }

    /// Replace the ingredient list
    #[must_use]
    pub fn with_ingredients<I, S>(mut self, ingredients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ingredients = ingredients.into_iter().map(Into::into).collect();
        self
    }
}

/// Totals across a set of meals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MealTotals {
    /// Sum of meal calories
    pub calories: u32,
    /// Sum of prep minutes
    pub time: u32,
    /// Number of meals counted
    pub meals: usize,
}

impl MealTotals {
    fn add(&mut self, meal: &PlannedMeal) {
        self.calories = self.calories.saturating_add(meal.calories);
        self.time = self.time.saturating_add(meal.time);
        self.meals += 1;
    }

    /// Merge another total into this one
    pub fn merge(&mut self, other: Self) {
        self.calories = self.calories.saturating_add(other.calories);
        self.time = self.time.saturating_add(other.time);
        self.meals += other.meals;
    }
}

/// Meals planned for one day
///
/// Empty slots are omitted from serialized output rather than written as null.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DayPlan {
    /// Breakfast slot
    #[serde(
        default,
        deserialize_with = "lenient::optional_record",
        skip_serializing_if = "Option::is_none"
    )]
    pub breakfast: Option<PlannedMeal>,
    /// Lunch slot
    #[serde(
        default,
        deserialize_with = "lenient::optional_record",
        skip_serializing_if = "Option::is_none"
    )]
    pub lunch: Option<PlannedMeal>,
    /// Dinner slot
    #[serde(
        default,
        deserialize_with = "lenient::optional_record",
        skip_serializing_if = "Option::is_none"
    )]
    pub dinner: Option<PlannedMeal>,
    /// Snacks; counted in weekly totals only
    #[serde(
        default,
        deserialize_with = "lenient::record_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub snacks: Vec<PlannedMeal>,
}

impl DayPlan {
    /// Meal in the given slot, if any
    #[must_use]
    pub const fn meal(&self, slot: MealSlot) -> Option<&PlannedMeal> {
        match slot {
            MealSlot::Breakfast => self.breakfast.as_ref(),
            MealSlot::Lunch => self.lunch.as_ref(),
            MealSlot::Dinner => self.dinner.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: MealSlot) -> &mut Option<PlannedMeal> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
        }
    }

    /// Place a meal in a slot, returning the meal it replaced
    pub fn set(&mut self, slot: MealSlot, meal: PlannedMeal) -> Option<PlannedMeal> {
        self.slot_mut(slot).replace(meal)
    }

    /// Empty a slot, returning the meal that was there
    pub fn remove(&mut self, slot: MealSlot) -> Option<PlannedMeal> {
        self.slot_mut(slot).take()
    }

    /// Populated main slots in breakfast, lunch, dinner order
    pub fn meals(&self) -> impl Iterator<Item = (MealSlot, &PlannedMeal)> {
        MealSlot::ALL
            .into_iter()
            .filter_map(move |slot| self.meal(slot).map(|meal| (slot, meal)))
    }

    /// Number of populated main slots
    #[must_use]
    pub fn meal_count(&self) -> usize {
        self.meals().count()
    }

    /// True when no main slot and no snack is planned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.meal_count() == 0 && self.snacks.is_empty()
    }

    /// Calories and prep time across main slots and snacks
    #[must_use]
    pub fn totals(&self) -> MealTotals {
        let mut totals = MealTotals::default();
        for (_, meal) in self.meals() {
            totals.add(meal);
        }
        for snack in &self.snacks {
            totals.add(snack);
        }
        totals
    }
}

/// Weekly meal plan keyed by calendar-date string
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct MealPlan {
    days: BTreeMap<String, DayPlan>,
}

impl MealPlan {
    /// Create an empty plan
    #[must_use]
    pub const fn new() -> Self {
        Self {
            days: BTreeMap::new(),
        }
    }

    /// True when no day is planned
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Number of planned days
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Plan for a day key
    #[must_use]
    pub fn day(&self, key: &str) -> Option<&DayPlan> {
        self.days.get(key)
    }

    /// Mutable plan for a day key, created empty if absent
    pub fn day_mut(&mut self, key: impl Into<String>) -> &mut DayPlan {
        self.days.entry(key.into()).or_default()
    }

    /// Insert or replace a whole day
    pub fn insert_day(&mut self, key: impl Into<String>, day: DayPlan) -> Option<DayPlan> {
        self.days.insert(key.into(), day)
    }

    /// Remove a whole day
    pub fn remove_day(&mut self, key: &str) -> Option<DayPlan> {
        self.days.remove(key)
    }

    /// Place a meal, creating the day if needed
    pub fn set_meal(
        &mut self,
        key: impl Into<String>,
        slot: MealSlot,
        meal: PlannedMeal,
    ) -> Option<PlannedMeal> {
        self.day_mut(key).set(slot, meal)
    }

    /// Remove every day
    pub fn clear(&mut self) {
        self.days.clear();
    }

    /// Days in chronological order
    ///
    /// Keys that parse as dates come first, oldest to newest. Keys that do not
    /// parse follow in lexicographic order.
    #[must_use]
    pub fn days_chronological(&self) -> Vec<(&str, &DayPlan)> {
        let mut days: Vec<(Option<NaiveDate>, &str, &DayPlan)> = self
            .days
            .iter()
            .map(|(key, day)| (parse_day_key(key), key.as_str(), day))
            .collect();
        days.sort_by(|a, b| match (a.0, b.0) {
            (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.1.cmp(b.1)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => a.1.cmp(b.1),
        });
        days.into_iter().map(|(_, key, day)| (key, day)).collect()
    }

    /// Iterate days in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &DayPlan)> {
        self.days.iter().map(|(key, day)| (key.as_str(), day))
    }
}

impl<'de> Deserialize<'de> for MealPlan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<Value>::deserialize(deserializer)?;
        let days = match value {
            Some(Value::Object(entries)) => entries
                .into_iter()
                .filter_map(|(key, day)| {
                    lenient::record_from_value::<DayPlan>(day).map(|day| (key, day))
                })
                .collect(),
            _ => BTreeMap::new(),
        };
        Ok(Self { days })
    }
}

/// Parse a day key in ISO (`2024-12-16`) or long (`Mon Dec 16 2024`) form
#[must_use]
pub fn parse_day_key(key: &str) -> Option<NaiveDate> {
    let key = key.trim();
    DAY_KEY_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(key, fmt).ok())
}
