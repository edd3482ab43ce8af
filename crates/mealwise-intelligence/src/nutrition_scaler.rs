// ABOUTME: Recipe nutrition scaler for serving-size adjustments and daily value percentages
// ABOUTME: Scales nutrition, leading-integer ingredient quantities, and estimated prep time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Nutrition Scaler
//!
//! Recipes store nutrition for one serving. Scaling multiplies every value by
//! the serving size and rounds half away from zero. Prep time does not grow
//! linearly: beyond one serving it is damped by the multi-serving time factor.
//!
//! Ingredient quantities are free text, so only the leading whole number of a
//! measurement is scaled. Measurements without one ("a pinch") pass through
//! untouched.

use crate::config::{MealwiseConfig, ScalingConfig};
use mealwise_core::constants::scaling::{FALLBACK_SERVINGS, SERVING_MENU};
use mealwise_core::errors::{AppError, AppResult};
use mealwise_core::models::{Ingredient, NutritionFacts, Recipe};
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// A validated serving multiplier: finite and strictly positive
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct ServingSize(f64);

impl ServingSize {
    /// A single serving
    pub const ONE: Self = Self(1.0);

    /// Validate a serving multiplier
    ///
    /// # Errors
    ///
    /// Returns a value-out-of-range error for zero, negative, NaN, or infinite input
    pub fn new(servings: f64) -> AppResult<Self> {
        if servings.is_finite() && servings > 0.0 {
            Ok(Self(servings))
        } else {
            Err(AppError::out_of_range(format!(
                "serving size must be a positive number, got {servings}"
            )))
        }
    }

    /// Accept any input, substituting one serving for invalid values
    #[must_use]
    pub fn clamped(servings: f64) -> Self {
        Self::new(servings).unwrap_or_else(|_| {
            warn!(servings, "Invalid serving size, falling back to one serving");
            Self(FALLBACK_SERVINGS)
        })
    }

    /// Serving sizes offered for selection
    #[must_use]
    pub fn menu() -> Vec<Self> {
        SERVING_MENU.iter().map(|&n| Self(f64::from(n))).collect()
    }

    /// The multiplier
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl Default for ServingSize {
    fn default() -> Self {
        Self::ONE
    }
}

impl fmt::Display for ServingSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<f64> for ServingSize {
    type Error = AppError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for ServingSize {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        Self::new(raw).map_err(D::Error::custom)
    }
}

/// Nutrients tracked against a daily reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Nutrient {
    /// Energy
    Calories,
    /// Protein
    Protein,
    /// Carbohydrates
    Carbs,
    /// Fat
    Fat,
    /// Vitamin C
    VitaminC,
    /// Iron
    Iron,
    /// Calcium
    Calcium,
}

impl Nutrient {
    /// All nutrients in display order
    pub const ALL: [Self; 7] = [
        Self::Calories,
        Self::Protein,
        Self::Carbs,
        Self::Fat,
        Self::VitaminC,
        Self::Iron,
        Self::Calcium,
    ];

    /// Unit of the scaled amount
    #[must_use]
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Calories => "kcal",
            Self::Protein | Self::Carbs | Self::Fat => "g",
            Self::VitaminC | Self::Iron | Self::Calcium => "mg",
        }
    }

    fn reference(self, config: &ScalingConfig) -> f64 {
        let dv = &config.daily_values;
        match self {
            Self::Calories => dv.calories_kcal,
            Self::Protein => dv.protein_g,
            Self::Carbs => dv.carbs_g,
            Self::Fat => dv.fat_g,
            Self::VitaminC => dv.vitamin_c_mg,
            Self::Iron => dv.iron_mg,
            Self::Calcium => dv.calcium_mg,
        }
    }
}

/// Nutrition for the chosen number of servings, rounded to whole units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScaledNutrition {
    /// Energy in kcal
    pub calories: u32,
    /// Protein in grams
    pub protein: u32,
    /// Carbohydrates in grams
    pub carbs: u32,
    /// Fat in grams
    pub fat: u32,
    /// Vitamin C in milligrams
    pub vitamin_c_mg: u32,
    /// Iron in milligrams
    pub iron_mg: u32,
    /// Calcium in milligrams
    pub calcium_mg: u32,
}

impl ScaledNutrition {
    /// Scaled amount of one nutrient
    #[must_use]
    pub const fn amount(&self, nutrient: Nutrient) -> u32 {
        match nutrient {
            Nutrient::Calories => self.calories,
            Nutrient::Protein => self.protein,
            Nutrient::Carbs => self.carbs,
            Nutrient::Fat => self.fat,
            Nutrient::VitaminC => self.vitamin_c_mg,
            Nutrient::Iron => self.iron_mg,
            Nutrient::Calcium => self.calcium_mg,
        }
    }

    /// Field-wise sum, saturating at `u32::MAX`
    #[must_use]
    pub const fn saturating_add(self, other: Self) -> Self {
        Self {
            calories: self.calories.saturating_add(other.calories),
            protein: self.protein.saturating_add(other.protein),
            carbs: self.carbs.saturating_add(other.carbs),
            fat: self.fat.saturating_add(other.fat),
            vitamin_c_mg: self.vitamin_c_mg.saturating_add(other.vitamin_c_mg),
            iron_mg: self.iron_mg.saturating_add(other.iron_mg),
            calcium_mg: self.calcium_mg.saturating_add(other.calcium_mg),
        }
    }

    /// Each field divided by `days` and rounded, zero when `days` is zero
    #[must_use]
    pub fn per_day(self, days: u32) -> Self {
        if days == 0 {
            return Self::default();
        }
        let avg = |total: u32| round_amount(f64::from(total) / f64::from(days));
        Self {
            calories: avg(self.calories),
            protein: avg(self.protein),
            carbs: avg(self.carbs),
            fat: avg(self.fat),
            vitamin_c_mg: avg(self.vitamin_c_mg),
            iron_mg: avg(self.iron_mg),
            calcium_mg: avg(self.calcium_mg),
        }
    }
}

/// A scaled amount compared with its daily reference
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyValue {
    /// Nutrient measured
    pub nutrient: Nutrient,
    /// Scaled amount
    pub amount: u32,
    /// Daily reference intake
    pub reference: f64,
    /// Rounded percentage of the reference, may exceed 100
    pub percent: u32,
    /// Percentage capped for progress displays
    pub display_percent: u32,
}

/// An ingredient line after scaling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaledIngredient {
    /// Ingredient name
    pub name: String,
    /// Measurement as written in the recipe
    pub original: String,
    /// Scaled leading quantity, absent when the measurement has none
    pub quantity: Option<u64>,
    /// Text to display
    pub display: String,
}

/// A recipe adjusted to a serving size
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScaledRecipe {
    /// Recipe name
    pub name: String,
    /// Serving multiplier applied
    pub servings: ServingSize,
    /// Scaled nutrition
    pub nutrition: ScaledNutrition,
    /// Per-nutrient daily value comparisons
    pub daily_values: Vec<DailyValue>,
    /// Scaled ingredient lines in recipe order
    pub ingredients: Vec<ScaledIngredient>,
    /// Estimated prep time in minutes
    pub estimated_time: u32,
    /// Scaling notes, unchanged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaling_notes: Option<String>,
    /// Summary, unchanged
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Health benefits, unchanged
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub health_benefits: Vec<String>,
}

/// Round half away from zero, flooring negatives at zero
fn round_amount(value: f64) -> u32 {
    if value.is_nan() {
        return 0;
    }
    value.round().max(0.0) as u32
}

/// Leading whole number of a measurement, after optional whitespace
fn leading_integer(measurement: &str) -> Option<u64> {
    let trimmed = measurement.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// Scales recipes by serving size
#[derive(Debug, Clone, Default)]
pub struct NutritionScaler {
    config: ScalingConfig,
}

impl NutritionScaler {
    /// Scaler with explicit configuration
    #[must_use]
    pub const fn new(config: ScalingConfig) -> Self {
        Self { config }
    }

    /// Scaler using the global configuration
    #[must_use]
    pub fn from_global() -> Self {
        Self::new(MealwiseConfig::global().scaling.clone())
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &ScalingConfig {
        &self.config
    }

    /// Multiply every nutrition value by the serving size
    #[must_use]
    pub fn scale_nutrition(
        &self,
        facts: &NutritionFacts,
        servings: ServingSize,
    ) -> ScaledNutrition {
        let s = servings.value();
        let vm = &facts.vitamins_minerals;
        ScaledNutrition {
            calories: round_amount(facts.calories * s),
            protein: round_amount(facts.protein * s),
            carbs: round_amount(facts.carbs * s),
            fat: round_amount(facts.fat * s),
            vitamin_c_mg: round_amount(vm.vitamin_c_mg * s),
            iron_mg: round_amount(vm.iron_mg * s),
            calcium_mg: round_amount(vm.calcium_mg * s),
        }
    }

    /// Percentage of the daily reference for one amount
    #[must_use]
    pub fn percent_of_daily(&self, nutrient: Nutrient, amount: u32) -> DailyValue {
        let reference = nutrient.reference(&self.config);
        let percent = round_amount(f64::from(amount) / reference * 100.0);
        DailyValue {
            nutrient,
            amount,
            reference,
            percent,
            display_percent: percent.min(self.config.percent_display_cap),
        }
    }

    /// Daily value comparisons for every tracked nutrient
    #[must_use]
    pub fn daily_values(&self, nutrition: &ScaledNutrition) -> Vec<DailyValue> {
        Nutrient::ALL
            .into_iter()
            .map(|n| self.percent_of_daily(n, nutrition.amount(n)))
            .collect()
    }

    /// Scale the leading quantity of an ingredient measurement
    #[must_use]
    pub fn scale_ingredient(
        &self,
        ingredient: &Ingredient,
        servings: ServingSize,
    ) -> ScaledIngredient {
        let quantity = leading_integer(&ingredient.measurement)
            .map(|base| (base as f64 * servings.value()).round().max(0.0) as u64);
        let display = quantity.map_or_else(
            || ingredient.measurement.clone(),
            |q| format!("{q} {}", self.config.quantity_unit),
        );
        ScaledIngredient {
            name: ingredient.name.clone(),
            original: ingredient.measurement.clone(),
            quantity,
            display,
        }
    }

    /// Estimated prep time for a serving size
    ///
    /// Up to one serving the time scales linearly. Above that the multiplied
    /// time is damped by the multi-serving factor.
    #[must_use]
    pub fn estimate_time(&self, base_minutes: u32, servings: ServingSize) -> u32 {
        let s = servings.value();
        let minutes = f64::from(base_minutes) * s;
        if s <= 1.0 {
            round_amount(minutes)
        } else {
            round_amount(minutes * self.config.multi_serving_time_factor)
        }
    }

    /// Scale a whole recipe
    #[must_use]
    pub fn scale(&self, recipe: &Recipe, servings: ServingSize) -> ScaledRecipe {
        let nutrition = self.scale_nutrition(&recipe.nutrition, servings);
        let ingredients: Vec<ScaledIngredient> = recipe
            .ingredients
            .iter()
            .map(|i| self.scale_ingredient(i, servings))
            .collect();
        let unscaled = ingredients.iter().filter(|i| i.quantity.is_none()).count();

        debug!(
            recipe = %recipe.name,
            servings = servings.value(),
            unscaled_ingredients = unscaled,
            "Scaled recipe"
        );

        ScaledRecipe {
            name: recipe.name.clone(),
            servings,
            daily_values: self.daily_values(&nutrition),
            nutrition,
            ingredients,
            estimated_time: self.estimate_time(recipe.time, servings),
            scaling_notes: recipe.scaling_notes.clone(),
            summary: recipe.summary.clone(),
            health_benefits: recipe.health_benefits.clone(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn servings(n: f64) -> ServingSize {
        ServingSize::new(n).unwrap()
    }

    #[test]
    fn test_nutrition_sums_and_daily_average() {
        let day = ScaledNutrition {
            calories: 1000,
            protein: 50,
            iron_mg: 3,
            ..ScaledNutrition::default()
        };
        let week = day.saturating_add(day).saturating_add(ScaledNutrition {
            calories: u32::MAX,
            ..ScaledNutrition::default()
        });
        assert_eq!(week.calories, u32::MAX);
        assert_eq!(week.protein, 100);

        let avg = day.saturating_add(day).per_day(7);
        assert_eq!(avg.calories, 286);
        assert_eq!(avg.protein, 14);
        assert_eq!(avg.iron_mg, 1);
        assert_eq!(day.per_day(0), ScaledNutrition::default());
    }

    #[test]
    fn test_scale_nutrition_doubles_every_value() {
        let facts = NutritionFacts::macros(400.0, 20.0, 50.0, 10.0)
            .with_vitamins_minerals(10.0, 2.0, 100.0);
        let scaled = NutritionScaler::default().scale_nutrition(&facts, servings(2.0));
        assert_eq!(
            scaled,
            ScaledNutrition {
                calories: 800,
                protein: 40,
                carbs: 100,
                fat: 20,
                vitamin_c_mg: 20,
                iron_mg: 4,
                calcium_mg: 200,
            }
        );
    }

    #[test]
    fn test_rounding_half_away_from_zero() {
        let facts = NutritionFacts::macros(2.5, 0.5, 1.49, -3.0);
        let scaled = NutritionScaler::default().scale_nutrition(&facts, ServingSize::ONE);
        assert_eq!(scaled.calories, 3);
        assert_eq!(scaled.protein, 1);
        assert_eq!(scaled.carbs, 1);
        assert_eq!(scaled.fat, 0);
    }

    #[test]
    fn test_daily_value_percent() {
        let scaler = NutritionScaler::default();
        let dv = scaler.percent_of_daily(Nutrient::Calories, 800);
        assert_eq!(dv.percent, 40);

        let over = scaler.percent_of_daily(Nutrient::Fat, 130);
        assert_eq!(over.percent, 200);
        assert_eq!(over.display_percent, 100);
    }

    #[test]
    fn test_estimate_time() {
        let scaler = NutritionScaler::default();
        assert_eq!(scaler.estimate_time(20, servings(4.0)), 56);
        assert_eq!(scaler.estimate_time(20, ServingSize::ONE), 20);
        assert_eq!(scaler.estimate_time(15, servings(0.5)), 8);
        assert_eq!(scaler.estimate_time(30, servings(2.0)), 42);
    }

    #[test]
    fn test_ingredient_quantities() {
        let scaler = NutritionScaler::default();
        let scaled = scaler.scale_ingredient(&Ingredient::new("Rice", "200 g"), servings(2.0));
        assert_eq!(scaled.quantity, Some(400));
        assert_eq!(scaled.display, "400 g");

        let garlic = Ingredient::new("Garlic", " 3 cloves");
        let cloves = scaler.scale_ingredient(&garlic, servings(1.5));
        assert_eq!(cloves.display, "5 g");

        let pinch = scaler.scale_ingredient(&Ingredient::new("Salt", "a pinch"), servings(4.0));
        assert_eq!(pinch.quantity, None);
        assert_eq!(pinch.display, "a pinch");
    }

    #[test]
    fn test_invalid_serving_sizes() {
        assert!(ServingSize::new(0.0).is_err());
        assert!(ServingSize::new(-2.0).is_err());
        assert!(ServingSize::new(f64::NAN).is_err());
        assert!(ServingSize::new(f64::INFINITY).is_err());
        assert_eq!(ServingSize::clamped(-1.0), ServingSize::ONE);
        assert!((ServingSize::clamped(3.0).value() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_serving_menu() {
        let menu: Vec<f64> = ServingSize::menu().into_iter().map(ServingSize::value).collect();
        assert_eq!(menu, vec![1.0, 2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_scale_recipe_passes_text_through() {
        let recipe = Recipe::new("Palak Paneer")
            .with_time(30)
            .with_ingredient("Spinach", "250 g")
            .with_ingredient("Paneer", "200 g")
            .with_nutrition(NutritionFacts::macros(350.0, 18.0, 12.0, 24.0))
            .with_summary("Creamy spinach curry");

        let scaled = NutritionScaler::default().scale(&recipe, servings(2.0));
        assert_eq!(scaled.nutrition.calories, 700);
        assert_eq!(scaled.estimated_time, 42);
        assert_eq!(scaled.daily_values.len(), 7);
        assert_eq!(scaled.ingredients[0].display, "500 g");
        assert_eq!(scaled.summary.as_deref(), Some("Creamy spinach curry"));
    }
}
