// ABOUTME: Recipe catalog models: Recipe, Ingredient, NutritionFacts, and Diet
// ABOUTME: Nutrition values are defined per one serving and default to zero when missing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::lenient;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Dietary category of a recipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Diet {
    /// No meat or fish
    Vegetarian,
    /// Contains meat or fish
    NonVegetarian,
    /// No animal products
    Vegan,
    /// Fish but no other meat
    Pescatarian,
    /// Unrecognized or unspecified category
    #[default]
    Other,
}

impl Diet {
    /// Parse a diet label, tolerating case, spaces, and underscores
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == ' ' || c == '_' { '-' } else { c })
            .collect();
        match normalized.as_str() {
            "vegetarian" | "veg" => Self::Vegetarian,
            "non-vegetarian" | "nonvegetarian" | "non-veg" => Self::NonVegetarian,
            "vegan" => Self::Vegan,
            "pescatarian" | "pescetarian" => Self::Pescatarian,
            _ => Self::Other,
        }
    }

    /// Label used in serialized data
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Vegetarian => "vegetarian",
            Self::NonVegetarian => "non-vegetarian",
            Self::Vegan => "vegan",
            Self::Pescatarian => "pescatarian",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Diet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = Option::<String>::deserialize(deserializer)?;
        Ok(label.map_or(Self::Other, |s| Self::from_str_lossy(&s)))
    }
}

/// Single ingredient line of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Ingredient name as shown to the user
    #[serde(default)]
    pub name: String,
    /// Free-text quantity such as "200 g" or "2 cloves"
    #[serde(default)]
    pub measurement: String,
}

impl Ingredient {
    /// Create an ingredient line
    #[must_use]
    pub fn new(name: impl Into<String>, measurement: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            measurement: measurement.into(),
        }
    }
}

/// Micronutrients tracked per serving
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct VitaminsMinerals {
    /// Vitamin C in milligrams
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub vitamin_c_mg: f64,
    /// Iron in milligrams
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub iron_mg: f64,
    /// Calcium in milligrams
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub calcium_mg: f64,
}

/// Nutrition facts for one serving
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionFacts {
    /// Energy in kcal
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub calories: f64,
    /// Protein in grams
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub protein: f64,
    /// Carbohydrates in grams
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub carbs: f64,
    /// Fat in grams
    #[serde(default, deserialize_with = "lenient::number_or_zero")]
    pub fat: f64,
    /// Vitamin and mineral content
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub vitamins_minerals: VitaminsMinerals,
}

impl NutritionFacts {
    /// Create facts for the four macro values with no micronutrient data
    #[must_use]
    pub const fn macros(calories: f64, protein: f64, carbs: f64, fat: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fat,
            vitamins_minerals: VitaminsMinerals {
                vitamin_c_mg: 0.0,
                iron_mg: 0.0,
                calcium_mg: 0.0,
            },
        }
    }

    /// Attach micronutrient values
    #[must_use]
    pub const fn with_vitamins_minerals(
        mut self,
        vitamin_c_mg: f64,
        iron_mg: f64,
        calcium_mg: f64,
    ) -> Self {
        self.vitamins_minerals = VitaminsMinerals {
            vitamin_c_mg,
            iron_mg,
            calcium_mg,
        };
        self
    }
}

/// A catalog recipe; `name` is its identity within the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique recipe name
    pub name: String,
    /// Dietary category
    #[serde(default)]
    pub diet: Diet,
    /// Cuisine label (free text)
    #[serde(default)]
    pub cuisine: String,
    /// Base preparation time for one serving, in minutes
    #[serde(default, deserialize_with = "lenient::count_or_zero")]
    pub time: u32,
    /// Ordered ingredient lines
    #[serde(default, deserialize_with = "lenient::record_list")]
    pub ingredients: Vec<Ingredient>,
    /// Nutrition facts per serving
    #[serde(default, deserialize_with = "lenient::null_as_default")]
    pub nutrition: NutritionFacts,
    /// Notes on how the recipe scales
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling_notes: Option<String>,
    /// Short description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Health benefit statements
    #[serde(
        default,
        deserialize_with = "lenient::string_list",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub health_benefits: Vec<String>,
}

impl Recipe {
    /// Create a recipe with only a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            diet: Diet::Other,
            cuisine: String::new(),
            time: 0,
            ingredients: Vec::new(),
            nutrition: NutritionFacts::default(),
            scaling_notes: None,
            summary: None,
            health_benefits: Vec::new(),
        }
    }

    /// Set the dietary category
    #[must_use]
    pub const fn with_diet(mut self, diet: Diet) -> Self {
        self.diet = diet;
        self
    }

    /// Set the cuisine label
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = cuisine.into();
        self
    }

    /// Set the base prep time in minutes
    #[must_use]
    pub const fn with_time(mut self, mins: u32) -> Self {
        self.time = mins;
        self
    }

    /// Add an ingredient line
    #[must_use]
    pub fn with_ingredient(
        mut self,
        name: impl Into<String>,
        measurement: impl Into<String>,
    ) -> Self {
        self.ingredients.push(Ingredient::new(name, measurement));
        self
    }

    /// Set per-serving nutrition
    #[must_use]
    pub const fn with_nutrition(mut self, nutrition: NutritionFacts) -> Self {
        self.nutrition = nutrition;
        self
    }

    /// Set the summary
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Ingredient names in recipe order
    pub fn ingredient_names(&self) -> impl Iterator<Item = &str> {
        self.ingredients.iter().map(|i| i.name.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_diet_lossy_parsing() {
        assert_eq!(Diet::from_str_lossy("Vegetarian"), Diet::Vegetarian);
        assert_eq!(Diet::from_str_lossy("non vegetarian"), Diet::NonVegetarian);
        assert_eq!(Diet::from_str_lossy("NON_VEGETARIAN"), Diet::NonVegetarian);
        assert_eq!(Diet::from_str_lossy("keto"), Diet::Other);
    }

    #[test]
    fn test_recipe_with_missing_nutrition_fields() {
        let json = r#"{
            "name": "Masala Oats",
            "diet": "Vegetarian",
            "cuisine": "Indian",
            "time": 15,
            "ingredients": [{"name": "Oats", "measurement": "50 g"}],
            "nutrition": {"calories": 210, "protein": null}
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.diet, Diet::Vegetarian);
        assert!((recipe.nutrition.calories - 210.0).abs() < f64::EPSILON);
        assert!(recipe.nutrition.protein.abs() < f64::EPSILON);
        assert!(recipe.nutrition.vitamins_minerals.iron_mg.abs() < f64::EPSILON);
        assert_eq!(recipe.ingredient_names().collect::<Vec<_>>(), vec!["Oats"]);
    }

    #[test]
    fn test_recipe_with_null_nutrition_and_bad_ingredients() {
        let json = r#"{"name": "Plain Rice", "nutrition": null, "ingredients": "rice"}"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.nutrition, NutritionFacts::default());
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.diet, Diet::Other);
    }
}
