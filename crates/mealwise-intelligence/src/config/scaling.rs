// ABOUTME: Nutrition scaling configuration: daily reference values, time factor, quantity unit
// ABOUTME: Defaults reproduce the fixed references used by the nutrition screen
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Nutrition Scaling Configuration

use mealwise_core::constants::daily_values::{
    DAILY_CALCIUM_MG, DAILY_CALORIES_KCAL, DAILY_CARBS_G, DAILY_FAT_G, DAILY_IRON_MG,
    DAILY_PROTEIN_G, DAILY_VITAMIN_C_MG, DISPLAY_PERCENT_CAP,
};
use mealwise_core::constants::scaling::{MULTI_SERVING_TIME_FACTOR, SCALED_QUANTITY_UNIT};
use serde::{Deserialize, Serialize};

/// Nutrition Scaling Configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScalingConfig {
    /// Multiplier applied to prep time when cooking more than one serving
    pub multi_serving_time_factor: f64,
    /// Unit label appended to scaled ingredient quantities
    pub quantity_unit: String,
    /// Upper bound for displayed daily-value percentages
    pub percent_display_cap: u32,
    /// Reference intakes used for percentages
    pub daily_values: DailyValueConfig,
}

/// Daily reference intakes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyValueConfig {
    /// Energy in kcal
    pub calories_kcal: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Carbohydrates in grams
    pub carbs_g: f64,
    /// Fat in grams
    pub fat_g: f64,
    /// Vitamin C in milligrams
    pub vitamin_c_mg: f64,
    /// Iron in milligrams
    pub iron_mg: f64,
    /// Calcium in milligrams
    pub calcium_mg: f64,
}

impl DailyValueConfig {
    /// All references, for validation
    #[must_use]
    pub const fn as_array(&self) -> [f64; 7] {
        [
            self.calories_kcal,
            self.protein_g,
            self.carbs_g,
            self.fat_g,
            self.vitamin_c_mg,
            self.iron_mg,
            self.calcium_mg,
        ]
    }
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            multi_serving_time_factor: MULTI_SERVING_TIME_FACTOR,
            quantity_unit: SCALED_QUANTITY_UNIT.to_owned(),
            percent_display_cap: DISPLAY_PERCENT_CAP,
            daily_values: DailyValueConfig::default(),
        }
    }
}

impl Default for DailyValueConfig {
    fn default() -> Self {
        Self {
            calories_kcal: DAILY_CALORIES_KCAL,
            protein_g: DAILY_PROTEIN_G,
            carbs_g: DAILY_CARBS_G,
            fat_g: DAILY_FAT_G,
            vitamin_c_mg: DAILY_VITAMIN_C_MG,
            iron_mg: DAILY_IRON_MG,
            calcium_mg: DAILY_CALCIUM_MG,
        }
    }
}
