// ABOUTME: Mealwise configuration container with validation and environment overrides
// ABOUTME: Global singleton falls back to defaults when the environment is invalid
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Mealwise Configuration
//!
//! Tunable parameters for the derivations. Defaults reproduce the fixed
//! behavior of the nutrition and grocery screens; every field can be
//! overridden from the environment:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `MEALWISE_TIME_FACTOR` | `scaling.multi_serving_time_factor` |
//! | `MEALWISE_QUANTITY_UNIT` | `scaling.quantity_unit` |
//! | `MEALWISE_PERCENT_CAP` | `scaling.percent_display_cap` |
//! | `MEALWISE_DAILY_CALORIES` .. `MEALWISE_DAILY_CALCIUM` | `scaling.daily_values.*` |
//! | `MEALWISE_EXTRA_PRODUCE` .. `MEALWISE_EXTRA_PANTRY` | comma-separated keywords appended to a category |

mod error;
mod grocery;
mod scaling;

pub use error::ConfigError;
pub use grocery::GroceryConfig;
pub use scaling::{DailyValueConfig, ScalingConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static MEALWISE_CONFIG: OnceLock<MealwiseConfig> = OnceLock::new();

/// Main configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealwiseConfig {
    /// Nutrition scaling parameters
    pub scaling: ScalingConfig,
    /// Grocery classification keyword lists
    pub grocery: GroceryConfig,
}

impl MealwiseConfig {
    /// Get the global configuration instance
    #[must_use]
    pub fn global() -> &'static Self {
        MEALWISE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load mealwise config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from environment
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error naming the first invalid field
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scaling = &self.scaling;

        if !scaling.multi_serving_time_factor.is_finite()
            || scaling.multi_serving_time_factor <= 0.0
        {
            return Err(ConfigError::ValueOutOfRange(
                "multi_serving_time_factor must be a positive number",
            ));
        }

        if scaling.quantity_unit.trim().is_empty() {
            return Err(ConfigError::MissingField("scaling.quantity_unit"));
        }

        if scaling.percent_display_cap == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "percent_display_cap must be at least 1",
            ));
        }

        if scaling
            .daily_values
            .as_array()
            .iter()
            .any(|v| !v.is_finite() || *v <= 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "daily reference values must be positive",
            ));
        }

        if self.grocery.all_keywords().any(|k| k.trim().is_empty()) {
            return Err(ConfigError::InvalidRange(
                "grocery keywords must not be empty strings",
            ));
        }

        Ok(())
    }

    /// Apply environment variable override for a single value
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Append comma-separated keywords from the environment to a list
    fn apply_env_keywords(env_var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = env::var(env_var_name) {
            target.extend(
                val.split(',')
                    .map(str::trim)
                    .filter(|k| !k.is_empty())
                    .map(str::to_lowercase),
            );
        }
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        let scaling = &mut self.scaling;
        Self::apply_env_var(
            "MEALWISE_TIME_FACTOR",
            &mut scaling.multi_serving_time_factor,
        )?;
        Self::apply_env_var("MEALWISE_QUANTITY_UNIT", &mut scaling.quantity_unit)?;
        Self::apply_env_var("MEALWISE_PERCENT_CAP", &mut scaling.percent_display_cap)?;

        let daily = &mut scaling.daily_values;
        Self::apply_env_var("MEALWISE_DAILY_CALORIES", &mut daily.calories_kcal)?;
        Self::apply_env_var("MEALWISE_DAILY_PROTEIN", &mut daily.protein_g)?;
        Self::apply_env_var("MEALWISE_DAILY_CARBS", &mut daily.carbs_g)?;
        Self::apply_env_var("MEALWISE_DAILY_FAT", &mut daily.fat_g)?;
        Self::apply_env_var("MEALWISE_DAILY_VITAMIN_C", &mut daily.vitamin_c_mg)?;
        Self::apply_env_var("MEALWISE_DAILY_IRON", &mut daily.iron_mg)?;
        Self::apply_env_var("MEALWISE_DAILY_CALCIUM", &mut daily.calcium_mg)?;

        let grocery = &mut self.grocery;
        Self::apply_env_keywords("MEALWISE_EXTRA_PRODUCE", &mut grocery.produce_keywords);
        Self::apply_env_keywords("MEALWISE_EXTRA_PROTEIN", &mut grocery.protein_keywords);
        Self::apply_env_keywords("MEALWISE_EXTRA_DAIRY", &mut grocery.dairy_keywords);
        Self::apply_env_keywords("MEALWISE_EXTRA_PANTRY", &mut grocery.pantry_keywords);

        Ok(self)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_default_config_is_valid() {
        let config = MealwiseConfig::default();
        assert!(config.validate().is_ok());
        assert!((config.scaling.multi_serving_time_factor - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.scaling.quantity_unit, "g");
    }

    #[test]
    fn test_non_positive_reference_rejected() {
        let mut config = MealwiseConfig::default();
        config.scaling.daily_values.fat_g = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValueOutOfRange(_))
        ));
    }

    #[test]
    fn test_blank_unit_rejected() {
        let mut config = MealwiseConfig::default();
        config.scaling.quantity_unit = "  ".to_owned();
        assert!(matches!(config.validate(), Err(ConfigError::MissingField(_))));
    }

    #[test]
    #[serial]
    fn test_env_overrides_applied() {
        env::set_var("MEALWISE_TIME_FACTOR", "0.5");
        env::set_var("MEALWISE_EXTRA_PANTRY", " Saffron , ,Hing");
        let config = MealwiseConfig::load();
        env::remove_var("MEALWISE_TIME_FACTOR");
        env::remove_var("MEALWISE_EXTRA_PANTRY");

        let config = config.unwrap();
        assert!((config.scaling.multi_serving_time_factor - 0.5).abs() < f64::EPSILON);
        let pantry = &config.grocery.pantry_keywords;
        assert!(pantry.contains(&"saffron".to_owned()));
        assert!(pantry.contains(&"hing".to_owned()));
    }

    #[test]
    #[serial]
    fn test_unparseable_env_value_is_error() {
        env::set_var("MEALWISE_PERCENT_CAP", "lots");
        let result = MealwiseConfig::load();
        env::remove_var("MEALWISE_PERCENT_CAP");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
