// ABOUTME: Integration tests for environment-driven configuration
// ABOUTME: Validates scaling, grocery keyword, and logging overrides read from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use mealwise::logging::{LogFormat, LoggingConfig};
use mealwise_core::models::{CategoryTag, Ingredient, NutritionFacts};
use mealwise_intelligence::grocery::IngredientClassifier;
use mealwise_intelligence::{
    ConfigError, KeywordClassifier, MealwiseConfig, NutritionScaler, ServingSize,
};
use serial_test::serial;
use std::env;

const SCALING_VARS: [&str; 10] = [
    "MEALWISE_TIME_FACTOR",
    "MEALWISE_QUANTITY_UNIT",
    "MEALWISE_PERCENT_CAP",
    "MEALWISE_DAILY_CALORIES",
    "MEALWISE_DAILY_PROTEIN",
    "MEALWISE_DAILY_CARBS",
    "MEALWISE_DAILY_FAT",
    "MEALWISE_DAILY_VITAMIN_C",
    "MEALWISE_DAILY_IRON",
    "MEALWISE_DAILY_CALCIUM",
];

fn clear_mealwise_env() {
    for var in SCALING_VARS {
        env::remove_var(var);
    }
    for var in [
        "MEALWISE_EXTRA_PRODUCE",
        "MEALWISE_EXTRA_PROTEIN",
        "MEALWISE_EXTRA_DAIRY",
        "MEALWISE_EXTRA_PANTRY",
    ] {
        env::remove_var(var);
    }
}

fn clear_logging_env() {
    for var in [
        "RUST_LOG",
        "LOG_FORMAT",
        "LOG_INCLUDE_LOCATION",
        "LOG_INCLUDE_SPANS",
        "SERVICE_NAME",
    ] {
        env::remove_var(var);
    }
}

// ============================================================================
// Scaling and grocery configuration
// ============================================================================

#[test]
#[serial]
fn test_load_without_env_matches_defaults() {
    clear_mealwise_env();
    let config = MealwiseConfig::load().unwrap();
    assert_eq!(config, MealwiseConfig::default());
}

#[test]
#[serial]
fn test_scaling_overrides_flow_into_scaler() {
    clear_mealwise_env();
    env::set_var("MEALWISE_TIME_FACTOR", "0.5");
    env::set_var("MEALWISE_QUANTITY_UNIT", "units");
    env::set_var("MEALWISE_DAILY_CALORIES", "2500");
    let config = MealwiseConfig::load();
    clear_mealwise_env();

    let scaler = NutritionScaler::new(config.unwrap().scaling);
    let servings = ServingSize::new(4.0).unwrap();
    assert_eq!(scaler.estimate_time(20, servings), 40);
    assert_eq!(
        scaler
            .scale_ingredient(&Ingredient::new("Rice", "100 g"), servings)
            .display,
        "400 units"
    );

    let facts = NutritionFacts::macros(500.0, 0.0, 0.0, 0.0);
    let scaled = scaler.scale_nutrition(&facts, ServingSize::ONE);
    assert_eq!(scaler.daily_values(&scaled)[0].percent, 20);
}

#[test]
#[serial]
fn test_invalid_override_values_are_rejected() {
    clear_mealwise_env();
    env::set_var("MEALWISE_DAILY_IRON", "plenty");
    let unparseable = MealwiseConfig::load();
    clear_mealwise_env();
    assert!(matches!(unparseable, Err(ConfigError::Parse(_))));

    env::set_var("MEALWISE_TIME_FACTOR", "-1");
    let negative = MealwiseConfig::load();
    clear_mealwise_env();
    assert!(matches!(negative, Err(ConfigError::ValueOutOfRange(_))));

    env::set_var("MEALWISE_PERCENT_CAP", "0");
    let zero_cap = MealwiseConfig::load();
    clear_mealwise_env();
    assert!(zero_cap.is_err());
}

#[test]
#[serial]
fn test_extra_keywords_extend_classification() {
    clear_mealwise_env();
    env::set_var("MEALWISE_EXTRA_PRODUCE", "Saffron,  Jackfruit ");
    env::set_var("MEALWISE_EXTRA_DAIRY", "kefir");
    let config = MealwiseConfig::load();
    clear_mealwise_env();

    let classifier = KeywordClassifier::from_config(&config.unwrap().grocery);
    assert_eq!(classifier.classify("Kashmiri Saffron"), CategoryTag::Produce);
    assert_eq!(classifier.classify("Raw Jackfruit"), CategoryTag::Produce);
    assert_eq!(classifier.classify("Kefir"), CategoryTag::Dairy);
    assert_eq!(classifier.classify("Egg"), CategoryTag::Protein);
}

#[test]
fn test_config_error_converts_to_app_error() {
    let err: mealwise::AppError = ConfigError::MissingField("scaling.quantity_unit").into();
    assert_eq!(err.code, mealwise::ErrorCode::ConfigInvalid);
}

// ============================================================================
// Logging configuration
// ============================================================================

#[test]
#[serial]
fn test_logging_defaults() {
    clear_logging_env();
    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert!(!config.include_location);
    assert_eq!(config.service_name, "mealwise");
}

#[test]
#[serial]
fn test_logging_env_overrides() {
    clear_logging_env();
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "JSON");
    env::set_var("LOG_INCLUDE_LOCATION", "1");
    env::set_var("SERVICE_NAME", "mealwise-test");
    let config = LoggingConfig::from_env();
    clear_logging_env();

    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(!config.include_spans);
    assert_eq!(config.service_name, "mealwise-test");
}

#[test]
#[serial]
fn test_unknown_log_format_falls_back_to_compact() {
    clear_logging_env();
    env::set_var("LOG_FORMAT", "xml");
    let config = LoggingConfig::from_env();
    clear_logging_env();
    assert_eq!(config.format, LogFormat::Compact);
}

#[test]
fn test_log_format_parsing() {
    assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);
    assert_eq!(" Compact ".parse::<LogFormat>().unwrap(), LogFormat::Compact);
    assert!("yaml".parse::<LogFormat>().is_err());
}

#[test]
fn test_verbose_level_override() {
    let config = LoggingConfig::default().with_level("debug");
    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Compact);
}
