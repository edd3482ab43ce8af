// ABOUTME: Integration tests for recipe catalog loading and filtering
// ABOUTME: Covers document shapes, lenient entries, text search, and filter facets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use mealwise::services::{RecipeCatalog, RecipeQuery};
use mealwise::ErrorCode;
use mealwise_core::models::{Diet, Recipe};
use std::path::PathBuf;

fn catalog() -> RecipeCatalog {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/recipes.json");
    RecipeCatalog::from_file(path).unwrap()
}

fn names(recipes: &[&Recipe]) -> Vec<String> {
    recipes.iter().map(|r| r.name.clone()).collect()
}

// ============================================================================
// Loading
// ============================================================================

#[test]
fn test_bundled_catalog_loads() {
    let catalog = catalog();
    assert_eq!(catalog.len(), 8);
    assert!(catalog.find("Dal Tadka").is_some());
}

#[test]
fn test_bare_array_document() {
    let catalog = RecipeCatalog::from_json_str(r#"[{"name": "Toast", "time": 5}]"#).unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.recipes()[0].diet, Diet::Other);
}

#[test]
fn test_lenient_entries() {
    let json = r#"{
        "recipes": [
            {"name": "Soup", "time": "ten", "nutrition": null, "diet": "VEGAN"},
            {"time": 5},
            "garbage",
            {"name": "Soup", "time": 99},
            {"name": "Stew", "ingredients": [{"name": "Beef"}, 3], "health_benefits": "none"}
        ]
    }"#;
    let catalog = RecipeCatalog::from_json_str(json).unwrap();

    assert_eq!(catalog.len(), 2);
    let soup = catalog.get("Soup").unwrap();
    assert_eq!(soup.time, 0);
    assert_eq!(soup.diet, Diet::Vegan);
    assert!(soup.nutrition.calories.abs() < f64::EPSILON);

    let stew = catalog.get("Stew").unwrap();
    assert_eq!(stew.ingredients.len(), 1);
    assert!(stew.ingredients[0].measurement.is_empty());
    assert!(stew.health_benefits.is_empty());
}

#[test]
fn test_rejects_documents_without_recipes() {
    let err = RecipeCatalog::from_json_str(r#"{"meals": []}"#).unwrap_err();
    assert_eq!(err.code, ErrorCode::MissingRequiredField);
    assert!(RecipeCatalog::from_json_str("42").is_err());
    assert_eq!(
        RecipeCatalog::from_json_str("{oops").unwrap_err().code,
        ErrorCode::SerializationError
    );
}

#[test]
fn test_missing_file_is_storage_error() {
    let err = RecipeCatalog::from_file("/definitely/not/here.json").unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
}

#[test]
fn test_get_unknown_recipe() {
    let err = catalog().get("Beef Wellington").unwrap_err();
    assert_eq!(err.code, ErrorCode::ResourceNotFound);
}

// ============================================================================
// Search
// ============================================================================

#[test]
fn test_text_matches_names_and_ingredients_case_insensitively() {
    let catalog = catalog();
    let by_name = catalog.search(&RecipeQuery::new().with_text("OMELETTE"));
    assert_eq!(names(&by_name), vec!["Masala Omelette"]);

    let by_ingredient = catalog.search(&RecipeQuery::new().with_text("soy sauce"));
    assert_eq!(
        names(&by_ingredient),
        vec!["Grilled Salmon Bowl", "Chicken Stir Fry"]
    );
}

#[test]
fn test_blank_text_matches_everything() {
    let catalog = catalog();
    assert_eq!(catalog.search(&RecipeQuery::new().with_text("   ")).len(), 8);
}

#[test]
fn test_diet_and_cuisine_filters_combine() {
    let catalog = catalog();
    let query = RecipeQuery::new()
        .with_diet(Diet::Vegetarian)
        .with_diet(Diet::Vegan)
        .with_cuisine("indian");
    assert_eq!(
        names(&catalog.search(&query)),
        vec!["Palak Paneer", "Chana Masala", "Dal Tadka"]
    );
}

#[test]
fn test_time_and_calorie_ranges_are_inclusive() {
    let catalog = catalog();
    let query = RecipeQuery {
        min_time: Some(25),
        max_time: Some(35),
        min_calories: Some(320),
        ..RecipeQuery::default()
    };
    assert_eq!(
        names(&catalog.search(&query)),
        vec!["Palak Paneer", "Grilled Salmon Bowl", "Chicken Stir Fry"]
    );
}

#[test]
fn test_filter_facets_are_sorted_and_distinct() {
    let catalog = catalog();
    assert_eq!(
        catalog.diets(),
        vec![
            Diet::NonVegetarian,
            Diet::Pescatarian,
            Diet::Vegan,
            Diet::Vegetarian
        ]
    );
    assert_eq!(
        catalog.cuisines(),
        vec!["American", "Chinese", "Greek", "Indian", "Japanese"]
    );
}
