// ABOUTME: Integration tests for the key-value storage backends
// ABOUTME: Covers in-memory sharing, JSON file persistence across reopen, and corrupt-file handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use mealwise::services::{GroceryListService, MealPlanService};
use mealwise::storage::{InMemoryStore, JsonFileStore, KeyValueStore, StoreExt};
use mealwise::ErrorCode;
use mealwise_core::constants::{GROCERY_LIST_KEY, MEAL_PLAN_KEY};
use mealwise_core::models::{GroceryItem, MealPlan, MealSlot, PlannedMeal};
use serde_json::json;
use std::fs;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

// ============================================================================
// In-memory store
// ============================================================================

#[test]
fn test_memory_store_last_writer_wins() {
    let store = InMemoryStore::new();
    store.set("k", json!(1));
    store.set("k", json!({"a": 2}));
    assert_eq!(store.get("k"), Some(json!({"a": 2})));
    assert_eq!(store.remove("k"), Some(json!({"a": 2})));
    assert!(store.get("k").is_none());
}

#[test]
fn test_memory_store_clones_share_entries() {
    let store = InMemoryStore::new();
    let clone = store.clone();
    clone.set("shared", json!("yes"));
    assert_eq!(store.get("shared"), Some(json!("yes")));
    assert_eq!(store.len(), 1);
}

#[test]
fn test_memory_store_concurrent_writers() {
    let store = Arc::new(InMemoryStore::new());
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let store = Arc::clone(&store);
            thread::spawn(move || store.set(&format!("key-{i}"), json!(i)))
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(store.len(), 8);
}

#[test]
fn test_load_wrong_shape_reads_as_absent() {
    let store = InMemoryStore::new();
    store.set(GROCERY_LIST_KEY, json!("not a list"));
    let items: Option<Vec<GroceryItem>> = store.load(GROCERY_LIST_KEY);
    assert!(items.is_none());
    assert!(GroceryListService::new(&store).current_list().is_empty());
}

// ============================================================================
// JSON file store
// ============================================================================

#[test]
fn test_file_store_missing_file_starts_empty() {
    let dir = TempDir::new().unwrap();
    let store = JsonFileStore::open(dir.path().join("nested/store.json")).unwrap();
    assert!(store.get(MEAL_PLAN_KEY).is_none());
}

#[test]
fn test_file_store_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("data/store.json");

    {
        let store = JsonFileStore::open(&path).unwrap();
        MealPlanService::new(&store)
            .add_meal(
                "2024-12-16",
                MealSlot::Dinner,
                PlannedMeal::new("Curry").with_ingredients(["Onion", "Chickpeas"]),
            )
            .unwrap();
        GroceryListService::new(&store)
            .regenerate_from_stored_plan()
            .unwrap();
    }

    let reopened = JsonFileStore::open(&path).unwrap();
    let plan: MealPlan = reopened.load(MEAL_PLAN_KEY).unwrap();
    assert_eq!(plan.len(), 1);

    let list = GroceryListService::new(&reopened).current_list();
    let names: Vec<&str> = list.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Onion", "Chickpeas"]);
}

#[test]
fn test_file_store_remove_persists() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");

    let store = JsonFileStore::open(&path).unwrap();
    store.save("temp", &vec![1, 2, 3]).unwrap();
    assert!(store.remove("temp").is_some());

    let reopened = JsonFileStore::open(&path).unwrap();
    assert!(reopened.get("temp").is_none());
}

#[test]
fn test_file_store_empty_file_opens_empty() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, "  \n").unwrap();
    assert!(JsonFileStore::open(&path).unwrap().get("anything").is_none());
}

#[test]
fn test_file_store_rejects_corrupt_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, "{ not json").unwrap();

    let err = JsonFileStore::open(&path).unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
}

#[test]
fn test_file_store_rejects_non_object_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    assert!(JsonFileStore::open(&path).is_err());
}

#[test]
fn test_file_store_snapshot_is_keyed_object() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    let store = JsonFileStore::open(&path).unwrap();
    store.set(GROCERY_LIST_KEY, json!([]));
    store.flush().unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw, json!({ GROCERY_LIST_KEY: [] }));
}

#[test]
fn test_file_store_concurrent_writers_all_reach_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store.json");
    let store = Arc::new(JsonFileStore::open(&path).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|writer| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for round in 0..20 {
                    store.set(&format!("w{writer}-r{round}"), json!(round));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let reopened = JsonFileStore::open(&path).unwrap();
    for writer in 0..8 {
        for round in 0..20 {
            assert_eq!(
                reopened.get(&format!("w{writer}-r{round}")),
                Some(json!(round)),
                "w{writer}-r{round} missing after reopen"
            );
        }
    }
    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|entry| entry.path() != path)
        .collect();
    assert!(leftovers.is_empty(), "temp files left behind: {leftovers:?}");
}
