// ABOUTME: Key-value storage abstraction for persisted meal plans, grocery lists, and preferences
// ABOUTME: Pluggable backends (in-memory, JSON file) behind a whole-value get/set trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Key-Value Storage
//!
//! Services persist whole values under well-known keys
//! ([`MEAL_PLAN_KEY`](mealwise_core::constants::MEAL_PLAN_KEY) and friends).
//! Reads and writes are total: a backend that cannot write logs the failure
//! and carries on with its in-memory view, so derivations never fail because
//! persistence did.
//!
//! ```rust,no_run
//! use mealwise::storage::{InMemoryStore, StoreExt};
//! use mealwise_core::models::MealPlan;
//!
//! # fn example() -> Result<(), mealwise_core::errors::AppError> {
//! let store = InMemoryStore::new();
//! store.save("meal-plan-store", &MealPlan::new())?;
//! let plan: Option<MealPlan> = store.load("meal-plan-store");
//! assert!(plan.is_some());
//! # Ok(())
//! # }
//! ```

/// JSON file snapshot backend
pub mod file;
/// Concurrent in-memory backend
pub mod memory;

pub use file::JsonFileStore;
pub use memory::InMemoryStore;

use mealwise_core::errors::AppResult;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::warn;

/// Whole-value key-value store
///
/// Last writer wins; there is no partial update.
pub trait KeyValueStore: Send + Sync {
    /// Value stored under `key`, if any
    fn get(&self, key: &str) -> Option<Value>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: Value);

    /// Delete `key`, returning the previous value
    fn remove(&self, key: &str) -> Option<Value>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Option<Value> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: Value) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) -> Option<Value> {
        (**self).remove(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Option<Value> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: Value) {
        (**self).set(key, value);
    }

    fn remove(&self, key: &str) -> Option<Value> {
        (**self).remove(key)
    }
}

/// Typed access on top of any [`KeyValueStore`]
pub trait StoreExt: KeyValueStore {
    /// Load and deserialize a value; a value of the wrong shape reads as absent
    fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.get(key)?;
        match serde_json::from_value(value) {
            Ok(typed) => Some(typed),
            Err(e) => {
                warn!(key, "Ignoring stored value that failed to deserialize: {e}");
                None
            }
        }
    }

    /// Serialize and store a value
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the value cannot be encoded as JSON
    fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> AppResult<()> {
        self.set(key, serde_json::to_value(value)?);
        Ok(())
    }
}

impl<S: KeyValueStore + ?Sized> StoreExt for S {}
