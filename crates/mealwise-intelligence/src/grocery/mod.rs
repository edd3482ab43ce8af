// ABOUTME: Grocery list module: builder plus the ingredient classification strategy
// ABOUTME: Re-exports GroceryListBuilder, IngredientClassifier, and KeywordClassifier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod builder;
mod categorization;

pub use builder::{items_by_category, GroceryListBuilder};
pub use categorization::{IngredientClassifier, KeywordClassifier, KeywordRule};
