// ABOUTME: Grocery list models: GroceryItem and the CategoryTag aisle grouping
// ABOUTME: Items are identified by exact name and start unchecked
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Coarse grocery-aisle grouping assigned by ingredient classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Default)]
pub enum CategoryTag {
    /// Fruit and vegetables
    Produce,
    /// Meat, fish, eggs, legumes
    Protein,
    /// Milk products
    Dairy,
    /// Shelf-stable staples
    Pantry,
    /// Anything unmatched
    #[default]
    Other,
}

impl CategoryTag {
    /// Every category in display order
    pub const ALL: [Self; 5] = [
        Self::Produce,
        Self::Protein,
        Self::Dairy,
        Self::Pantry,
        Self::Other,
    ];

    /// Display name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Produce => "Produce",
            Self::Protein => "Protein",
            Self::Dairy => "Dairy",
            Self::Pantry => "Pantry",
            Self::Other => "Other",
        }
    }
}

impl<'de> Deserialize<'de> for CategoryTag {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let label = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        Ok(Self::ALL
            .into_iter()
            .find(|tag| tag.as_str().eq_ignore_ascii_case(label.trim()))
            .unwrap_or(Self::Other))
    }
}

impl fmt::Display for CategoryTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the shopping checklist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryItem {
    /// Ingredient name; identity within a list
    pub name: String,
    /// Whether the user has ticked this item off
    #[serde(default)]
    pub checked: bool,
    /// Aisle grouping
    #[serde(default)]
    pub category: CategoryTag,
    /// How many times the plan mentions this ingredient
    #[serde(default = "one_occurrence")]
    pub occurrences: u32,
}

const fn one_occurrence() -> u32 {
    1
}

impl GroceryItem {
    /// New unchecked item seen once
    #[must_use]
    pub fn new(name: impl Into<String>, category: CategoryTag) -> Self {
        Self {
            name: name.into(),
            checked: false,
            category,
            occurrences: 1,
        }
    }
}
