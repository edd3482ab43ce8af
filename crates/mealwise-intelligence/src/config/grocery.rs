// ABOUTME: Grocery classification configuration: keyword lists per aisle category
// ABOUTME: Lists are matched as case-insensitive substrings in Produce, Protein, Dairy, Pantry order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Grocery Classification Configuration
//!
//! Produce is checked first, so "eggplant" lands in Produce before the Protein
//! keyword "egg" can match it. Ground spices that share a produce word (black
//! pepper, chili powder) are listed as spice exceptions, which are checked
//! ahead of every category and map to Pantry.

use serde::{Deserialize, Serialize};

const PRODUCE: &[&str] = &[
    "tomato",
    "onion",
    "garlic",
    "ginger",
    "potato",
    "spinach",
    "carrot",
    "pepper",
    "capsicum",
    "chili",
    "chilli",
    "lettuce",
    "cucumber",
    "lemon",
    "lime",
    "apple",
    "banana",
    "mango",
    "berry",
    "berries",
    "broccoli",
    "cauliflower",
    "cabbage",
    "green peas",
    "coriander",
    "cilantro",
    "mint",
    "basil",
    "mushroom",
    "eggplant",
    "brinjal",
    "okra",
    "zucchini",
    "avocado",
    "celery",
    "kale",
    "orange",
    "grape",
    "pumpkin",
    "beetroot",
    "sweet corn",
    "fruit",
    "vegetable",
    "herb",
];

const PROTEIN: &[&str] = &[
    "chicken", "beef", "pork", "lamb", "mutton", "turkey", "bacon", "sausage", "meat", "fish",
    "salmon", "tuna", "prawn", "shrimp", "egg", "tofu", "tempeh", "lentil", "dal", "chickpea",
    "chana", "bean",
];

const DAIRY: &[&str] = &[
    "milk", "cheese", "butter", "yogurt", "yoghurt", "curd", "cream", "paneer", "ghee",
    "parmesan", "feta", "mozzarella", "cheddar",
];

const PANTRY: &[&str] = &[
    "rice", "flour", "oil", "salt", "sugar", "pasta", "noodle", "bread", "oats", "quinoa",
    "semolina", "spice", "masala", "cumin", "turmeric", "vinegar", "sauce", "dressing", "honey",
    "stock", "broth", "yeast", "baking",
];

const SPICE_EXCEPTIONS: &[&str] = &[
    "black pepper",
    "white pepper",
    "peppercorn",
    "pepper powder",
    "chili powder",
    "chilli powder",
    "chili flakes",
    "chilli flakes",
    "garlic powder",
    "ginger powder",
    "onion powder",
];

/// Keyword lists used by the keyword classifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroceryConfig {
    /// Fruit and vegetable keywords
    pub produce_keywords: Vec<String>,
    /// Meat, fish, egg, and legume keywords
    pub protein_keywords: Vec<String>,
    /// Milk product keywords
    pub dairy_keywords: Vec<String>,
    /// Shelf-stable staple keywords
    pub pantry_keywords: Vec<String>,
    /// Pantry keywords checked before every category
    #[serde(default)]
    pub spice_exceptions: Vec<String>,
}

impl GroceryConfig {
    /// Every keyword across all categories
    pub fn all_keywords(&self) -> impl Iterator<Item = &str> {
        self.produce_keywords
            .iter()
            .chain(&self.protein_keywords)
            .chain(&self.dairy_keywords)
            .chain(&self.pantry_keywords)
            .chain(&self.spice_exceptions)
            .map(String::as_str)
    }
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_owned()).collect()
}

impl Default for GroceryConfig {
    fn default() -> Self {
        Self {
            produce_keywords: owned(PRODUCE),
            protein_keywords: owned(PROTEIN),
            dairy_keywords: owned(DAIRY),
            pantry_keywords: owned(PANTRY),
            spice_exceptions: owned(SPICE_EXCEPTIONS),
        }
    }
}
