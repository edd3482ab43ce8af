// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Argument value parsers for mealwise-cli
// ABOUTME: Validates serving sizes, diet labels, and grocery categories at the CLI boundary

use mealwise_core::models::{CategoryTag, Diet};
use mealwise_intelligence::ServingSize;

/// Parse and validate a serving multiplier
pub fn parse_servings(raw: &str) -> Result<ServingSize, String> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{raw}' is not a number"))?;
    ServingSize::new(value).map_err(|e| e.to_string())
}

/// Parse a diet label; unknown labels are rejected rather than mapped to other
pub fn parse_diet(raw: &str) -> Result<Diet, String> {
    match Diet::from_str_lossy(raw) {
        Diet::Other if !raw.trim().eq_ignore_ascii_case("other") => Err(format!(
            "unknown diet '{raw}', expected vegetarian, non-vegetarian, vegan, pescatarian or other"
        )),
        diet => Ok(diet),
    }
}

/// Parse a grocery category name, case-insensitively
pub fn parse_category(raw: &str) -> Result<CategoryTag, String> {
    CategoryTag::ALL
        .into_iter()
        .find(|tag| tag.as_str().eq_ignore_ascii_case(raw.trim()))
        .ok_or_else(|| {
            format!("unknown category '{raw}', expected produce, protein, dairy, pantry or other")
        })
}
