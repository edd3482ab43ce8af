// ABOUTME: Daily reference values for one person, used to compute percent-of-goal figures
// ABOUTME: These are independent of serving count and never scaled
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Daily energy reference (kcal), based on a 2000 calorie diet
pub const DAILY_CALORIES_KCAL: f64 = 2000.0;

/// Daily protein reference (grams)
pub const DAILY_PROTEIN_G: f64 = 50.0;

/// Daily carbohydrate reference (grams)
pub const DAILY_CARBS_G: f64 = 300.0;

/// Daily fat reference (grams)
pub const DAILY_FAT_G: f64 = 65.0;

/// Daily vitamin C reference (milligrams)
pub const DAILY_VITAMIN_C_MG: f64 = 90.0;

/// Daily iron reference (milligrams)
pub const DAILY_IRON_MG: f64 = 18.0;

/// Daily calcium reference (milligrams)
pub const DAILY_CALCIUM_MG: f64 = 1000.0;

/// Upper bound for percentages rendered as a bounded progress bar
pub const DISPLAY_PERCENT_CAP: u32 = 100;
