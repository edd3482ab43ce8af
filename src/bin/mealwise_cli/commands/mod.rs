// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for mealwise-cli
// ABOUTME: Provides grocery, scaling, search, and meal plan commands

pub mod grocery;
pub mod plan;
pub mod recipes;
