// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports helper modules for mealwise-cli
// ABOUTME: Provides argument parsers and JSON output formatting

pub mod args;
pub mod output;
