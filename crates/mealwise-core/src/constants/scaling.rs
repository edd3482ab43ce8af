// ABOUTME: Recipe scaling constants: serving menu, time penalty, and quantity label
// ABOUTME: Heuristic values reproduced exactly for behavioral parity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Serving counts offered by the scaling control
pub const SERVING_MENU: [u32; 4] = [1, 2, 4, 6];

/// Sub-linear prep time multiplier applied when cooking more than one serving
pub const MULTI_SERVING_TIME_FACTOR: f64 = 0.7;

/// Unit label appended to scaled ingredient quantities
pub const SCALED_QUANTITY_UNIT: &str = "g";

/// Serving count used when the requested one is invalid
pub const FALLBACK_SERVINGS: f64 = 1.0;
