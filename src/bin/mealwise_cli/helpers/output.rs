// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for mealwise-cli
// ABOUTME: Writes command results to stdout as pretty-printed JSON

use anyhow::Result;
use serde::Serialize;
use std::io::{self, Write};

/// Print a value as pretty JSON followed by a newline
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}
