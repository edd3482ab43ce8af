// ABOUTME: Lenient serde helpers that default malformed JSON fields instead of failing
// ABOUTME: Used at the data boundary so loosely shaped records still load
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Field-level deserializers for loosely shaped JSON records.
//!
//! Catalog and meal plan data come from hand-edited JSON and browser storage.
//! Each helper reads the raw value and substitutes an empty or zero value when
//! the shape is wrong, so one bad field never rejects the whole record.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

/// Read a number, accepting numeric strings; anything else becomes `0.0`
pub fn number_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_f64).unwrap_or(0.0))
}

/// Read a non-negative whole number; fractional values round, garbage becomes `0`
pub fn count_or_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(value_as_f64)
        .map_or(0, |n| n.round().max(0.0) as u32))
}

/// Read a serving count; missing, zero, or malformed values become `1`
pub fn servings_or_one<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let servings = count_or_zero(deserializer)?;
    Ok(servings.max(1))
}

/// Read a list of strings; non-array values become empty, non-string entries are skipped
pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Read a nested record, substituting `T::default()` for null
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Read an optional record; a value of the wrong shape is treated as absent
pub fn optional_record<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(record_from_value))
}

/// Read a list of records, skipping entries of the wrong shape
pub fn record_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items.into_iter().filter_map(record_from_value).collect(),
        _ => Vec::new(),
    })
}

pub(crate) fn record_from_value<T: DeserializeOwned>(value: Value) -> Option<T> {
    if value.is_null() {
        return None;
    }
    match serde_json::from_value(value) {
        Ok(record) => Some(record),
        Err(e) => {
            debug!("Skipping malformed record: {e}");
            None
        }
    }
}

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|n| n.is_finite())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default, deserialize_with = "number_or_zero")]
        amount: f64,
        #[serde(default, deserialize_with = "count_or_zero")]
        minutes: u32,
        #[serde(default = "one", deserialize_with = "servings_or_one")]
        servings: u32,
        #[serde(default, deserialize_with = "string_list")]
        tags: Vec<String>,
    }

    const fn one() -> u32 {
        1
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let probe: Probe = serde_json::from_str("{}").unwrap();
        assert!(probe.amount.abs() < f64::EPSILON);
        assert_eq!(probe.minutes, 0);
        assert_eq!(probe.servings, 1);
        assert!(probe.tags.is_empty());
    }

    #[test]
    fn test_malformed_fields_degrade() {
        let probe: Probe = serde_json::from_str(
            r#"{"amount": "12.5", "minutes": -4, "servings": 0, "tags": ["a", 3, null, "b"]}"#,
        )
        .unwrap();
        assert!((probe.amount - 12.5).abs() < f64::EPSILON);
        assert_eq!(probe.minutes, 0);
        assert_eq!(probe.servings, 1);
        assert_eq!(probe.tags, vec!["a".to_owned(), "b".to_owned()]);
    }

    #[test]
    fn test_non_array_list_is_empty() {
        let probe: Probe = serde_json::from_str(r#"{"tags": "eggs, bread"}"#).unwrap();
        assert!(probe.tags.is_empty());

        let probe: Probe = serde_json::from_str(r#"{"tags": null, "amount": true}"#).unwrap();
        assert!(probe.tags.is_empty());
        assert!(probe.amount.abs() < f64::EPSILON);
    }
}
