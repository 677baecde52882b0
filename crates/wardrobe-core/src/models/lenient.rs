// ABOUTME: Lenient serde helpers for store rows with loosely typed columns
// ABOUTME: Malformed numbers and null collections degrade to absent values instead of errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Wardrobe Stylist

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept a number, a numeric string, or null. Anything else, including
/// non-finite values, becomes `None`.
///
/// # Errors
///
/// Returns the deserializer's error if the input is not valid JSON
pub fn finite_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let parsed = raw.and_then(|value| match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    });
    Ok(parsed.filter(|value| value.is_finite()))
}

/// Treat an explicit `null` like a missing field.
///
/// # Errors
///
/// Returns the deserializer's error if the value has the wrong shape
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
