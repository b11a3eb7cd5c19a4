//! Defensive conversion of raw JSON values
//!
//! Upstream tables are expected to be clean, but partial data must not abort a
//! load. Counts fall back to zero, probabilities to NaN (which the resolver
//! chain treats as undefined), and unparsable year keys are reported so the
//! caller can skip them.

use serde_json::Value;

use crate::models::Year;

/// Parse a year-string key such as `"1996"`
#[must_use]
pub fn parse_year(key: &str) -> Option<Year> {
    key.trim().parse::<Year>().ok()
}

/// Interpret a raw birth count.
///
/// Non-negative integers pass through. Fractional values are rounded,
/// numeric strings are parsed, and negative, non-finite, or non-numeric
/// values become zero.
#[must_use]
pub fn coerce_count(value: &Value) -> u64 {
    match value {
        Value::Number(number) => number
            .as_u64()
            .or_else(|| number.as_f64().map(count_from_f64))
            .unwrap_or(0),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<u64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().map(count_from_f64))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

fn count_from_f64(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.round() as u64
    } else {
        0
    }
}

/// Interpret a raw survival probability; anything non-numeric becomes NaN
#[must_use]
pub fn coerce_probability(value: &Value) -> f64 {
    match value {
        Value::Number(number) => number.as_f64().unwrap_or(f64::NAN),
        Value::String(text) => text.trim().parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}
