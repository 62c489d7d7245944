//! Decoding rules shared by every endpoint's wire structs.
//!
//! The API is consumed as loosely-typed JSON: any field may be absent, `null`,
//! a number, or a number serialised as a string. Wire structs therefore hold
//! `Option`s decoded with the lenient helpers below, and models apply exactly
//! one defaulting rule when converting: missing numbers become `0`, missing
//! text becomes empty, missing flags become `false`.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accepts a number, a numeric string, or null.
pub(crate) fn de_lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// Accepts an integer, a whole float, a numeric string, or null.
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn de_lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < 9.0e15)
                .map(|f| f as i64)
        }),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}

/// Accepts a string, a bare number (rendered as text), or null.
pub(crate) fn de_lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Accepts a bool, `0`/`1`, `"true"`/`"false"`, or null.
pub(crate) fn de_lenient_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Bool(b)) => Some(b),
        Some(Value::Number(n)) => n.as_i64().map(|i| i != 0),
        Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" | "yes" => Some(true),
            "false" | "0" | "no" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Missing or non-finite numbers count as zero.
pub(crate) fn num(v: Option<f64>) -> f64 {
    v.filter(|f| f.is_finite()).unwrap_or(0.0)
}

/// Missing counts are zero; negative counts are clamped to zero.
pub(crate) fn count(v: Option<i64>) -> u64 {
    v.and_then(|i| u64::try_from(i).ok()).unwrap_or(0)
}

/// Missing text is empty.
pub(crate) fn text(v: Option<String>) -> String {
    v.unwrap_or_default()
}
