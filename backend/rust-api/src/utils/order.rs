//! Serde helper for the display `order` field. Clients send it as a number, a numeric
//! string from a form input, or not at all; anything non-numeric sorts as 0.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize `order` leniently. Used with `#[serde(default, deserialize_with = "crate::utils::order::deserialize")]`.
pub fn deserialize<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(coerce(&value))
}

/// Integer sort key for an arbitrary JSON value.
pub fn coerce(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().and_then(float_to_order))
            .unwrap_or(0),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(float_to_order))
                .unwrap_or(0)
        }
        _ => 0,
    }
}

fn float_to_order(f: f64) -> Option<i64> {
    f.is_finite().then(|| f.trunc() as i64)
}
