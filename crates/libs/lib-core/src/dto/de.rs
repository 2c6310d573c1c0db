//! Field deserializers shared by the request DTOs.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Accept any JSON value for a string field. Anything that is not a string
/// (`null`, numbers, arrays) becomes `""`, so the field fails its own
/// validation rule instead of rejecting the whole body.
pub fn string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}
