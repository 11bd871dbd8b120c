//! Serde helpers for the exchange's JSON conventions.
//!
//! The venue serializes every decimal as a string (`"price": "43250.10"`).
//! These helpers decode them into `f64`, tolerating plain numbers as well so
//! fixtures and future API revisions keep working.

use serde::de::{self, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    Text(String),
    Number(f64),
}

/// Decodes a decimal that may arrive as a string or a bare number.
pub fn string_as_float<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Number(n) => Ok(n),
        StringOrNumber::Text(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| de::Error::custom(format!("invalid decimal string: {s}"))),
    }
}

/// Optional variant of [`string_as_float`]; empty strings and `null` decode
/// to `None`.
pub fn string_as_float_opt<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<StringOrNumber>::deserialize(deserializer)? {
        None => Ok(None),
        Some(StringOrNumber::Number(n)) => Ok(Some(n)),
        Some(StringOrNumber::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .map(Some)
                .map_err(|_| de::Error::custom(format!("invalid decimal string: {s}")))
        }
    }
}
