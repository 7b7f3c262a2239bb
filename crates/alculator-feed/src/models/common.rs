//! Common model types shared by both feed schema generations.
//!
//! The feed is scraped retail data: numbers show up as JSON numbers, numeric
//! strings, empty strings or `null`, and stock codes are sometimes numbers.
//! The lenient deserializers here turn all of that into `Option` values so a
//! single odd field never rejects a whole record.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// The package types a product can be priced in.
///
/// Ordering of [`PackageType::ALL`] is the fixed emission order used when
/// flattening a product into cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageType {
    /// A single bottle or can.
    Single,
    /// A multi-pack (four, six, ten pack...).
    Pack,
    /// A full case or slab.
    Case,
}

impl PackageType {
    /// All package types, in emission order.
    pub const ALL: [PackageType; 3] = [PackageType::Single, PackageType::Pack, PackageType::Case];

    /// Returns the lower-case token used in the feed and in filter selections.
    pub fn as_str(&self) -> &'static str {
        match self {
            PackageType::Single => "single",
            PackageType::Pack => "pack",
            PackageType::Case => "case",
        }
    }

    /// Parses a feed token (case-insensitive).
    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_lowercase().as_str() {
            "single" => Some(PackageType::Single),
            "pack" => Some(PackageType::Pack),
            "case" => Some(PackageType::Case),
            _ => None,
        }
    }
}

impl std::fmt::Display for PackageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Interprets a JSON value as a finite number.
///
/// Accepts numbers and numeric strings (surrounding whitespace is ignored).
/// Everything else, including `NaN`/`inf` strings, is `None`.
pub fn number_from_value(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Interprets a JSON value as a non-empty string. Numbers are stringified.
pub fn string_from_value(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Serde adapter for optional numeric fields.
pub fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(number_from_value(&value))
}

/// Serde adapter for optional string fields.
pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(string_from_value(&value))
}

/// Serde adapter for boolean flags; only a JSON `true` counts.
pub fn lenient_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value == Value::Bool(true))
}
