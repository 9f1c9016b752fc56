//! Service-specific attribute bag
//!
//! Proposal forms post loosely typed values (`"4"`, `4`, `"true"`, `true`).
//! Lookups coerce instead of failing: unknown or malformed values read as
//! zero, false or absent.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Frequency assumed when a form leaves it blank
pub const DEFAULT_FREQUENCY: &str = "one-time";

/// Read a loosely typed form value as a finite number, or zero
pub fn coerce_number(value: &Value) -> f64 {
    let value = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    };
    if value.is_finite() { value } else { 0.0 }
}

/// `deserialize_with` adapter for numeric form fields
pub fn lenient_number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map_or(0.0, coerce_number))
}

/// `deserialize_with` adapter for the frequency field; non-strings read as one-time
pub fn lenient_frequency<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(s),
        _ => Ok(default_frequency()),
    }
}

/// Serde default for the frequency field
pub fn default_frequency() -> String {
    DEFAULT_FREQUENCY.to_string()
}

/// Open attribute bag keyed by form field name
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct ServiceAttributes(Map<String, Value>);

impl ServiceAttributes {
    /// Create an empty attribute bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an attribute
    pub fn insert<V: Into<Value>>(&mut self, key: &str, value: V) {
        self.0.insert(key.to_string(), value.into());
    }

    /// Raw attribute value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of attributes present
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the bag is empty
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Truthiness of an attribute; missing is false
    pub fn flag(&self, key: &str) -> bool {
        match self.0.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|v| v != 0.0 && !v.is_nan()),
            Some(Value::String(s)) => {
                let s = s.trim();
                !s.is_empty()
                    && !["false", "0", "no", "off"]
                        .iter()
                        .any(|falsy| s.eq_ignore_ascii_case(falsy))
            }
            Some(Value::Array(items)) => !items.is_empty(),
            Some(Value::Object(fields)) => !fields.is_empty(),
        }
    }

    /// Numeric attribute; missing or malformed reads as zero
    pub fn number(&self, key: &str) -> f64 {
        self.0.get(key).map_or(0.0, coerce_number)
    }

    /// String attribute, if present and a string
    pub fn text(&self, key: &str) -> Option<&str> {
        match self.0.get(key) {
            Some(Value::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Whether a string attribute equals `expected`
    pub fn is(&self, key: &str, expected: &str) -> bool {
        self.text(key) == Some(expected)
    }
}

impl From<Map<String, Value>> for ServiceAttributes {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ServiceAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
