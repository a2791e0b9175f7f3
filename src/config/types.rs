//! Typed filter options
//!
//! The host hands every filter a loose key/value bag. Only two keys matter
//! here, so the bag is narrowed to `FilterOptions` and everything else is
//! dropped on the floor.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::OptionsError;

/// Per-call options controlling whether filtering runs at all
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    /// Content must be passed through untouched
    #[serde(deserialize_with = "truthy")]
    pub noclean: bool,

    /// Content is already trusted by the host and needs no cleaning
    #[serde(deserialize_with = "truthy")]
    pub trusted: bool,
}

impl FilterOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_noclean(mut self, noclean: bool) -> Self {
        self.noclean = noclean;
        self
    }

    #[must_use]
    pub fn with_trusted(mut self, trusted: bool) -> Self {
        self.trusted = trusted;
        self
    }

    /// True when either bypass flag is set and the text must come back as-is
    #[must_use]
    pub fn bypasses_filtering(&self) -> bool {
        self.noclean || self.trusted
    }

    /// Build options from a host option map
    ///
    /// Unknown keys are ignored and missing keys default to `false`. Values are
    /// read with [`is_truthy`], so `"1"`, `1` and `true` all enable a flag.
    #[must_use]
    pub fn from_map(map: &Map<String, Value>) -> Self {
        let flag = |key: &str| map.get(key).is_some_and(is_truthy);
        Self {
            noclean: flag(crate::utils::NOCLEAN_OPTION),
            trusted: flag(crate::utils::TRUSTED_OPTION),
        }
    }

    /// Parse options from a JSON object
    ///
    /// # Errors
    ///
    /// Returns `OptionsError::Json` for malformed JSON and
    /// `OptionsError::NotAnObject` when the top-level value is not an object.
    pub fn from_json_str(json: &str) -> Result<Self, OptionsError> {
        match serde_json::from_str::<Value>(json)? {
            Value::Object(map) => Ok(Self::from_map(&map)),
            other => Err(OptionsError::NotAnObject(json_type_name(&other))),
        }
    }
}

/// Host "non-empty" rule for option values
///
/// `null`, `false`, `0`, `0.0`, `""`, `"0"`, `[]` and `{}` are falsy. Every
/// other value is truthy, including the string `"false"`.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !(s.is_empty() || s == "0"),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn truthy<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|v| is_truthy(&v))
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
