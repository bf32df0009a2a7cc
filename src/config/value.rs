//! Typed configuration values and the lenient conversions used by the store accessors

use serde::Serialize;
use serde_json::Value as JsonValue;
use std::fmt;

/// A single resolved configuration value.
///
/// Environment overrides always arrive as [`ConfigValue::String`]; the typed
/// accessors on the store convert on read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    List(Vec<ConfigValue>),
}

impl ConfigValue {
    /// Convert to a string. Sequences have no string form and yield `None`.
    pub fn as_string(&self) -> Option<String> {
        match self {
            ConfigValue::String(s) => Some(s.clone()),
            ConfigValue::Integer(i) => Some(i.to_string()),
            ConfigValue::Float(f) => Some(f.to_string()),
            ConfigValue::Boolean(b) => Some(b.to_string()),
            ConfigValue::List(_) => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            ConfigValue::Integer(i) => Some(*i),
            // "12.0" is accepted, "12.9" is not an integer.
            ConfigValue::String(s) => trim_zero_decimal(s.trim()).parse::<i64>().ok(),
            ConfigValue::Float(f) if f.is_finite() => Some(*f as i64),
            ConfigValue::Float(_) => None,
            ConfigValue::Boolean(b) => Some(i64::from(*b)),
            ConfigValue::List(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Boolean(b) => Some(*b),
            ConfigValue::Integer(i) => Some(*i != 0),
            ConfigValue::Float(f) => Some(*f != 0.0),
            ConfigValue::String(s) => match s.trim().to_ascii_lowercase().as_str() {
                "1" | "t" | "true" | "yes" | "on" => Some(true),
                "0" | "f" | "false" | "no" | "off" => Some(false),
                _ => None,
            },
            ConfigValue::List(_) => None,
        }
    }

    /// Convert to a string sequence.
    ///
    /// A plain string is split on whitespace, so `GUARDIAN_DEFAULTENVIRONMENT="A=1 B=2"`
    /// reads back as two entries.
    pub fn as_string_slice(&self) -> Vec<String> {
        match self {
            ConfigValue::List(items) => items.iter().filter_map(ConfigValue::as_string).collect(),
            ConfigValue::String(s) => s.split_whitespace().map(str::to_string).collect(),
            other => other.as_string().into_iter().collect(),
        }
    }

    /// Build a value from a parsed document node.
    ///
    /// Nulls and tables have no scalar form; the loader flattens tables into
    /// dotted keys before calling this. toml datetimes come through as their text.
    pub(crate) fn from_json(value: &JsonValue) -> Option<Self> {
        match value {
            JsonValue::Object(map) => toml_datetime(map).map(ConfigValue::from),
            JsonValue::Null => None,
            JsonValue::Bool(b) => Some(ConfigValue::Boolean(*b)),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => Some(ConfigValue::Integer(i)),
                None => n.as_f64().map(ConfigValue::Float),
            },
            JsonValue::String(s) => Some(ConfigValue::String(s.clone())),
            JsonValue::Array(items) => {
                Some(ConfigValue::List(items.iter().filter_map(ConfigValue::from_json).collect()))
            }
        }
    }
}

/// Key toml uses to carry datetimes through a generic deserializer.
const TOML_DATETIME_FIELD: &str = "$__toml_private_datetime";

/// The datetime text if `map` is toml's single-field datetime wrapper.
pub(crate) fn toml_datetime(map: &serde_json::Map<String, JsonValue>) -> Option<&str> {
    if map.len() != 1 {
        return None;
    }
    map.get(TOML_DATETIME_FIELD).and_then(JsonValue::as_str)
}

fn trim_zero_decimal(s: &str) -> &str {
    match s.split_once('.') {
        Some((whole, frac))
            if !whole.is_empty() && !frac.is_empty() && frac.bytes().all(|b| b == b'0') =>
        {
            whole
        }
        _ => s,
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::List(items) => {
                let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
                write!(f, "[{}]", parts.join(", "))
            }
            scalar => write!(f, "{}", scalar.as_string().unwrap_or_default()),
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Integer(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        ConfigValue::Integer(i64::from(value))
    }
}

impl From<u16> for ConfigValue {
    fn from(value: u16) -> Self {
        ConfigValue::Integer(i64::from(value))
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Float(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Boolean(value)
    }
}

impl From<Vec<String>> for ConfigValue {
    fn from(values: Vec<String>) -> Self {
        ConfigValue::List(values.into_iter().map(ConfigValue::String).collect())
    }
}

impl From<Vec<&str>> for ConfigValue {
    fn from(values: Vec<&str>) -> Self {
        ConfigValue::List(values.into_iter().map(ConfigValue::from).collect())
    }
}
