//! Stored value type.
//!
//! A key either carries an explicit comma-separated list (`key=a,b,c`) or is
//! present on its own line with no `=`. The two cases are kept apart so a bare
//! `debug` never compares equal to `debug=0`.

use std::fmt;

/// Numeric sentinel stored for a key that appeared without `=`.
pub const PRESENCE_SENTINEL: i64 = 0;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Key present, no explicit data.
    Presence,
    /// Ordered, trimmed segments of the right-hand side.
    List(Vec<String>),
}

impl Value {
    pub fn is_presence(&self) -> bool {
        matches!(self, Value::Presence)
    }

    /// Segments as strings. `Presence` yields the sentinel's string form.
    pub fn items(&self) -> Vec<String> {
        match self {
            Value::Presence => vec![PRESENCE_SENTINEL.to_string()],
            Value::List(items) => items.clone(),
        }
    }

    fn first(&self) -> Option<&str> {
        match self {
            Value::Presence => None,
            Value::List(items) => items.first().map(String::as_str),
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Presence => Some(PRESENCE_SENTINEL),
            Value::List(_) => self.first()?.parse().ok(),
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Presence => Some(PRESENCE_SENTINEL as f64),
            Value::List(_) => self.first()?.parse().ok(),
        }
    }

    /// A bare key reads as an enabled flag.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Presence => Some(true),
            Value::List(_) => parse_bool(self.first()?),
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Presence => write!(f, "{}", PRESENCE_SENTINEL),
            Value::List(items) => write!(f, "{}", items.join(",")),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::List(vec![value.to_string()])
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::List(vec![value])
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::List(vec![value.to_string()])
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::List(vec![value.to_string()])
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::List(vec![if value { "1" } else { "0" }.to_string()])
    }
}

impl From<Vec<String>> for Value {
    fn from(value: Vec<String>) -> Self {
        Value::List(value)
    }
}

impl From<&[&str]> for Value {
    fn from(value: &[&str]) -> Self {
        Value::List(value.iter().map(|s| s.to_string()).collect())
    }
}
