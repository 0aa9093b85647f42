use std::fmt;

use serde::{Deserialize, Serialize};

use super::convert::format_float;

/// Runtime value representation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// No value (result of assign, print and program)
    #[default]
    None,
    /// Floating-point number
    Numeric(f64),
    /// String value
    String(String),
}

/// Type tag of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    /// Number
    Numeric,
    /// String
    String,
    /// No value
    None,
}

impl Value {
    /// Returns the type tag of this value
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::None => ValueKind::None,
            Value::Numeric(_) => ValueKind::Numeric,
            Value::String(_) => ValueKind::String,
        }
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "none",
            Value::Numeric(_) => "numeric",
            Value::String(_) => "string",
        }
    }

    /// Returns the number, if this is a numeric value
    pub fn as_numeric(&self) -> Option<f64> {
        match self {
            Value::Numeric(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the text, if this is a string value
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true for the untyped value
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Numeric(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

/// Renders the value the way `print` writes it; `None` renders as nothing
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::None => Ok(()),
            Value::Numeric(n) => write!(f, "{}", format_float(*n)),
            Value::String(s) => write!(f, "{}", s),
        }
    }
}
