// SPDX-License-Identifier: MIT OR Apache-2.0

//! Argument kinds and the owned values stored in a descriptor's slot.

use crate::domain::errors::{ArgError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The scalar kind of a bindable argument.
///
/// # Examples
///
/// ```
/// use bindargs::domain::ArgKind;
///
/// assert_eq!(ArgKind::Integer.to_string(), "int");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArgKind {
    /// Free-form text
    String,
    /// A flag that is either present or absent
    Bool,
    /// A signed integer
    Integer,
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ArgKind::String => "string",
            ArgKind::Bool => "bool",
            ArgKind::Integer => "int",
        };
        f.write_str(name)
    }
}

/// Inclusive bounds accepted by an integer argument.
///
/// Integer values are stored as `i64`, so a field type wider than that on either
/// side is clamped to the `i64` range.
///
/// # Examples
///
/// ```
/// use bindargs::domain::IntRange;
///
/// let port = IntRange::new(0, 65535);
/// assert!(port.contains(8080));
/// assert!(!port.contains(70000));
/// assert_eq!(port.to_string(), "0..=65535");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntRange {
    /// Smallest accepted value
    pub min: i64,
    /// Largest accepted value
    pub max: i64,
}

impl IntRange {
    /// The whole `i64` range.
    pub const FULL: IntRange = IntRange {
        min: i64::MIN,
        max: i64::MAX,
    };

    /// Creates a range from inclusive bounds.
    pub fn new(min: i64, max: i64) -> Self {
        Self { min, max }
    }

    /// Returns true if `value` lies within the bounds.
    pub fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }
}

impl Default for IntRange {
    fn default() -> Self {
        Self::FULL
    }
}

impl fmt::Display for IntRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// A typed argument value.
///
/// Values are produced from raw source tokens with [`ArgValue::parse`], which
/// performs the per-kind coercion.
///
/// # Examples
///
/// ```
/// use bindargs::domain::{ArgKind, ArgValue};
///
/// let value = ArgValue::parse(ArgKind::Integer, "port", "2345").unwrap();
/// assert_eq!(value, ArgValue::Integer(2345));
///
/// assert!(ArgValue::parse(ArgKind::Integer, "port", "notanumber").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArgValue {
    /// A string value
    String(String),
    /// A boolean value
    Bool(bool),
    /// An integer value
    Integer(i64),
}

impl ArgValue {
    /// Returns the zero value for a kind: empty string, `false`, or `0`.
    pub fn zero(kind: ArgKind) -> Self {
        match kind {
            ArgKind::String => ArgValue::String(String::new()),
            ArgKind::Bool => ArgValue::Bool(false),
            ArgKind::Integer => ArgValue::Integer(0),
        }
    }

    /// Coerces a raw token into a value of the given kind.
    ///
    /// `name` is only used for error reporting. Booleans accept (case-insensitive)
    /// `true`, `yes`, `1`, `on` and `false`, `no`, `0`, `off`.
    pub fn parse(kind: ArgKind, name: &str, raw: &str) -> Result<Self> {
        match kind {
            ArgKind::String => Ok(ArgValue::String(raw.to_string())),
            ArgKind::Integer => raw
                .parse::<i64>()
                .map(ArgValue::Integer)
                .map_err(|e| ArgError::from_parse_int_error(name, raw, e)),
            ArgKind::Bool => match raw.to_lowercase().as_str() {
                "true" | "yes" | "1" | "on" => Ok(ArgValue::Bool(true)),
                "false" | "no" | "0" | "off" => Ok(ArgValue::Bool(false)),
                _ => Err(ArgError::invalid_bool(name, raw)),
            },
        }
    }

    /// Returns the kind of this value.
    pub fn kind(&self) -> ArgKind {
        match self {
            ArgValue::String(_) => ArgKind::String,
            ArgValue::Bool(_) => ArgKind::Bool,
            ArgValue::Integer(_) => ArgKind::Integer,
        }
    }

    /// Returns true for an empty string. Booleans and integers are never empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, ArgValue::String(s) if s.is_empty())
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::String(s) => f.write_str(s),
            ArgValue::Bool(b) => write!(f, "{}", b),
            ArgValue::Integer(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(s: &str) -> Self {
        ArgValue::String(s.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(s: String) -> Self {
        ArgValue::String(s)
    }
}

impl From<bool> for ArgValue {
    fn from(b: bool) -> Self {
        ArgValue::Bool(b)
    }
}

impl From<i64> for ArgValue {
    fn from(i: i64) -> Self {
        ArgValue::Integer(i)
    }
}
