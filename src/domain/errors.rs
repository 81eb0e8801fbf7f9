// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for argument binding and resolution.
//!
//! Every failure the crate can report is a variant of [`ArgError`]. Resolution
//! never panics; the caller decides whether a failure should terminate the process.

use std::num::ParseIntError;
use thiserror::Error;

use crate::domain::{ArgKind, IntRange};

/// The main error type for binding and resolution.
///
/// # Examples
///
/// ```
/// use bindargs::domain::errors::ArgError;
///
/// let err = ArgError::MissingRequired { name: "host".to_string() };
/// assert_eq!(err.to_string(), "arg is required but was not provided: host");
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ArgError {
    /// A raw token could not be coerced into the argument's kind.
    #[error("Failed to convert value '{raw}' for argument '{name}' to type {target}: {source}")]
    TypeConversion {
        /// Long name of the argument
        name: String,
        /// The raw token that failed to convert
        raw: String,
        /// The kind the value was converted to
        target: ArgKind,
        /// The underlying conversion error
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A required argument was not supplied by any source.
    #[error("arg is required but was not provided: {name}")]
    MissingRequired {
        /// Long name of the argument
        name: String,
    },

    /// A value-taking flag was the last token on the command line.
    #[error("argument '{flag}' expects a value but none followed it")]
    MissingValue {
        /// The flag token as written
        flag: String,
    },

    /// Two arguments were registered under the same long or short name.
    #[error("argument name '{name}' is already registered")]
    DuplicateArgument {
        /// The clashing name
        name: String,
    },

    /// A value was written to or read from a descriptor without a bound slot.
    #[error("argument '{name}' has no bound value slot")]
    UnboundSlot {
        /// Long name of the argument
        name: String,
    },

    /// A value of the wrong kind was assigned to or read from a descriptor.
    #[error("argument '{name}' is of type {expected}, got {found}")]
    KindMismatch {
        /// Long name of the argument
        name: String,
        /// The descriptor's kind
        expected: ArgKind,
        /// The kind that was supplied or requested
        found: ArgKind,
    },

    /// No argument with the given long name is registered.
    #[error("argument not found: {name}")]
    ArgumentNotFound {
        /// The name that was looked up
        name: String,
    },

    /// An input source failed.
    #[error("source '{source_name}' error: {message}")]
    SourceError {
        /// The name of the source that encountered the error
        source_name: String,
        /// The error message
        message: String,
    },
}

impl ArgError {
    /// Creates a `TypeConversion` error from a `ParseIntError`.
    pub fn from_parse_int_error(name: &str, raw: &str, err: ParseIntError) -> Self {
        ArgError::TypeConversion {
            name: name.to_string(),
            raw: raw.to_string(),
            target: ArgKind::Integer,
            source: Box::new(err),
        }
    }

    /// Creates a `TypeConversion` error for an unrecognised boolean token.
    pub fn invalid_bool(name: &str, raw: &str) -> Self {
        ArgError::TypeConversion {
            name: name.to_string(),
            raw: raw.to_string(),
            target: ArgKind::Bool,
            source: format!("'{}' is not a recognised boolean", raw).into(),
        }
    }

    /// Creates a `TypeConversion` error for an integer outside the argument's bounds.
    pub fn out_of_range(name: &str, value: i64, range: IntRange) -> Self {
        ArgError::TypeConversion {
            name: name.to_string(),
            raw: value.to_string(),
            target: ArgKind::Integer,
            source: format!("value is outside the accepted range {}", range).into(),
        }
    }
}

/// A specialized Result type for argument operations.
pub type Result<T> = std::result::Result<T, ArgError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_error() {
        let error = ArgError::MissingRequired {
            name: "host".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "arg is required but was not provided: host"
        );
    }

    #[test]
    fn test_from_parse_int_error() {
        let parse_err = "notanumber".parse::<i64>().unwrap_err();
        let error = ArgError::from_parse_int_error("port", "notanumber", parse_err);
        assert!(matches!(
            error,
            ArgError::TypeConversion {
                target: ArgKind::Integer,
                ..
            }
        ));
        let msg = error.to_string();
        assert!(msg.contains("port"));
        assert!(msg.contains("notanumber"));
        assert!(msg.contains("int"));
    }

    #[test]
    fn test_invalid_bool() {
        let error = ArgError::invalid_bool("debug", "maybe");
        assert!(error.to_string().contains("bool"));
        assert!(error.to_string().contains("maybe"));
    }

    #[test]
    fn test_out_of_range() {
        let error = ArgError::out_of_range("port", 70000, IntRange::new(0, 65535));
        assert!(matches!(
            error,
            ArgError::TypeConversion {
                target: ArgKind::Integer,
                ..
            }
        ));
        let msg = error.to_string();
        assert!(msg.contains("70000"));
        assert!(msg.contains("0..=65535"));
    }

    #[test]
    fn test_kind_mismatch() {
        let error = ArgError::KindMismatch {
            name: "port".to_string(),
            expected: ArgKind::Integer,
            found: ArgKind::String,
        };
        assert_eq!(
            error.to_string(),
            "argument 'port' is of type int, got string"
        );
    }

    #[test]
    fn test_source_error() {
        let error = ArgError::SourceError {
            source_name: "env".to_string(),
            message: "unreadable".to_string(),
        };
        assert_eq!(error.to_string(), "source 'env' error: unreadable");
    }
}
