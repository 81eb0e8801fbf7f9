// SPDX-License-Identifier: MIT OR Apache-2.0

//! Source kinds and the origin stamped on each resolved argument.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An input channel that can supply argument values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourceKind {
    /// Configuration files
    File,
    /// Environment variables
    Env,
    /// Command-line arguments
    Args,
}

impl SourceKind {
    /// The default resolution order, lowest priority first.
    pub const DEFAULT_ORDER: [SourceKind; 3] = [SourceKind::File, SourceKind::Env, SourceKind::Args];
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SourceKind::File => "file",
            SourceKind::Env => "env",
            SourceKind::Args => "args",
        };
        f.write_str(name)
    }
}

/// Which source last supplied an argument's value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Origin {
    /// No source has set the value yet
    #[default]
    Unresolved,
    /// Set from a configuration file
    FromFile,
    /// Set from an environment variable
    FromEnv,
    /// Set from the command line
    FromArgs,
}

impl Origin {
    /// Returns true if any source has set the value.
    pub fn is_resolved(&self) -> bool {
        *self != Origin::Unresolved
    }
}

impl From<SourceKind> for Origin {
    fn from(kind: SourceKind) -> Self {
        match kind {
            SourceKind::File => Origin::FromFile,
            SourceKind::Env => Origin::FromEnv,
            SourceKind::Args => Origin::FromArgs,
        }
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Origin::Unresolved => "unresolved",
            Origin::FromFile => "file",
            Origin::FromEnv => "env",
            Origin::FromArgs => "args",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_order() {
        assert_eq!(
            SourceKind::DEFAULT_ORDER,
            [SourceKind::File, SourceKind::Env, SourceKind::Args]
        );
    }

    #[test]
    fn test_origin_from_source_kind() {
        assert_eq!(Origin::from(SourceKind::File), Origin::FromFile);
        assert_eq!(Origin::from(SourceKind::Env), Origin::FromEnv);
        assert_eq!(Origin::from(SourceKind::Args), Origin::FromArgs);
    }

    #[test]
    fn test_origin_default_is_unresolved() {
        assert_eq!(Origin::default(), Origin::Unresolved);
        assert!(!Origin::default().is_resolved());
        assert!(Origin::FromEnv.is_resolved());
    }

    #[test]
    fn test_display() {
        assert_eq!(SourceKind::Env.to_string(), "env");
        assert_eq!(Origin::FromArgs.to_string(), "args");
        assert_eq!(Origin::Unresolved.to_string(), "unresolved");
    }
}
