// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration file source.
//!
//! No file format is defined yet. The resolver holds the `File` slot in the
//! source order so that a real implementation can be dropped in without
//! changing how precedence works.

use crate::domain::{Registry, Result, SourceKind};
use crate::ports::SourceResolver;

/// Placeholder resolver for configuration files. It never matches anything.
#[derive(Debug, Clone, Default)]
pub struct FileResolver;

impl FileResolver {
    /// Creates the file resolver.
    pub fn new() -> Self {
        FileResolver
    }
}

impl SourceResolver for FileResolver {
    fn name(&self) -> &str {
        "file"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::File
    }

    fn resolve(&self, registry: &mut Registry) -> Result<usize> {
        tracing::debug!(
            "file source has no format configured, skipping {} args",
            registry.len()
        );
        Ok(0)
    }
}
