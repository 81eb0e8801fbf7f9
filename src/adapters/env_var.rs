// SPDX-License-Identifier: MIT OR Apache-2.0

//! Environment variable source.
//!
//! This module provides a resolver that reads argument values from a snapshot
//! of `KEY=VALUE` environment entries.

use crate::domain::{ArgKind, Origin, Registry, Result, SourceKind};
use crate::ports::SourceResolver;
use std::env;

/// Maximum length for environment variable keys taken from the process
const MAX_ENV_KEY_LEN: usize = 512;

/// Maximum length for environment variable values taken from the process
const MAX_ENV_VALUE_LEN: usize = 1048576; // 1MB

/// Resolver for environment variables.
///
/// Each descriptor is looked up under its environment name (by default
/// `<prefix><UPPERCASED long name>`). The first entry with that key wins, in
/// input order.
///
/// Only string descriptors are populated unless typed coercion is switched on
/// with [`EnvResolver::coerce_typed`]. With coercion on, integer and boolean
/// descriptors are parsed and a bad value aborts resolution.
///
/// # Examples
///
/// ```rust
/// use bindargs::adapters::EnvResolver;
/// use bindargs::domain::{ArgDescriptor, Origin, Registry};
/// use bindargs::ports::SourceResolver;
///
/// let mut registry = Registry::new();
/// let mut host = ArgDescriptor::string("host");
/// host.derive_env_name("TEST_");
/// registry.register(host).unwrap();
///
/// let resolver = EnvResolver::from_pairs(["TEST_HOST=localhost", "HOST=elsewhere"]);
/// resolver.resolve(&mut registry).unwrap();
///
/// let host = registry.get("host").unwrap();
/// assert_eq!(host.as_str().unwrap(), "localhost");
/// assert_eq!(host.origin(), Origin::FromEnv);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvResolver {
    /// Environment entries in input order
    entries: Vec<(String, String)>,
    /// Whether integer and boolean descriptors are populated too
    coerce_typed: bool,
}

impl EnvResolver {
    /// Creates a resolver over `KEY=VALUE` entries.
    ///
    /// Entries without an `=` are ignored. The value is everything after the
    /// first `=`.
    pub fn from_pairs<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .filter_map(|entry| {
                let entry = entry.as_ref();
                match entry.split_once('=') {
                    Some((key, value)) => Some((key.to_string(), value.to_string())),
                    None => {
                        tracing::trace!("ignoring environment entry without '=': {:?}", entry);
                        None
                    }
                }
            })
            .collect();

        Self {
            entries,
            coerce_typed: false,
        }
    }

    /// Creates a resolver over a snapshot of the process environment.
    ///
    /// Variables that are not valid UTF-8 or are oversized are skipped.
    pub fn from_process_env() -> Self {
        let mut entries = Vec::new();

        for (key, value) in env::vars_os() {
            let (Some(key), Some(value)) = (key.to_str(), value.to_str()) else {
                tracing::debug!("Skipping non UTF-8 environment variable {:?}", key);
                continue;
            };
            if key.len() > MAX_ENV_KEY_LEN || value.len() > MAX_ENV_VALUE_LEN {
                tracing::debug!(
                    "Skipping oversized environment variable: key_len={}, value_len={} (max key={}, max value={})",
                    key.len(),
                    value.len(),
                    MAX_ENV_KEY_LEN,
                    MAX_ENV_VALUE_LEN
                );
                continue;
            }
            entries.push((key.to_string(), value.to_string()));
        }

        tracing::debug!("Loaded {} environment variables", entries.len());

        Self {
            entries,
            coerce_typed: false,
        }
    }

    /// Sets whether integer and boolean descriptors are populated.
    pub fn coerce_typed(mut self, enabled: bool) -> Self {
        self.coerce_typed = enabled;
        self
    }

    /// Returns the value of the first entry named `key`.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

impl SourceResolver for EnvResolver {
    fn name(&self) -> &str {
        "env"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Env
    }

    fn resolve(&self, registry: &mut Registry) -> Result<usize> {
        let mut matched = 0;

        for arg in registry.iter_mut() {
            let Some(env_name) = arg.env_name() else {
                continue;
            };
            let Some(value) = self.lookup(env_name) else {
                continue;
            };

            if !self.coerce_typed && arg.kind() != ArgKind::String {
                tracing::debug!(
                    "{} is set but {} is of type {}, not populating from env",
                    env_name,
                    arg.long_name(),
                    arg.kind()
                );
                continue;
            }

            arg.set_from_str(value)?;
            arg.mark(Origin::from(self.kind()));
            matched += 1;

            tracing::debug!("Set source for {} to {}", arg.long_name(), self.kind());
        }

        Ok(matched)
    }
}
