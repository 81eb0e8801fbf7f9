// SPDX-License-Identifier: MIT OR Apache-2.0

//! Source resolver trait definition.
//!
//! This module defines the `SourceResolver` trait, the port every input source
//! implements. A resolver scans its own input and writes matching values into
//! the registry.

use crate::domain::{Registry, Result, SourceKind};

/// A trait for argument sources.
///
/// A resolver walks the registry and, for every descriptor its input supplies,
/// assigns the value and stamps the descriptor's origin with [`SourceResolver::kind`].
/// It overwrites whatever an earlier resolver wrote, so running resolvers in
/// sequence makes the last one win.
///
/// Finding nothing for a descriptor is not an error. Coercion failures are.
///
/// # Examples
///
/// ```rust
/// use bindargs::ports::SourceResolver;
/// use bindargs::domain::{Origin, Registry, Result, SourceKind};
///
/// struct Everything;
///
/// impl SourceResolver for Everything {
///     fn name(&self) -> &str {
///         "everything"
///     }
///
///     fn kind(&self) -> SourceKind {
///         SourceKind::File
///     }
///
///     fn resolve(&self, registry: &mut Registry) -> Result<usize> {
///         let mut matched = 0;
///         for arg in registry.iter_mut() {
///             arg.set_from_str("1")?;
///             arg.mark(Origin::from(self.kind()));
///             matched += 1;
///         }
///         Ok(matched)
///     }
/// }
/// ```
pub trait SourceResolver {
    /// Returns a short name for logging and error messages.
    fn name(&self) -> &str;

    /// Returns the source kind this resolver stands for.
    ///
    /// The orchestrator uses it to place the resolver in the source order and
    /// the resolver uses it to stamp origins.
    fn kind(&self) -> SourceKind;

    /// Resolves every descriptor this source can supply.
    ///
    /// Returns the number of descriptors that were set.
    fn resolve(&self, registry: &mut Registry) -> Result<usize>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ArgDescriptor, Origin};

    struct FixedSource {
        long_name: &'static str,
        value: &'static str,
    }

    impl SourceResolver for FixedSource {
        fn name(&self) -> &str {
            "fixed"
        }

        fn kind(&self) -> SourceKind {
            SourceKind::Env
        }

        fn resolve(&self, registry: &mut Registry) -> Result<usize> {
            match registry.lookup_mut(self.long_name) {
                Some(arg) => {
                    arg.set_from_str(self.value)?;
                    arg.mark(Origin::from(self.kind()));
                    Ok(1)
                }
                None => Ok(0),
            }
        }
    }

    #[test]
    fn test_resolver_sets_and_stamps() {
        let mut registry = Registry::new();
        registry.register(ArgDescriptor::string("host")).unwrap();

        let source = FixedSource {
            long_name: "host",
            value: "localhost",
        };
        assert_eq!(source.resolve(&mut registry).unwrap(), 1);

        let arg = registry.get("host").unwrap();
        assert_eq!(arg.as_str().unwrap(), "localhost");
        assert_eq!(arg.origin(), Origin::FromEnv);
    }

    #[test]
    fn test_resolver_no_match_is_ok() {
        let mut registry = Registry::new();
        let source = FixedSource {
            long_name: "host",
            value: "localhost",
        };
        assert_eq!(source.resolve(&mut registry).unwrap(), 0);
    }

    #[test]
    fn test_resolver_is_object_safe() {
        let source: Box<dyn SourceResolver> = Box::new(FixedSource {
            long_name: "host",
            value: "x",
        });
        assert_eq!(source.name(), "fixed");
    }
}
