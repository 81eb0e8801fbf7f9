// SPDX-License-Identifier: MIT OR Apache-2.0

//! Command-line argument source.
//!
//! This module provides a resolver that reads argument values from a token
//! sequence, conventionally the process arguments without the program name.

use crate::domain::{ArgError, ArgKind, ArgValue, Origin, Registry, Result, SourceKind};
use crate::ports::SourceResolver;

/// Resolver for command-line arguments.
///
/// For each descriptor the tokens are scanned left to right for one exactly
/// equal to `--<long>` or `-<short>`:
/// - a boolean descriptor is set to `true` and no token is consumed
/// - a string or integer descriptor takes the next token as its value, whatever
///   it looks like
///
/// Only the first match per descriptor counts. A bad integer or a value-taking
/// flag with nothing after it aborts resolution.
///
/// # Examples
///
/// ```rust
/// use bindargs::adapters::ArgsResolver;
/// use bindargs::domain::{ArgDescriptor, Registry};
/// use bindargs::ports::SourceResolver;
///
/// let mut registry = Registry::new();
/// registry.register(ArgDescriptor::string("host").with_short("h")).unwrap();
/// registry.register(ArgDescriptor::integer("port")).unwrap();
/// registry.register(ArgDescriptor::bool("debug")).unwrap();
///
/// let resolver = ArgsResolver::from_args(["-h", "localhost", "--debug", "--port", "2345"]);
/// assert_eq!(resolver.resolve(&mut registry).unwrap(), 3);
/// assert_eq!(registry.get("port").unwrap().as_int().unwrap(), 2345);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ArgsResolver {
    tokens: Vec<String>,
}

impl ArgsResolver {
    /// Creates a resolver over the given tokens.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a resolver over the process arguments, skipping the program name.
    ///
    /// Arguments that are not valid UTF-8 are converted lossily.
    pub fn from_process_args() -> Self {
        Self::from_args(
            std::env::args_os()
                .skip(1)
                .map(|arg| arg.to_string_lossy().into_owned()),
        )
    }

    /// Returns the tokens this resolver scans.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl SourceResolver for ArgsResolver {
    fn name(&self) -> &str {
        "args"
    }

    fn kind(&self) -> SourceKind {
        SourceKind::Args
    }

    fn resolve(&self, registry: &mut Registry) -> Result<usize> {
        let mut matched = 0;

        for arg in registry.iter_mut() {
            tracing::trace!(
                "searching for arg: {} ({})",
                arg.long_name(),
                arg.short_name().unwrap_or("")
            );

            let mut tokens = self.tokens.iter();
            while let Some(token) = tokens.next() {
                if !arg.matches_flag(token) {
                    continue;
                }

                match arg.kind() {
                    ArgKind::Bool => arg.assign(ArgValue::Bool(true))?,
                    ArgKind::String | ArgKind::Integer => {
                        let value = tokens.next().ok_or_else(|| ArgError::MissingValue {
                            flag: token.clone(),
                        })?;
                        arg.set_from_str(value)?;
                    }
                }

                arg.mark(Origin::from(self.kind()));
                matched += 1;
                tracing::trace!("  -> {}", arg);
                break;
            }
        }

        tracing::debug!("args source matched {} of {} args", matched, registry.len());
        Ok(matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ArgDescriptor;

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry
            .register(ArgDescriptor::string("host").with_short("h"))
            .unwrap();
        registry
            .register(ArgDescriptor::integer("port").with_short("p"))
            .unwrap();
        registry.register(ArgDescriptor::bool("debug")).unwrap();
        registry
    }

    #[test]
    fn test_args_resolver_identity() {
        let resolver = ArgsResolver::default();
        assert_eq!(resolver.name(), "args");
        assert_eq!(resolver.kind(), SourceKind::Args);
        assert!(resolver.tokens().is_empty());
    }

    #[test]
    fn test_args_resolver_long_form() {
        let mut registry = registry();
        let resolver = ArgsResolver::from_args(["--host", "localhost"]);
        assert_eq!(resolver.resolve(&mut registry).unwrap(), 1);

        let host = registry.get("host").unwrap();
        assert_eq!(host.as_str().unwrap(), "localhost");
        assert_eq!(host.origin(), Origin::FromArgs);
    }

    #[test]
    fn test_args_resolver_short_form_equivalent() {
        let mut long = registry();
        let mut short = registry();
        ArgsResolver::from_args(["--host", "localhost"])
            .resolve(&mut long)
            .unwrap();
        ArgsResolver::from_args(["-h", "localhost"])
            .resolve(&mut short)
            .unwrap();
        assert_eq!(long.get("host").unwrap(), short.get("host").unwrap());
    }

    #[test]
    fn test_args_resolver_bool_consumes_nothing() {
        let mut registry = registry();
        let resolver = ArgsResolver::from_args(["--debug", "--host", "localhost"]);
        assert_eq!(resolver.resolve(&mut registry).unwrap(), 2);
        assert!(registry.get("debug").unwrap().as_bool().unwrap());
        assert_eq!(registry.get("host").unwrap().as_str().unwrap(), "localhost");
    }

    #[test]
    fn test_args_resolver_bool_absent() {
        let mut registry = registry();
        ArgsResolver::from_args(["--host", "x"])
            .resolve(&mut registry)
            .unwrap();
        let debug = registry.get("debug").unwrap();
        assert!(!debug.as_bool().unwrap());
        assert_eq!(debug.origin(), Origin::Unresolved);
    }

    #[test]
    fn test_args_resolver_integer() {
        let mut registry = registry();
        ArgsResolver::from_args(["-p", "2345"])
            .resolve(&mut registry)
            .unwrap();
        assert_eq!(registry.get("port").unwrap().as_int().unwrap(), 2345);
    }

    #[test]
    fn test_args_resolver_integer_failure() {
        let mut registry = registry();
        let err = ArgsResolver::from_args(["--port", "notanumber"])
            .resolve(&mut registry)
            .unwrap_err();
        assert!(matches!(err, ArgError::TypeConversion { ref name, .. } if name == "port"));
    }

    #[test]
    fn test_args_resolver_first_match_only() {
        let mut registry = registry();
        ArgsResolver::from_args(["--host", "first", "-h", "second"])
            .resolve(&mut registry)
            .unwrap();
        assert_eq!(registry.get("host").unwrap().as_str().unwrap(), "first");
    }

    #[test]
    fn test_args_resolver_value_may_look_like_flag() {
        let mut registry = registry();
        ArgsResolver::from_args(["--host", "--debug"])
            .resolve(&mut registry)
            .unwrap();
        assert_eq!(registry.get("host").unwrap().as_str().unwrap(), "--debug");
        // each descriptor scans independently, so --debug still counts as a flag
        assert!(registry.get("debug").unwrap().as_bool().unwrap());
    }

    #[test]
    fn test_args_resolver_missing_value() {
        let mut registry = registry();
        let err = ArgsResolver::from_args(["--host"])
            .resolve(&mut registry)
            .unwrap_err();
        assert!(matches!(err, ArgError::MissingValue { ref flag } if flag == "--host"));
    }

    #[test]
    fn test_args_resolver_ignores_unknown_and_positional() {
        let mut registry = registry();
        let resolver = ArgsResolver::from_args(["serve", "--verbose", "--host=x", "-x"]);
        assert_eq!(resolver.resolve(&mut registry).unwrap(), 0);
    }

    #[test]
    fn test_args_resolver_no_short_alias() {
        let mut registry = registry();
        ArgsResolver::from_args(["-d"])
            .resolve(&mut registry)
            .unwrap();
        assert!(!registry.get("debug").unwrap().as_bool().unwrap());
    }
}
