// SPDX-License-Identifier: MIT OR Apache-2.0

//! Per-argument options and the tag mini-language that produces them.
//!
//! A tag is a comma-separated list of tokens, each either a bare keyword or a
//! `key:value` pair:
//!
//! - `long:<name>` overrides the long name
//! - `short:<name>` sets the short alias
//! - `env:<NAME>` sets the environment variable name explicitly
//! - `required` marks the argument as required
//!
//! Unknown tokens are ignored.

use std::str::FromStr;

/// Typed overrides applied to an argument when it is declared.
///
/// # Examples
///
/// ```
/// use bindargs::domain::ArgOptions;
///
/// let opts = ArgOptions::parse_tag("long:host,short:h,required");
/// assert_eq!(opts.long_name.as_deref(), Some("host"));
/// assert_eq!(opts.short_name.as_deref(), Some("h"));
/// assert!(opts.required);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArgOptions {
    /// Replaces the long name derived from the field identifier
    pub long_name: Option<String>,
    /// Single-dash alias
    pub short_name: Option<String>,
    /// Explicit environment variable name, bypassing the prefix
    pub env_name: Option<String>,
    /// Fail resolution if no source supplies a value
    pub required: bool,
}

impl ArgOptions {
    /// Creates empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the long name override.
    pub fn long(mut self, name: impl Into<String>) -> Self {
        self.long_name = Some(name.into());
        self
    }

    /// Sets the short alias.
    pub fn short(mut self, name: impl Into<String>) -> Self {
        self.short_name = Some(name.into());
        self
    }

    /// Sets an explicit environment variable name.
    pub fn env(mut self, name: impl Into<String>) -> Self {
        self.env_name = Some(name.into());
        self
    }

    /// Marks the argument as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Parses a tag string into options.
    pub fn parse_tag(tag: &str) -> Self {
        let mut opts = Self::default();

        for token in tag.split(',') {
            let token = token.trim();
            let (key, value) = match token.split_once(':') {
                Some((key, value)) => (key, Some(value)),
                None => (token, None),
            };
            if key.is_empty() {
                continue;
            }

            tracing::trace!("tag token: key={:?} value={:?}", key, value);

            match (key, value) {
                ("required", _) => opts.required = true,
                ("long", Some(v)) if !v.is_empty() => opts.long_name = Some(v.to_string()),
                ("short", Some(v)) if !v.is_empty() => opts.short_name = Some(v.to_string()),
                ("env", Some(v)) if !v.is_empty() => opts.env_name = Some(v.to_string()),
                _ => tracing::debug!("ignoring unrecognised tag token '{}'", token),
            }
        }

        opts
    }
}

impl FromStr for ArgOptions {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_tag(s))
    }
}

impl From<&str> for ArgOptions {
    fn from(tag: &str) -> Self {
        Self::parse_tag(tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tag() {
        assert_eq!(ArgOptions::parse_tag(""), ArgOptions::default());
    }

    #[test]
    fn test_long_and_short() {
        let opts = ArgOptions::parse_tag("long:host,short:h");
        assert_eq!(opts.long_name.as_deref(), Some("host"));
        assert_eq!(opts.short_name.as_deref(), Some("h"));
        assert!(!opts.required);
    }

    #[test]
    fn test_required_bare_flag() {
        let opts = ArgOptions::parse_tag("short:p,required");
        assert!(opts.required);
        assert_eq!(opts.short_name.as_deref(), Some("p"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let opts = ArgOptions::parse_tag("color:blue,verbose,short:v");
        assert_eq!(opts, ArgOptions::new().short("v"));
    }

    #[test]
    fn test_key_without_value_ignored() {
        let opts = ArgOptions::parse_tag("long,short:");
        assert_eq!(opts, ArgOptions::default());
    }

    #[test]
    fn test_value_may_contain_colon() {
        let opts = ArgOptions::parse_tag("long:a:b");
        assert_eq!(opts.long_name.as_deref(), Some("a:b"));
    }

    #[test]
    fn test_env_override() {
        let opts = ArgOptions::parse_tag("env:DATABASE_URL");
        assert_eq!(opts.env_name.as_deref(), Some("DATABASE_URL"));
    }

    #[test]
    fn test_whitespace_and_empty_tokens() {
        let opts: ArgOptions = " short:h , ,required".parse().unwrap();
        assert_eq!(opts, ArgOptions::new().short("h").required());
    }
}
