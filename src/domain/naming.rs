// SPDX-License-Identifier: MIT OR Apache-2.0

//! Name derivation for long names and environment variable names.

use heck::ToKebabCase;

/// The environment prefix used when none is configured.
pub const DEFAULT_ENV_PREFIX: &str = "BINDARG_";

/// Derives a long name from a field identifier.
///
/// # Examples
///
/// ```
/// use bindargs::domain::naming::long_name_from_ident;
///
/// assert_eq!(long_name_from_ident("HostName"), "host-name");
/// assert_eq!(long_name_from_ident("max_conns"), "max-conns");
/// ```
pub fn long_name_from_ident(ident: &str) -> String {
    ident.to_kebab_case()
}

/// Computes `<prefix><UPPERCASED long name>`.
///
/// # Examples
///
/// ```
/// use bindargs::domain::naming::env_name;
///
/// assert_eq!(env_name("TEST_", "host"), "TEST_HOST");
/// ```
pub fn env_name(prefix: &str, long_name: &str) -> String {
    format!("{}{}", prefix, long_name.to_uppercase())
}
