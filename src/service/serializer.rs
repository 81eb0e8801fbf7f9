// SPDX-License-Identifier: MIT OR Apache-2.0

//! Renders bound values back into a command line.

use crate::domain::{ArgValue, Registry};
use std::borrow::Cow;

/// Renders the registry as an equivalent command line.
///
/// Arguments appear in declaration order as `--<long> <value>`. A `true`
/// boolean is just `--<long>`; `false` booleans, empty strings and unbound
/// arguments are left out. Values are read at call time.
///
/// String values that a POSIX shell would split or expand are wrapped in single
/// quotes, so the output can be pasted back into a shell.
///
/// # Examples
///
/// ```
/// use bindargs::domain::{ArgDescriptor, ArgValue, Registry};
/// use bindargs::service::serializer::to_command_line;
///
/// let mut registry = Registry::new();
/// registry.register(ArgDescriptor::string("host")).unwrap();
/// registry.register(ArgDescriptor::bool("debug")).unwrap();
/// assert_eq!(to_command_line(&registry), "");
///
/// registry.get_mut("host").unwrap().assign(ArgValue::from("localhost")).unwrap();
/// registry.get_mut("debug").unwrap().assign(ArgValue::Bool(true)).unwrap();
/// assert_eq!(to_command_line(&registry), "--host localhost --debug");
///
/// registry.get_mut("host").unwrap().assign(ArgValue::from("my host")).unwrap();
/// assert_eq!(to_command_line(&registry), "--host 'my host' --debug");
/// ```
pub fn to_command_line(registry: &Registry) -> String {
    let mut parts = Vec::new();

    for arg in registry {
        let Ok(value) = arg.value() else {
            continue;
        };
        match value {
            ArgValue::Bool(true) => parts.push(format!("--{}", arg.long_name())),
            ArgValue::Bool(false) => {}
            value if value.is_empty() => {}
            ArgValue::String(s) => parts.push(format!("--{} {}", arg.long_name(), quote(s))),
            value => parts.push(format!("--{} {}", arg.long_name(), value)),
        }
    }

    parts.join(" ")
}

fn quote(value: &str) -> Cow<'_, str> {
    let is_plain = value
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || "-_./:=@,+%".contains(c));
    if is_plain {
        Cow::Borrowed(value)
    } else {
        Cow::Owned(format!("'{}'", value.replace('\'', r"'\''")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ArgDescriptor, ArgKind};

    #[test]
    fn test_empty_registry() {
        assert_eq!(to_command_line(&Registry::new()), "");
    }

    #[test]
    fn test_declaration_order() {
        let mut registry = Registry::new();
        registry
            .register(ArgDescriptor::integer("port").with_default(1234i64).unwrap())
            .unwrap();
        registry
            .register(ArgDescriptor::string("host").with_default("localhost").unwrap())
            .unwrap();
        assert_eq!(to_command_line(&registry), "--port 1234 --host localhost");
    }

    #[test]
    fn test_integer_zero_is_emitted() {
        let mut registry = Registry::new();
        registry.register(ArgDescriptor::integer("port")).unwrap();
        assert_eq!(to_command_line(&registry), "--port 0");
    }

    #[test]
    fn test_values_quoted_for_shell() {
        let mut registry = Registry::new();
        registry
            .register(ArgDescriptor::string("host").with_default("my host").unwrap())
            .unwrap();
        registry
            .register(ArgDescriptor::string("user").with_default("o'neil").unwrap())
            .unwrap();
        registry
            .register(ArgDescriptor::string("url").with_default("http://a.b/c?d").unwrap())
            .unwrap();
        assert_eq!(
            to_command_line(&registry),
            r"--host 'my host' --user 'o'\''neil' --url 'http://a.b/c?d'"
        );
    }

    #[test]
    fn test_plain_values_unquoted() {
        assert_eq!(quote("db-1.example.org:5432"), "db-1.example.org:5432");
        assert_eq!(quote("-5"), "-5");
    }

    #[test]
    fn test_unbound_skipped() {
        let mut registry = Registry::new();
        registry
            .register(ArgDescriptor::unbound(ArgKind::Integer, "port"))
            .unwrap();
        registry
            .register(ArgDescriptor::bool("debug").with_default(true).unwrap())
            .unwrap();
        assert_eq!(to_command_line(&registry), "--debug");
    }

    #[test]
    fn test_reflects_live_values() {
        let mut registry = Registry::new();
        registry
            .register(ArgDescriptor::string("host").with_default("a").unwrap())
            .unwrap();
        let first = to_command_line(&registry);
        assert_eq!(first, to_command_line(&registry));

        registry
            .get_mut("host")
            .unwrap()
            .assign(ArgValue::from("b"))
            .unwrap();
        assert_eq!(to_command_line(&registry), "--host b");
    }
}
