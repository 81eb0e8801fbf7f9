// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered collection of argument descriptors with a name index.

use crate::domain::errors::{ArgError, Result};
use crate::domain::ArgDescriptor;
use std::collections::HashMap;

/// The set of declared arguments.
///
/// Insertion order is declaration order and drives serialization. Long names
/// and non-empty short names are unique; registering a clash is rejected.
///
/// # Examples
///
/// ```
/// use bindargs::domain::{ArgDescriptor, Registry};
///
/// let mut registry = Registry::new();
/// registry.register(ArgDescriptor::string("host").with_short("h")).unwrap();
/// registry.register(ArgDescriptor::integer("port")).unwrap();
///
/// assert_eq!(registry.names(), vec!["host", "port"]);
/// assert!(registry.lookup("host").is_some());
/// assert!(registry.register(ArgDescriptor::bool("host")).is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registry {
    args: Vec<ArgDescriptor>,
    by_long_name: HashMap<String, usize>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a descriptor and indexes it by long name.
    pub fn register(&mut self, descriptor: ArgDescriptor) -> Result<()> {
        if self.by_long_name.contains_key(descriptor.long_name()) {
            return Err(ArgError::DuplicateArgument {
                name: descriptor.long_name().to_string(),
            });
        }
        if let Some(short) = descriptor.short_name() {
            if self.lookup_short(short).is_some() {
                return Err(ArgError::DuplicateArgument {
                    name: short.to_string(),
                });
            }
        }

        tracing::debug!("registering {}", descriptor);

        self.by_long_name
            .insert(descriptor.long_name().to_string(), self.args.len());
        self.args.push(descriptor);
        Ok(())
    }

    /// Finds a descriptor by long name.
    pub fn lookup(&self, long_name: &str) -> Option<&ArgDescriptor> {
        self.by_long_name.get(long_name).map(|&i| &self.args[i])
    }

    /// Finds a descriptor by long name for modification.
    pub fn lookup_mut(&mut self, long_name: &str) -> Option<&mut ArgDescriptor> {
        match self.by_long_name.get(long_name) {
            Some(&i) => self.args.get_mut(i),
            None => None,
        }
    }

    /// Finds a descriptor by short alias.
    pub fn lookup_short(&self, short_name: &str) -> Option<&ArgDescriptor> {
        self.args
            .iter()
            .find(|arg| arg.short_name() == Some(short_name))
    }

    /// Like [`Registry::lookup`], but a missing name is an error.
    pub fn get(&self, long_name: &str) -> Result<&ArgDescriptor> {
        self.lookup(long_name)
            .ok_or_else(|| ArgError::ArgumentNotFound {
                name: long_name.to_string(),
            })
    }

    /// Like [`Registry::lookup_mut`], but a missing name is an error.
    pub fn get_mut(&mut self, long_name: &str) -> Result<&mut ArgDescriptor> {
        self.lookup_mut(long_name)
            .ok_or_else(|| ArgError::ArgumentNotFound {
                name: long_name.to_string(),
            })
    }

    /// Iterates descriptors in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, ArgDescriptor> {
        self.args.iter()
    }

    /// Iterates descriptors mutably in declaration order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, ArgDescriptor> {
        self.args.iter_mut()
    }

    /// Returns the long names in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.args.iter().map(|arg| arg.long_name()).collect()
    }

    /// Number of registered descriptors.
    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a ArgDescriptor;
    type IntoIter = std::slice::Iter<'a, ArgDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
