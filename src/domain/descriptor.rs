// SPDX-License-Identifier: MIT OR Apache-2.0

//! The argument descriptor: a named, typed binding and its metadata.
//!
//! A descriptor owns its value slot. Sources write through [`ArgDescriptor::assign`]
//! and callers read back through the typed accessors, so there is never a second
//! writable alias to the value.

use crate::domain::errors::{ArgError, Result};
use crate::domain::naming;
use crate::domain::{ArgKind, ArgOptions, ArgValue, IntRange, Origin};
use std::fmt;

/// A single named, typed argument binding.
///
/// # Examples
///
/// ```
/// use bindargs::domain::{ArgDescriptor, ArgValue, Origin};
///
/// let mut arg = ArgDescriptor::string("host").with_short("h");
/// assert!(arg.has_value());
/// assert_eq!(arg.origin(), Origin::Unresolved);
///
/// arg.assign(ArgValue::from("localhost")).unwrap();
/// assert_eq!(arg.as_str().unwrap(), "localhost");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArgDescriptor {
    kind: ArgKind,
    long_name: String,
    short_name: Option<String>,
    env_name: Option<String>,
    origin: Origin,
    required: bool,
    range: IntRange,
    slot: Option<ArgValue>,
}

impl ArgDescriptor {
    /// Creates a descriptor bound to a slot holding the kind's zero value.
    pub fn new(kind: ArgKind, long_name: impl Into<String>) -> Self {
        Self {
            slot: Some(ArgValue::zero(kind)),
            ..Self::unbound(kind, long_name)
        }
    }

    /// Creates a descriptor without a value slot.
    ///
    /// Reading or assigning its value fails with [`ArgError::UnboundSlot`].
    pub fn unbound(kind: ArgKind, long_name: impl Into<String>) -> Self {
        Self {
            kind,
            long_name: long_name.into(),
            short_name: None,
            env_name: None,
            origin: Origin::Unresolved,
            required: false,
            range: IntRange::FULL,
            slot: None,
        }
    }

    /// Creates a string descriptor.
    pub fn string(long_name: impl Into<String>) -> Self {
        Self::new(ArgKind::String, long_name)
    }

    /// Creates a boolean descriptor.
    pub fn bool(long_name: impl Into<String>) -> Self {
        Self::new(ArgKind::Bool, long_name)
    }

    /// Creates an integer descriptor.
    pub fn integer(long_name: impl Into<String>) -> Self {
        Self::new(ArgKind::Integer, long_name)
    }

    /// Sets the single-dash alias. An empty alias clears it.
    pub fn with_short(mut self, short_name: impl Into<String>) -> Self {
        let short_name = short_name.into();
        self.short_name = (!short_name.is_empty()).then_some(short_name);
        self
    }

    /// Sets the environment variable name explicitly.
    pub fn with_env_name(mut self, env_name: impl Into<String>) -> Self {
        self.env_name = Some(env_name.into());
        self
    }

    /// Marks the descriptor as required.
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Restricts the values an integer descriptor accepts.
    ///
    /// Every later write is checked against the bounds, so an out-of-range token
    /// fails while its source runs. Has no effect on other kinds.
    pub fn with_range(mut self, range: IntRange) -> Self {
        self.range = range;
        self
    }

    /// Binds a slot holding `value` as the initial value.
    ///
    /// The value's kind must match the descriptor's kind, and an integer must
    /// lie within the descriptor's range.
    pub fn with_default(mut self, value: impl Into<ArgValue>) -> Result<Self> {
        let value = value.into();
        self.check_value(&value)?;
        self.slot = Some(value);
        Ok(self)
    }

    /// Applies typed options on top of the current settings.
    pub fn with_options(mut self, options: ArgOptions) -> Self {
        if let Some(long_name) = options.long_name {
            self.long_name = long_name;
        }
        if let Some(short_name) = options.short_name {
            self = self.with_short(short_name);
        }
        if let Some(env_name) = options.env_name {
            self.env_name = Some(env_name);
        }
        if options.required {
            self.required = true;
        }
        self
    }

    /// Fills in the environment name from `prefix` unless one was set explicitly.
    pub fn derive_env_name(&mut self, prefix: &str) {
        if self.env_name.is_none() {
            self.env_name = Some(naming::env_name(prefix, &self.long_name));
        }
    }

    /// Returns the argument kind.
    pub fn kind(&self) -> ArgKind {
        self.kind
    }

    /// Returns the canonical long name.
    pub fn long_name(&self) -> &str {
        &self.long_name
    }

    /// Returns the single-dash alias, if any.
    pub fn short_name(&self) -> Option<&str> {
        self.short_name.as_deref()
    }

    /// Returns the environment variable name, if one has been derived or set.
    pub fn env_name(&self) -> Option<&str> {
        self.env_name.as_deref()
    }

    /// Returns the source that last set the value.
    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Returns true if resolution must fail when no source supplies a value.
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the bounds accepted by an integer descriptor.
    pub fn range(&self) -> IntRange {
        self.range
    }

    /// Returns true if a value slot is bound, regardless of its contents.
    pub fn has_value(&self) -> bool {
        self.slot.is_some()
    }

    /// Returns the current value.
    pub fn value(&self) -> Result<&ArgValue> {
        self.slot.as_ref().ok_or_else(|| ArgError::UnboundSlot {
            name: self.long_name.clone(),
        })
    }

    /// Returns the value of a string descriptor.
    pub fn as_str(&self) -> Result<&str> {
        match self.value()? {
            ArgValue::String(s) => Ok(s),
            _ => Err(self.mismatch(ArgKind::String)),
        }
    }

    /// Returns the value of a boolean descriptor.
    pub fn as_bool(&self) -> Result<bool> {
        match self.value()? {
            ArgValue::Bool(b) => Ok(*b),
            _ => Err(self.mismatch(ArgKind::Bool)),
        }
    }

    /// Returns the value of an integer descriptor.
    pub fn as_int(&self) -> Result<i64> {
        match self.value()? {
            ArgValue::Integer(i) => Ok(*i),
            _ => Err(self.mismatch(ArgKind::Integer)),
        }
    }

    /// Writes a new value into the bound slot.
    ///
    /// Does not touch the origin; sources stamp it separately. An integer outside
    /// the descriptor's range is rejected and the slot keeps its old value.
    pub fn assign(&mut self, value: ArgValue) -> Result<()> {
        self.check_value(&value)?;
        match self.slot.as_mut() {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(ArgError::UnboundSlot {
                name: self.long_name.clone(),
            }),
        }
    }

    /// Coerces `raw` to the descriptor's kind and assigns it.
    pub fn set_from_str(&mut self, raw: &str) -> Result<()> {
        let value = ArgValue::parse(self.kind, &self.long_name, raw)?;
        self.assign(value)
    }

    /// Stamps the origin of the current value.
    pub fn mark(&mut self, origin: Origin) {
        self.origin = origin;
    }

    /// Returns true if `token` is `--<long>` or `-<short>`.
    pub fn matches_flag(&self, token: &str) -> bool {
        if let Some(long) = token.strip_prefix("--") {
            return long == self.long_name;
        }
        match (token.strip_prefix('-'), self.short_name.as_deref()) {
            (Some(short), Some(expected)) => short == expected,
            _ => false,
        }
    }

    fn check_value(&self, value: &ArgValue) -> Result<()> {
        self.check_kind(value.kind())?;
        match value {
            ArgValue::Integer(i) if !self.range.contains(*i) => {
                Err(ArgError::out_of_range(&self.long_name, *i, self.range))
            }
            _ => Ok(()),
        }
    }

    fn check_kind(&self, found: ArgKind) -> Result<()> {
        if found == self.kind {
            Ok(())
        } else {
            Err(ArgError::KindMismatch {
                name: self.long_name.clone(),
                expected: self.kind,
                found,
            })
        }
    }

    fn mismatch(&self, requested: ArgKind) -> ArgError {
        ArgError::KindMismatch {
            name: self.long_name.clone(),
            expected: self.kind,
            found: requested,
        }
    }
}

impl fmt::Display for ArgDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Arg[type: {}, longName: {}, shortName: {}, source: {}, value: ",
            self.kind,
            self.long_name,
            self.short_name.as_deref().unwrap_or(""),
            self.origin
        )?;
        match &self.slot {
            Some(value) => write!(f, "{}]", value),
            None => f.write_str("<unbound>]"),
        }
    }
}
