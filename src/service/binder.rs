// SPDX-License-Identifier: MIT OR Apache-2.0

//! Struct binding.
//!
//! A configuration struct describes its fields through [`ArgStruct`], usually
//! generated by the [`arg_struct!`](crate::arg_struct) macro. The [`StructBinder`]
//! turns each supported field into a registered descriptor and skips the rest.

use crate::domain::naming;
use crate::domain::{
    ArgDescriptor, ArgError, ArgKind, ArgOptions, ArgValue, IntRange, Registry, Result,
};

/// What a struct field maps to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// A field that binds to an argument of this kind
    Scalar(ArgKind),
    /// An integer field; values outside the bounds are rejected during resolution
    Integer(IntRange),
    /// A field that is not bound; carries the type name for diagnostics
    Unsupported(&'static str),
}

/// A Rust type that can appear as a field of an [`ArgStruct`].
///
/// `String`, `bool` and the common integer types bind to arguments. A few other
/// types are accepted but never bound, so a struct can carry fields used for
/// other purposes; they keep their `Default` value.
pub trait FieldType: Default + Sized {
    /// Returns how the field is bound.
    fn field_kind() -> FieldKind;

    /// Converts a resolved value back to the field type.
    fn extract(name: &str, value: &ArgValue) -> Result<Self>;
}

fn kind_mismatch(name: &str, expected: ArgKind, value: &ArgValue) -> ArgError {
    ArgError::KindMismatch {
        name: name.to_string(),
        expected,
        found: value.kind(),
    }
}

impl FieldType for String {
    fn field_kind() -> FieldKind {
        FieldKind::Scalar(ArgKind::String)
    }

    fn extract(name: &str, value: &ArgValue) -> Result<Self> {
        match value {
            ArgValue::String(s) => Ok(s.clone()),
            other => Err(kind_mismatch(name, ArgKind::String, other)),
        }
    }
}

impl FieldType for bool {
    fn field_kind() -> FieldKind {
        FieldKind::Scalar(ArgKind::Bool)
    }

    fn extract(name: &str, value: &ArgValue) -> Result<Self> {
        match value {
            ArgValue::Bool(b) => Ok(*b),
            other => Err(kind_mismatch(name, ArgKind::Bool, other)),
        }
    }
}

macro_rules! integer_field {
    ($($ty:ty),*) => {
        $(
            impl FieldType for $ty {
                fn field_kind() -> FieldKind {
                    FieldKind::Integer(IntRange::new(
                        i64::try_from(<$ty>::MIN).unwrap_or(i64::MIN),
                        i64::try_from(<$ty>::MAX).unwrap_or(i64::MAX),
                    ))
                }

                fn extract(name: &str, value: &ArgValue) -> Result<Self> {
                    match value {
                        ArgValue::Integer(i) => <$ty>::try_from(*i).map_err(|e| {
                            ArgError::TypeConversion {
                                name: name.to_string(),
                                raw: i.to_string(),
                                target: ArgKind::Integer,
                                source: Box::new(e),
                            }
                        }),
                        other => Err(kind_mismatch(name, ArgKind::Integer, other)),
                    }
                }
            }
        )*
    };
}

integer_field!(i64, i32, u16, u32, u64, usize);

macro_rules! unsupported_field {
    ($($ty:ty),*) => {
        $(
            impl FieldType for $ty {
                fn field_kind() -> FieldKind {
                    FieldKind::Unsupported(stringify!($ty))
                }

                fn extract(_name: &str, _value: &ArgValue) -> Result<Self> {
                    Ok(Self::default())
                }
            }
        )*
    };
}

unsupported_field!(f64, Vec<String>, Option<String>);

/// One declared field of a configuration struct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldSpec {
    /// The field identifier as written in the struct
    pub ident: &'static str,
    /// How the field is bound
    pub kind: FieldKind,
    /// Tag string, see [`ArgOptions::parse_tag`]
    pub tag: &'static str,
}

impl FieldSpec {
    /// Declares a field of type `T`.
    pub fn of<T: FieldType>(ident: &'static str, tag: &'static str) -> Self {
        Self {
            ident,
            kind: T::field_kind(),
            tag,
        }
    }

    /// Parses the field's tag.
    pub fn options(&self) -> ArgOptions {
        ArgOptions::parse_tag(self.tag)
    }

    /// The long name the field registers under: the `long:` tag or the
    /// kebab-cased identifier.
    pub fn long_name(&self) -> String {
        self.options()
            .long_name
            .unwrap_or_else(|| naming::long_name_from_ident(self.ident))
    }
}

/// A struct whose fields can be bound as arguments.
///
/// Implement it with the [`arg_struct!`](crate::arg_struct) macro rather than by hand.
pub trait ArgStruct: Sized {
    /// Returns the fields in declaration order.
    fn fields() -> Vec<FieldSpec>;

    /// Builds the struct from resolved values.
    fn from_registry(registry: &Registry) -> Result<Self>;
}

/// Reads one field back out of a registry.
///
/// Unsupported fields get their default value.
pub fn extract_field<T: FieldType>(registry: &Registry, spec: &FieldSpec) -> Result<T> {
    match spec.kind {
        FieldKind::Unsupported(_) => Ok(T::default()),
        FieldKind::Scalar(_) | FieldKind::Integer(_) => {
            let long_name = spec.long_name();
            let value = registry.get(&long_name)?.value()?;
            T::extract(&long_name, value)
        }
    }
}

/// Registers struct fields as descriptors.
///
/// # Examples
///
/// ```
/// use bindargs::domain::{ArgKind, Registry};
/// use bindargs::service::{FieldKind, StructBinder};
///
/// let mut registry = Registry::new();
/// let mut binder = StructBinder::new(&mut registry, "APP_");
/// binder.field("HostName", FieldKind::Scalar(ArgKind::String), "short:h").unwrap();
/// binder.field("Weights", FieldKind::Unsupported("Vec<f64>"), "").unwrap();
///
/// let host = registry.get("host-name").unwrap();
/// assert_eq!(host.env_name(), Some("APP_HOST-NAME"));
/// assert_eq!(registry.len(), 1);
/// ```
pub struct StructBinder<'a> {
    registry: &'a mut Registry,
    env_prefix: &'a str,
}

impl<'a> StructBinder<'a> {
    /// Creates a binder writing into `registry` with the given environment prefix.
    pub fn new(registry: &'a mut Registry, env_prefix: &'a str) -> Self {
        Self {
            registry,
            env_prefix,
        }
    }

    /// Binds one field.
    ///
    /// Returns `Ok(false)` if the field's type is unsupported and was skipped.
    pub fn field(&mut self, ident: &str, kind: FieldKind, tag: &str) -> Result<bool> {
        let (arg_kind, range) = match kind {
            FieldKind::Scalar(arg_kind) => (arg_kind, IntRange::FULL),
            FieldKind::Integer(range) => (ArgKind::Integer, range),
            FieldKind::Unsupported(type_name) => {
                tracing::debug!("unknown type for field {}: {}, skipping", ident, type_name);
                return Ok(false);
            }
        };

        let mut descriptor =
            ArgDescriptor::new(arg_kind, naming::long_name_from_ident(ident))
                .with_range(range)
                .with_options(ArgOptions::parse_tag(tag));
        descriptor.derive_env_name(self.env_prefix);

        self.registry.register(descriptor)?;
        Ok(true)
    }

    /// Binds every field of a declared struct, in declaration order.
    ///
    /// Returns the number of fields bound.
    pub fn bind_fields(&mut self, fields: &[FieldSpec]) -> Result<usize> {
        let mut bound = 0;
        for spec in fields {
            if self.field(spec.ident, spec.kind, spec.tag)? {
                bound += 1;
            }
        }
        Ok(bound)
    }

    /// Binds every field of `T`.
    pub fn bind<T: ArgStruct>(&mut self) -> Result<usize> {
        self.bind_fields(&T::fields())
    }
}
