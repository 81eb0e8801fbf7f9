// SPDX-License-Identifier: MIT OR Apache-2.0

//! The argument service: one self-contained binding context.
//!
//! An `ArgService` owns the registry together with the settings that shape
//! resolution (environment prefix, source order). Independent services do not
//! share any state, and starting over means building a new one.

use crate::adapters::{ArgsResolver, EnvResolver, FileResolver};
use crate::domain::naming::DEFAULT_ENV_PREFIX;
use crate::domain::{ArgDescriptor, ArgValue, Registry, Result, SourceKind};
use crate::ports::SourceResolver;
use crate::service::binder::{ArgStruct, StructBinder};
use crate::service::orchestrator::{Orchestrator, ResolutionReport};
use crate::service::serializer;
use std::fmt;

/// Declares, resolves and renders a set of arguments.
///
/// # Examples
///
/// ```rust
/// use bindargs::prelude::*;
///
/// # fn main() -> Result<()> {
/// let mut service = ArgService::builder()
///     .with_env_prefix("TEST_")
///     .build()?;
///
/// service.register(ArgDescriptor::string("host").with_short("h"))?;
/// service.register(ArgDescriptor::integer("port"))?;
///
/// service.resolve(["-h", "localhost"], ["TEST_USER=someone"])?;
///
/// assert_eq!(service.get("host")?.as_str()?, "localhost");
/// assert_eq!(service.to_command_line(), "--host localhost --port 0");
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ArgService {
    registry: Registry,
    env_prefix: String,
    orchestrator: Orchestrator,
    coerce_env_values: bool,
}

impl ArgService {
    /// Creates a service with the default prefix and source order.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
            orchestrator: Orchestrator::default(),
            coerce_env_values: false,
        }
    }

    /// Creates a new service builder.
    pub fn builder() -> ArgServiceBuilder {
        ArgServiceBuilder::new()
    }

    /// Returns the environment prefix.
    pub fn env_prefix(&self) -> &str {
        &self.env_prefix
    }

    /// Returns the source order, lowest priority first.
    pub fn source_order(&self) -> &[SourceKind] {
        self.orchestrator.order()
    }

    /// Returns the registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Registers a descriptor, deriving its environment name from the prefix
    /// unless one was set.
    pub fn register(&mut self, mut descriptor: ArgDescriptor) -> Result<()> {
        descriptor.derive_env_name(&self.env_prefix);
        self.registry.register(descriptor)
    }

    /// Returns a binder that registers into this service.
    pub fn binder(&mut self) -> StructBinder<'_> {
        StructBinder::new(&mut self.registry, &self.env_prefix)
    }

    /// Registers every supported field of `T`. Returns the number bound.
    pub fn bind<T: ArgStruct>(&mut self) -> Result<usize> {
        self.binder().bind::<T>()
    }

    /// Builds a `T` from the current values.
    pub fn extract<T: ArgStruct>(&self) -> Result<T> {
        T::from_registry(&self.registry)
    }

    /// Resolves from the given argument tokens and `KEY=VALUE` environment entries.
    pub fn resolve<A, S, E, V>(&mut self, args: A, envs: E) -> Result<ResolutionReport>
    where
        A: IntoIterator<Item = S>,
        S: Into<String>,
        E: IntoIterator<Item = V>,
        V: AsRef<str>,
    {
        let args = ArgsResolver::from_args(args);
        let env = EnvResolver::from_pairs(envs).coerce_typed(self.coerce_env_values);
        self.resolve_with(&[&FileResolver, &env, &args])
    }

    /// Resolves from the process arguments and environment.
    pub fn resolve_from_process(&mut self) -> Result<ResolutionReport> {
        let args = ArgsResolver::from_process_args();
        let env = EnvResolver::from_process_env().coerce_typed(self.coerce_env_values);
        self.resolve_with(&[&FileResolver, &env, &args])
    }

    /// Resolves with caller-supplied resolvers, run in this service's source order.
    ///
    /// On error no value or origin changes, so the service can be resolved again.
    pub fn resolve_with(&mut self, resolvers: &[&dyn SourceResolver]) -> Result<ResolutionReport> {
        self.orchestrator.run(&mut self.registry, resolvers)
    }

    /// Returns the descriptor for `long_name`.
    pub fn get(&self, long_name: &str) -> Result<&ArgDescriptor> {
        self.registry.get(long_name)
    }

    /// Returns the current value of `long_name`.
    pub fn value(&self, long_name: &str) -> Result<&ArgValue> {
        self.registry.get(long_name)?.value()
    }

    /// Overwrites the value of `long_name`. The origin is left as it was.
    pub fn set(&mut self, long_name: &str, value: impl Into<ArgValue>) -> Result<()> {
        self.registry.get_mut(long_name)?.assign(value.into())
    }

    /// Renders the current values as a command line.
    pub fn to_command_line(&self) -> String {
        serializer::to_command_line(&self.registry)
    }
}

impl Default for ArgService {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ArgService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_command_line())
    }
}

/// Builder for constructing an `ArgService`.
///
/// # Examples
///
/// ```rust
/// use bindargs::domain::SourceKind;
/// use bindargs::service::ArgServiceBuilder;
///
/// # fn main() -> bindargs::domain::Result<()> {
/// let service = ArgServiceBuilder::new()
///     .with_env_prefix("MYAPP_")
///     .with_source_order([SourceKind::Env, SourceKind::Args])
///     .build()?;
/// assert_eq!(service.env_prefix(), "MYAPP_");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ArgServiceBuilder {
    env_prefix: String,
    source_order: Vec<SourceKind>,
    coerce_env_values: bool,
    args: Vec<ArgDescriptor>,
}

impl ArgServiceBuilder {
    /// Creates a builder with the default prefix and source order.
    pub fn new() -> Self {
        Self {
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
            source_order: SourceKind::DEFAULT_ORDER.to_vec(),
            coerce_env_values: false,
            args: Vec::new(),
        }
    }

    /// Sets the prefix used to derive environment names.
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Sets the source order, lowest priority first.
    pub fn with_source_order(mut self, order: impl Into<Vec<SourceKind>>) -> Self {
        self.source_order = order.into();
        self
    }

    /// Populates integer and boolean arguments from the environment as well.
    pub fn coerce_env_values(mut self, enabled: bool) -> Self {
        self.coerce_env_values = enabled;
        self
    }

    /// Adds an argument to register on build.
    pub fn with_arg(mut self, descriptor: ArgDescriptor) -> Self {
        self.args.push(descriptor);
        self
    }

    /// Builds the service, registering any arguments added to the builder.
    pub fn build(self) -> Result<ArgService> {
        let mut service = ArgService {
            registry: Registry::new(),
            env_prefix: self.env_prefix,
            orchestrator: Orchestrator::new(self.source_order),
            coerce_env_values: self.coerce_env_values,
        };

        for descriptor in self.args {
            service.register(descriptor)?;
        }

        Ok(service)
    }
}

impl Default for ArgServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
