// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runs resolvers in source order and enforces required arguments.

use crate::domain::{ArgError, Origin, Registry, Result, SourceKind};
use crate::ports::SourceResolver;

/// How many descriptors each source set, in the order the sources ran.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolutionReport {
    steps: Vec<(SourceKind, usize)>,
}

impl ResolutionReport {
    /// Returns `(source, matches)` pairs in run order.
    pub fn steps(&self) -> &[(SourceKind, usize)] {
        &self.steps
    }

    /// Total matches reported by `kind` across the run.
    pub fn matched(&self, kind: SourceKind) -> usize {
        self.steps
            .iter()
            .filter(|(k, _)| *k == kind)
            .map(|(_, n)| n)
            .sum()
    }

    /// Total matches across all sources.
    pub fn total(&self) -> usize {
        self.steps.iter().map(|(_, n)| n).sum()
    }
}

/// Applies sources from lowest to highest priority.
///
/// Every source in the order runs against the whole registry and may overwrite
/// what an earlier one set, so the last listed source wins. Required arguments
/// are checked once, after every source has run.
///
/// Sources write into a staged copy of the registry. The copy replaces the
/// caller's registry only when the whole run succeeds, so a failed run leaves
/// values and origins exactly as they were.
///
/// # Examples
///
/// ```
/// use bindargs::adapters::{ArgsResolver, EnvResolver};
/// use bindargs::domain::{ArgDescriptor, Origin, Registry, SourceKind};
/// use bindargs::service::Orchestrator;
///
/// let mut registry = Registry::new();
/// let mut host = ArgDescriptor::string("host").with_short("h");
/// host.derive_env_name("TEST_");
/// registry.register(host).unwrap();
///
/// let env = EnvResolver::from_pairs(["TEST_HOST=hostfromenv"]);
/// let args = ArgsResolver::from_args(["-h", "hostfromargs"]);
///
/// Orchestrator::new([SourceKind::Args, SourceKind::Env])
///     .run(&mut registry, &[&env, &args])
///     .unwrap();
///
/// let host = registry.get("host").unwrap();
/// assert_eq!(host.as_str().unwrap(), "hostfromenv");
/// assert_eq!(host.origin(), Origin::FromEnv);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Orchestrator {
    order: Vec<SourceKind>,
}

impl Orchestrator {
    /// Creates an orchestrator with the given source order, lowest priority first.
    pub fn new(order: impl Into<Vec<SourceKind>>) -> Self {
        Self {
            order: order.into(),
        }
    }

    /// Returns the source order.
    pub fn order(&self) -> &[SourceKind] {
        &self.order
    }

    /// Runs each resolver whose kind is listed, in order, then checks required
    /// arguments.
    ///
    /// A listed kind with no matching resolver is skipped. The first resolver
    /// error aborts the run and `registry` is left untouched.
    pub fn run(
        &self,
        registry: &mut Registry,
        resolvers: &[&dyn SourceResolver],
    ) -> Result<ResolutionReport> {
        let mut staged = registry.clone();
        let report = self.run_staged(&mut staged, resolvers)?;
        *registry = staged;
        Ok(report)
    }

    fn run_staged(
        &self,
        registry: &mut Registry,
        resolvers: &[&dyn SourceResolver],
    ) -> Result<ResolutionReport> {
        let mut report = ResolutionReport::default();

        for kind in &self.order {
            let mut ran = false;
            for resolver in resolvers.iter().filter(|r| r.kind() == *kind) {
                tracing::debug!("resolving from source '{}'", resolver.name());
                let matched = resolver.resolve(registry)?;
                report.steps.push((*kind, matched));
                ran = true;
            }
            if !ran {
                tracing::debug!("no resolver configured for source '{}'", kind);
            }
        }

        Self::check_required(registry)?;

        tracing::debug!(
            "resolution finished: {} values set across {} sources",
            report.total(),
            report.steps.len()
        );
        Ok(report)
    }

    /// Fails on the first required argument that no source supplied.
    pub fn check_required(registry: &Registry) -> Result<()> {
        match registry
            .iter()
            .find(|arg| arg.is_required() && arg.origin() == Origin::Unresolved)
        {
            Some(arg) => Err(ArgError::MissingRequired {
                name: arg.long_name().to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new(SourceKind::DEFAULT_ORDER)
    }
}
