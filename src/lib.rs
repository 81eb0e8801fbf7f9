// SPDX-License-Identifier: MIT OR Apache-2.0

//! Declarative argument binding from several ranked sources.
//!
//! Application code declares named, typed arguments (strings, integers,
//! booleans). The crate fills them from configuration files, environment
//! variables and command-line arguments in a configurable order, checks that
//! required arguments were supplied, and can render the result back into a
//! command line.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: argument descriptors, values, origins and the registry
//! - **Ports**: the `SourceResolver` trait every input source implements
//! - **Adapters**: the file, environment and command-line resolvers
//! - **Service**: struct binding, the resolution orchestrator, the serializer
//!   and `ArgService`, which ties them to one owned registry
//!
//! # Precedence
//!
//! Sources run from lowest to highest priority, `file -> env -> args` by
//! default. Every source overwrites what earlier ones set, so the last source in
//! the order that supplies a value wins and its kind is recorded as the
//! argument's origin.
//!
//! # Quick Start
//!
//! ```rust
//! use bindargs::prelude::*;
//!
//! arg_struct! {
//!     struct Args {
//!         host: String => "short:h,required",
//!         port: u16 => "short:p",
//!         debug: bool,
//!     }
//! }
//!
//! # fn main() -> Result<()> {
//! let mut service = ArgService::builder().with_env_prefix("MYAPP_").build()?;
//! service.bind::<Args>()?;
//! service.resolve(["--port", "8080", "--debug"], ["MYAPP_HOST=localhost"])?;
//!
//! let args: Args = service.extract()?;
//! assert_eq!(args.host, "localhost");
//! assert_eq!(args.port, 8080);
//! assert!(args.debug);
//! assert_eq!(service.to_command_line(), "--host localhost --port 8080 --debug");
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
mod macros;
pub mod ports;
pub mod service;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::adapters::{ArgsResolver, EnvResolver, FileResolver};
    pub use crate::arg_struct;
    pub use crate::domain::{
        ArgDescriptor, ArgError, ArgKind, ArgOptions, ArgValue, IntRange, Origin, Registry,
        Result, SourceKind,
    };
    pub use crate::ports::SourceResolver;
    pub use crate::service::{ArgService, ArgServiceBuilder, ArgStruct, ResolutionReport};
}
