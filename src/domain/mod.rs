// SPDX-License-Identifier: MIT OR Apache-2.0

//! Domain layer containing the core argument types.
//!
//! This module is independent of any input source. It defines what an argument
//! is, how values are coerced, and how declared arguments are indexed.

pub mod arg_value;
pub mod descriptor;
pub mod errors;
pub mod naming;
pub mod options;
pub mod origin;
pub mod registry;

// Re-export commonly used types
pub use arg_value::{ArgKind, ArgValue, IntRange};
pub use descriptor::ArgDescriptor;
pub use errors::{ArgError, Result};
pub use options::ArgOptions;
pub use origin::{Origin, SourceKind};
pub use registry::Registry;
