// SPDX-License-Identifier: MIT OR Apache-2.0

//! Service layer: struct binding, resolution and serialization.
//!
//! `ArgService` is the entry point. It ties the binder, the orchestrator and the
//! serializer to a single owned registry.

pub mod arg_service;
pub mod binder;
pub mod orchestrator;
pub mod serializer;

// Re-export commonly used types
pub use arg_service::{ArgService, ArgServiceBuilder};
pub use binder::{ArgStruct, FieldKind, FieldSpec, FieldType, StructBinder};
pub use orchestrator::{Orchestrator, ResolutionReport};
