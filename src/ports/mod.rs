// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ports layer containing trait definitions.
//!
//! The traits here define the interface between the resolution engine and the
//! input sources implemented in the adapters layer.

pub mod resolver;

pub use resolver::SourceResolver;
