// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing the input source implementations.
//!
//! Each adapter implements the `SourceResolver` trait from the ports layer for
//! one input channel.

pub mod cli;
pub mod env_var;
pub mod file;

pub use cli::ArgsResolver;
pub use env_var::EnvResolver;
pub use file::FileResolver;
