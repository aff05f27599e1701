//! Application ports
//!
//! Registries through which providers contribute tag kinds and component
//! types without the application layer naming any implementation.

/// Compile-time registries of tag kinds and component types
pub mod registry;

pub use registry::*;
