//! Domain Port Interfaces
//!
//! Boundary contracts between the resolution engine and the layers around it.
//!
//! ## Organization
//!
//! - **introspection** - where tags come from (declarations and tag kind definitions)
//! - **components** - what the engine builds (validators, formatters)

/// Component interfaces produced by factories
pub mod components;
/// Metadata introspection boundary
pub mod introspection;

pub use components::{Formatter, Validator};
pub use introspection::{DirectOnlyIntrospector, MetadataIntrospector};
