//! Application Layer - Decor
//!
//! The resolution engine proper: everything here is pure computation over
//! the metadata exposed by a [`MetadataIntrospector`](decor_domain::ports::MetadataIntrospector).
//!
//! ## Domain Services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`DecorationGraph`] | Direct tags of declarations, meta tags of tags |
//! | [`DomainResolver`] | Cyclic-graph search for the effective tag of a kind |
//! | [`SupplierContext`] | Ordered parameter supplier rules |
//! | [`ConstructorResolver`] | Ranked selection of a satisfiable constructor |
//!
//! ## Ports
//!
//! - `ports::registry::*`: compile-time registries of tag kinds and component types
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `decor-domain`: For tags, declarations and port traits
//! - `linkme` for registration and `tracing` for diagnostics

pub mod domain_services;
pub mod ports;

pub use domain_services::*;
pub use ports::*;
