//! # Domain Layer
//!
//! Core types of the decoration resolution engine.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`value_objects`] | Tags, tag kinds, declarations, provenance chains, parameters |
//! | [`ports`] | Introspection boundary and component interfaces |
//! | [`error`] | Error type and `Result` alias |
//! | [`constants`] | Built-in meta tag kinds and component kind names |
//!
//! This crate has no knowledge of how tags are searched or components
//! built; that lives in `decor-application`.

pub mod constants;
pub mod error;
pub mod ports;
pub mod value_objects;

pub use error::{Error, Result};
pub use value_objects::{
    Declaration, DeclarationKind, ParamDescriptor, ParamType, ProvenanceChain, Supplied, Tag,
    TagKind, TagKindDef,
};
