//! Metadata sources
//!
//! The in-memory [`MetadataCatalog`] is the engine's introspection layer:
//! it answers which tags sit on a declaration and on each tag kind.

pub mod catalog;

pub use catalog::{CatalogFile, MetadataCatalog};
