//! Component factories and engine composition
//!
//! ```text
//! AppConfig → bootstrap → MetadataCatalog ─┐
//!                │                          ├→ DecorationGraph → ComponentFactory<dyn Validator>
//!            linkme registries ─────────────┘                  → ComponentFactory<dyn Formatter>
//! ```

pub mod bootstrap;
pub mod factory;

pub use bootstrap::{Engine, bootstrap};
pub use factory::{ComponentFactory, ComponentKind};
