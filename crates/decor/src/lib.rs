//! # Decor
//!
//! Metadata-driven decoration resolution. Given a declaration carrying tags,
//! Decor finds the effective tag of a kind (looking through tags attached to
//! other tags' kinds) and builds the component that tag points to.
//!
//! ## Example
//!
//! ```
//! use decor::{AppConfig, Declaration, Tag, bootstrap};
//! use serde_json::json;
//!
//! let engine = bootstrap(&AppConfig::default()).unwrap();
//! let quantity = Declaration::field("Order.quantity")
//!     .with_tag(Tag::new("Range").with("min", 1).with("max", 10))
//!     .unwrap();
//!
//! assert!(engine.validate(&quantity, &json!(5)).unwrap());
//! assert!(!engine.validate(&quantity, &json!(11)).unwrap());
//! ```
//!
//! ## Architecture
//!
//! - `domain` - tags, declarations, provenance chains, errors and ports
//! - `application` - domain search, supplier rules, constructor resolution, registries
//! - `providers` - built-in tag kinds, validators and formatters
//! - `infrastructure` - configuration, logging, metadata catalog, factories and engine

/// Domain layer - core types and ports
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use decor_domain::*;
}

/// Application layer - resolution services and registries
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use decor_application::*;
}

/// Built-in providers
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use decor_providers::*;
}

/// Infrastructure layer - config, logging, catalog and engine
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use decor_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::*;

// Re-export the resolution services
pub use application::{
    ConstructorDef, ConstructorResolver, DecorationGraph, DomainResolver, ResolutionSession,
    SupplierContext, TypeDescriptor,
};

// Re-export the engine entry points
pub use infrastructure::config::{AppConfig, ConfigLoader};
pub use infrastructure::{ComponentFactory, ComponentKind, Engine, MetadataCatalog, bootstrap};
