//! Domain Services
//!
//! The two algorithms of the engine and the structures they operate on.
//!
//! ## Domain Services
//!
//! | Service | Description |
//! |---------|-------------|
//! | [`DecorationGraph`] | Tags of declarations and of tag kinds |
//! | [`DomainResolver`] | Effective tag search with provenance |
//! | [`SupplierContext`] | Ordered parameter supplier rules |
//! | [`ConstructorResolver`] | Most specific satisfiable constructor |

/// Constructor descriptors and ranked resolution
pub mod constructor;
/// Effective tag search over meta tags
pub mod domain_resolver;
/// Read-only view of the tag hierarchy
pub mod graph;
/// Parameter supplier rules
pub mod supplier;

pub use constructor::{
    Arguments, BuildFn, ComponentBinding, ComponentScope, ConstructorDef, ConstructorResolver,
    TypeDescriptor,
};
pub use domain_resolver::{DomainResolver, ResolutionSession};
pub use graph::DecorationGraph;
pub use supplier::{Predicate, RuleBuilder, Supplier, SupplierContext, SupplierRule, predicates};
