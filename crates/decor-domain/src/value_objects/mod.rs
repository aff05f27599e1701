//! Domain Value Objects
//!
//! Immutable values describing decorated declarations and the inputs of
//! component construction.
//!
//! ## Value Objects
//!
//! | Value Object | Description |
//! |--------------|-------------|
//! | [`TagKind`] | Identity of a tag kind |
//! | [`TagKindDef`] | A tag kind's own meta tags and attribute defaults |
//! | [`Tag`] | Attached metadata instance with attributes |
//! | [`Declaration`] | Field, parameter, type or method with its tags |
//! | [`ProvenanceChain`] | Parent-to-leaf path of a domain search match |
//! | [`ParamDescriptor`] | Constructor parameter name and type |
//! | [`Supplied`] | Value produced for a constructor parameter |

/// Declarations and their kinds
pub mod declaration;
/// Tag kind identity and definitions
pub mod kind;
/// Constructor parameter descriptors
pub mod param;
/// Domain search provenance
pub mod provenance;
/// Supplied argument values
pub mod supplied;
/// Tags
pub mod tag;

pub use declaration::{Declaration, DeclarationKind};
pub use kind::{TagKind, TagKindDef};
pub use param::{ParamDescriptor, ParamType};
pub use provenance::ProvenanceChain;
pub use supplied::Supplied;
pub use tag::Tag;
