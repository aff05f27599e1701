//! Introspection Port
//!
//! Boundary to the layer that knows which tags are attached where.
//! Implementations must be deterministic and side-effect free for a given
//! snapshot of metadata; the resolution engine relies on repeated calls
//! returning the same tags in the same order.

use crate::value_objects::{Declaration, Tag, TagKind};

/// Read-only access to attached metadata
///
/// # Example
///
/// ```ignore
/// use decor_domain::ports::MetadataIntrospector;
///
/// fn describe(introspector: &dyn MetadataIntrospector, declaration: &Declaration) {
///     for tag in introspector.direct_tags(declaration) {
///         println!("{tag} carries {:?}", introspector.kind_tags(&tag.kind));
///     }
/// }
/// ```
pub trait MetadataIntrospector: Send + Sync {
    /// Tags attached directly to a declaration, in declaration order
    ///
    /// An unknown or unintrospectable declaration yields an empty list.
    fn direct_tags(&self, declaration: &Declaration) -> Vec<Tag>;

    /// Tags attached to the defining type of a tag kind
    ///
    /// An undefined kind yields an empty list.
    fn kind_tags(&self, kind: &TagKind) -> Vec<Tag>;
}

/// Introspection directly over the declaration snapshot, with no kind definitions
///
/// Useful when only direct tags matter; every tag kind reads as undecorated.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectOnlyIntrospector;

impl MetadataIntrospector for DirectOnlyIntrospector {
    fn direct_tags(&self, declaration: &Declaration) -> Vec<Tag> {
        declaration.tags.clone()
    }

    fn kind_tags(&self, _kind: &TagKind) -> Vec<Tag> {
        Vec::new()
    }
}
