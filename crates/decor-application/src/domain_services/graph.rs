//! Decoration Graph
//!
//! Read-only view of the tag hierarchy: the tags on a declaration, and for
//! any tag, the tags attached to that tag's own kind. Edges are computed on
//! demand from the introspector; nothing is materialized or cached here.

use std::fmt;
use std::sync::Arc;

use decor_domain::ports::MetadataIntrospector;
use decor_domain::value_objects::{Declaration, Tag, TagKind};

/// Traversal over directly attached tags and their meta tags
#[derive(Clone)]
pub struct DecorationGraph {
    introspector: Arc<dyn MetadataIntrospector>,
}

impl DecorationGraph {
    /// Create a graph over an introspector
    pub fn new(introspector: Arc<dyn MetadataIntrospector>) -> Self {
        Self { introspector }
    }

    /// Tags attached directly to a declaration, in declaration order
    pub fn direct_tags(&self, declaration: &Declaration) -> Vec<Tag> {
        self.introspector.direct_tags(declaration)
    }

    /// Tags attached to the defining type of a tag's kind
    pub fn meta_tags(&self, tag: &Tag) -> Vec<Tag> {
        self.introspector.kind_tags(&tag.kind)
    }

    /// Tags attached to the defining type of a kind
    pub fn kind_tags(&self, kind: &TagKind) -> Vec<Tag> {
        self.introspector.kind_tags(kind)
    }

    /// The underlying introspector
    pub fn introspector(&self) -> &Arc<dyn MetadataIntrospector> {
        &self.introspector
    }
}

impl fmt::Debug for DecorationGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecorationGraph").finish_non_exhaustive()
    }
}
