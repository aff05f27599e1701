//! Provenance of a domain search match

use std::fmt;

use super::kind::TagKind;
use super::tag::Tag;

/// Path of tags from the tag on a declaration down to a discovered tag
///
/// The chain is ordered parent to leaf: [`root`](Self::root) is the tag
/// attached to the declaration and [`leaf`](Self::leaf) is the tag that
/// matched the requested kind. A chain is never empty and is never
/// modified once built.
#[derive(Debug, Clone, PartialEq)]
pub struct ProvenanceChain {
    tags: Vec<Tag>,
}

impl ProvenanceChain {
    /// Build a chain from a parent-to-leaf path; `None` for an empty path
    pub fn new(tags: Vec<Tag>) -> Option<Self> {
        if tags.is_empty() {
            None
        } else {
            Some(Self { tags })
        }
    }

    /// Chain of a tag found directly on the declaration
    pub fn single(tag: Tag) -> Self {
        Self { tags: vec![tag] }
    }

    /// Tag attached to the declaration
    pub fn root(&self) -> &Tag {
        &self.tags[0]
    }

    /// Tag that matched the requested kind
    pub fn leaf(&self) -> &Tag {
        &self.tags[self.tags.len() - 1]
    }

    /// Whether the match was attached directly to the declaration
    pub fn is_direct(&self) -> bool {
        self.tags.len() == 1
    }

    /// Number of tags in the chain
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Tags from parent to leaf
    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    /// Kinds from parent to leaf
    pub fn kinds(&self) -> Vec<&TagKind> {
        self.tags.iter().map(|tag| &tag.kind).collect()
    }

    /// The chain's tags from parent to leaf
    pub fn as_slice(&self) -> &[Tag] {
        &self.tags
    }
}

impl<'a> IntoIterator for &'a ProvenanceChain {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

impl fmt::Display for ProvenanceChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kinds: Vec<&str> = self.tags.iter().map(|tag| tag.kind.as_str()).collect();
        f.write_str(&kinds.join(" -> "))
    }
}
