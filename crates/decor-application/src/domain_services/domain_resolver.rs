//! Domain Resolver
//!
//! Finds the effective tag of a requested kind on a declaration, looking
//! through meta tags when the kind is not attached directly.
//!
//! ## Search order
//!
//! ```text
//! level 0   direct tags        ── a tag of the kind here wins immediately
//!             │
//! level 1   meta tags of each  ── one-hop matches are checked for every
//!           direct tag            sibling before any sibling is descended
//!             │
//! level n   recurse, sibling by sibling, skipping kinds already expanded
//! ```
//!
//! Tag kinds may tag each other (or themselves), so the graph is cyclic.
//! Each top-level search carries a fresh set of expanded kinds; a kind is
//! expanded at most once per search, which bounds the work by the number of
//! distinct kinds and guarantees termination.

use std::collections::{HashMap, HashSet};

use decor_domain::value_objects::{Declaration, ProvenanceChain, Tag, TagKind};
use tracing::{debug, trace};

use super::graph::DecorationGraph;

/// Memo table for a single resolution session
///
/// Results are keyed by declaration id and requested kind, so independent
/// declarations never share entries. Drop the session to forget everything.
#[derive(Debug, Default)]
pub struct ResolutionSession {
    memo: HashMap<(String, TagKind), Option<ProvenanceChain>>,
    hits: usize,
}

impl ResolutionSession {
    /// Start an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lookups answered from the memo table
    pub fn memo_hits(&self) -> usize {
        self.hits
    }

    /// Number of memoized (declaration, kind) pairs
    pub fn len(&self) -> usize {
        self.memo.len()
    }

    /// Whether nothing has been memoized yet
    pub fn is_empty(&self) -> bool {
        self.memo.is_empty()
    }
}

/// Cyclic-graph search for effective tags
#[derive(Debug, Clone)]
pub struct DomainResolver {
    graph: DecorationGraph,
}

impl DomainResolver {
    /// Create a resolver over a decoration graph
    pub fn new(graph: DecorationGraph) -> Self {
        Self { graph }
    }

    /// The graph being searched
    pub fn graph(&self) -> &DecorationGraph {
        &self.graph
    }

    /// Find the effective tag of `kind` on a declaration
    ///
    /// Returns `None` when no tag of the kind is reachable; absence is a
    /// normal outcome, not an error.
    pub fn resolve(&self, declaration: &Declaration, kind: &TagKind) -> Option<ProvenanceChain> {
        let tags = self.graph.direct_tags(declaration);
        let found = self.resolve_from_tags(&tags, kind);
        match &found {
            Some(chain) => debug!(
                declaration = %declaration.id,
                kind = %kind,
                chain = %chain,
                "Resolved tag"
            ),
            None => debug!(declaration = %declaration.id, kind = %kind, "No tag of kind"),
        }
        found
    }

    /// Find the effective tag of `kind` starting from an arbitrary tag list
    pub fn resolve_from_tags(&self, tags: &[Tag], kind: &TagKind) -> Option<ProvenanceChain> {
        let mut expanded = HashSet::new();
        let mut path = Vec::new();
        if self.search(tags, kind, &mut expanded, &mut path) {
            ProvenanceChain::new(path)
        } else {
            None
        }
    }

    /// Like [`resolve`](Self::resolve), memoized within `session`
    pub fn resolve_in(
        &self,
        session: &mut ResolutionSession,
        declaration: &Declaration,
        kind: &TagKind,
    ) -> Option<ProvenanceChain> {
        let key = (declaration.id.clone(), kind.clone());
        if let Some(found) = session.memo.get(&key) {
            session.hits += 1;
            trace!(declaration = %declaration.id, kind = %kind, "Memo hit");
            return found.clone();
        }
        let found = self.resolve(declaration, kind);
        session.memo.insert(key, found.clone());
        found
    }

    /// Every distinct provenance chain reaching `kind`
    ///
    /// Chains are ordered by length, then by discovery order. A kind is
    /// never expanded twice on the same path, so cycles terminate; unlike
    /// [`resolve`](Self::resolve), different paths may revisit a kind.
    pub fn resolve_all(&self, declaration: &Declaration, kind: &TagKind) -> Vec<ProvenanceChain> {
        let tags = self.graph.direct_tags(declaration);
        let mut found = Vec::new();
        let mut on_path = HashSet::new();
        let mut path = Vec::new();
        self.collect(&tags, kind, &mut on_path, &mut path, &mut found);
        found.sort_by_key(ProvenanceChain::len);
        found
    }

    fn search(
        &self,
        tags: &[Tag],
        kind: &TagKind,
        expanded: &mut HashSet<TagKind>,
        path: &mut Vec<Tag>,
    ) -> bool {
        if let Some(found) = tags.iter().find(|tag| tag.is(kind)) {
            path.push(found.clone());
            return true;
        }

        // One hop for every sibling before descending into any of them.
        let mut pending = Vec::with_capacity(tags.len());
        for tag in tags {
            if !expanded.insert(tag.kind.clone()) {
                trace!(kind = %tag.kind, "Skipping expanded kind");
                continue;
            }
            let meta = self.graph.meta_tags(tag);
            if let Some(found) = meta.iter().find(|meta_tag| meta_tag.is(kind)) {
                path.push(tag.clone());
                path.push(found.clone());
                return true;
            }
            pending.push((tag, meta));
        }

        for (tag, meta) in pending {
            path.push(tag.clone());
            if self.search(&meta, kind, expanded, path) {
                return true;
            }
            path.pop();
        }
        false
    }

    fn collect(
        &self,
        tags: &[Tag],
        kind: &TagKind,
        on_path: &mut HashSet<TagKind>,
        path: &mut Vec<Tag>,
        found: &mut Vec<ProvenanceChain>,
    ) {
        for tag in tags {
            if tag.is(kind) {
                path.push(tag.clone());
                found.extend(ProvenanceChain::new(path.clone()));
                path.pop();
                continue;
            }
            if !on_path.insert(tag.kind.clone()) {
                continue;
            }
            path.push(tag.clone());
            let meta = self.graph.meta_tags(tag);
            self.collect(&meta, kind, on_path, path, found);
            path.pop();
            on_path.remove(&tag.kind);
        }
    }
}
