//! Tag Kind Registry
//!
//! Built-in tag kind definitions contributed by providers. The metadata
//! catalog seeds itself from this slice before loading user catalogs.

use decor_domain::value_objects::TagKindDef;

/// Registry entry for a tag kind definition
pub struct TagKindEntry {
    /// Kind name (e.g. "Range")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Builds the kind's definition
    pub define: fn() -> TagKindDef,
}

#[linkme::distributed_slice]
pub static TAG_KINDS: [TagKindEntry] = [..];

/// Definitions of every linked tag kind, sorted by name
pub fn builtin_tag_kinds() -> Vec<TagKindDef> {
    let mut entries: Vec<&TagKindEntry> = TAG_KINDS.iter().collect();
    entries.sort_by_key(|entry| entry.name);
    entries.into_iter().map(|entry| (entry.define)()).collect()
}

/// List all registered tag kinds, sorted by name
pub fn list_tag_kinds() -> Vec<(&'static str, &'static str)> {
    let mut kinds: Vec<(&'static str, &'static str)> = TAG_KINDS
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect();
    kinds.sort_unstable_by_key(|(name, _)| *name);
    kinds
}
