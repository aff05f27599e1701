//! Formatter Type Registry
//!
//! Auto-registration of formatter component types.

use decor_domain::ports::Formatter;

use super::component::{ComponentRegistry, ComponentTypeEntry, list_entries};

/// Registry entry for a formatter type
pub type FormatterTypeEntry = ComponentTypeEntry<dyn Formatter>;

/// Registry of formatter types
pub type FormatterRegistry = ComponentRegistry<dyn Formatter>;

#[linkme::distributed_slice]
pub static FORMATTER_TYPES: [FormatterTypeEntry] = [..];

/// Registry holding every linked formatter type
pub fn formatter_registry() -> FormatterRegistry {
    ComponentRegistry::from_entries(&FORMATTER_TYPES)
}

/// List all registered formatter types, sorted by name
pub fn list_formatter_types() -> Vec<(&'static str, &'static str)> {
    let mut types = list_entries(&FORMATTER_TYPES);
    types.sort_unstable_by_key(|(name, _)| *name);
    types
}
