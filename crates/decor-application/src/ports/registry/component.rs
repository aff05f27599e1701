//! Component Type Registry
//!
//! Generic entry and lookup table shared by every component family.
//! Each family declares its own `linkme` distributed slice of
//! [`ComponentTypeEntry`] values; a [`ComponentRegistry`] is built from
//! that slice at startup and can be extended at runtime.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::warn;

use crate::domain_services::TypeDescriptor;

/// Registry entry for a component type
///
/// Providers register themselves with one entry per type using
/// `#[linkme::distributed_slice(...)]`. The entry carries metadata and a
/// function describing the type's constructors.
pub struct ComponentTypeEntry<C: ?Sized> {
    /// Unique type name, referenced by points-to attributes (e.g. "RangeValidator")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Describes the type's scope and constructors
    pub describe: fn() -> TypeDescriptor<C>,
}

/// Lookup table of constructible component types
pub struct ComponentRegistry<C: ?Sized> {
    types: HashMap<String, Arc<TypeDescriptor<C>>>,
}

impl<C: ?Sized> ComponentRegistry<C> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Build a registry from registered entries
    ///
    /// When two entries share a name the first one is kept.
    pub fn from_entries(entries: &[ComponentTypeEntry<C>]) -> Self {
        let mut registry = Self::new();
        for entry in entries {
            if registry.contains(entry.name) {
                warn!(component = entry.name, "Duplicate component type entry ignored");
                continue;
            }
            let descriptor = (entry.describe)();
            if descriptor.name() != entry.name {
                warn!(
                    entry = entry.name,
                    descriptor = descriptor.name(),
                    "Component entry name differs from its descriptor"
                );
            }
            registry
                .types
                .insert(entry.name.to_string(), Arc::new(descriptor));
        }
        registry
    }

    /// Register a type, returning the one it replaces
    pub fn register(&mut self, descriptor: TypeDescriptor<C>) -> Option<Arc<TypeDescriptor<C>>> {
        self.types
            .insert(descriptor.name().to_string(), Arc::new(descriptor))
    }

    /// Look up a type by name
    pub fn get(&self, name: &str) -> Option<Arc<TypeDescriptor<C>>> {
        self.types.get(name).cloned()
    }

    /// Whether a type is registered
    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Registered names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.types.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether nothing is registered
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl<C: ?Sized> Default for ComponentRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ?Sized> fmt::Debug for ComponentRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("types", &self.names())
            .finish()
    }
}

/// `(name, description)` pairs of registered entries
pub fn list_entries<C: ?Sized>(entries: &[ComponentTypeEntry<C>]) -> Vec<(&'static str, &'static str)> {
    entries
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}
