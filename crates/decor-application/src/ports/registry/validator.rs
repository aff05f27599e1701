//! Validator Type Registry
//!
//! Auto-registration of validator component types.

use decor_domain::ports::Validator;

use super::component::{ComponentRegistry, ComponentTypeEntry, list_entries};

/// Registry entry for a validator type
pub type ValidatorTypeEntry = ComponentTypeEntry<dyn Validator>;

/// Registry of validator types
pub type ValidatorRegistry = ComponentRegistry<dyn Validator>;

// Auto-collection via linkme distributed slices - providers submit entries at compile time
#[linkme::distributed_slice]
pub static VALIDATOR_TYPES: [ValidatorTypeEntry] = [..];

/// Registry holding every linked validator type
pub fn validator_registry() -> ValidatorRegistry {
    ComponentRegistry::from_entries(&VALIDATOR_TYPES)
}

/// List all registered validator types
///
/// Returns `(name, description)` pairs sorted by name.
pub fn list_validator_types() -> Vec<(&'static str, &'static str)> {
    let mut types = list_entries(&VALIDATOR_TYPES);
    types.sort_unstable_by_key(|(name, _)| *name);
    types
}
