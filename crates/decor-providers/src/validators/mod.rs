//! Validator providers
//!
//! Each validator module registers both its tag kind (meta-tagged with
//! `@Constraint(validated_by = ...)`) and its component type.

use decor_application::ports::registry::{TAG_KINDS, TagKindEntry};
use decor_domain::constants::{CONSTRAINT_POINTS_TO, CONSTRAINT_TAG_KIND};
use decor_domain::value_objects::{Tag, TagKindDef};

pub mod length;
pub mod pattern;
pub mod range;
pub mod required;
pub mod type_check;

pub use length::LengthValidator;
pub use pattern::PatternValidator;
pub use range::RangeValidator;
pub use required::RequiredValidator;
pub use type_check::TypeCheckValidator;

/// `@Constraint(validated_by = <type_name>)`
pub fn constraint(type_name: &str) -> Tag {
    Tag::new(CONSTRAINT_TAG_KIND).with(CONSTRAINT_POINTS_TO, type_name)
}

#[linkme::distributed_slice(TAG_KINDS)]
static CONSTRAINT_KIND: TagKindEntry = TagKindEntry {
    name: CONSTRAINT_TAG_KIND,
    description: "Marks a tag kind as a validation constraint",
    define: || {
        TagKindDef::new(CONSTRAINT_TAG_KIND)
            .with_description("Marks a tag kind as a validation constraint")
    },
};
