//! Formatter providers
//!
//! Formatting kinds are meta-tagged with `@Format(formatted_by = ...)`.
//! Extra attributes on the meta tag (such as `upper` on the case kinds) are
//! visible to the formatter's constructor through the provenance chain.

use decor_application::ports::registry::{TAG_KINDS, TagKindEntry};
use decor_domain::constants::{FORMAT_POINTS_TO, FORMAT_TAG_KIND};
use decor_domain::value_objects::{Tag, TagKindDef};

pub mod case;
pub mod decimal;

pub use case::CaseFormatter;
pub use decimal::DecimalFormatter;

/// `@Format(formatted_by = <type_name>)`
pub fn format(type_name: &str) -> Tag {
    Tag::new(FORMAT_TAG_KIND).with(FORMAT_POINTS_TO, type_name)
}

#[linkme::distributed_slice(TAG_KINDS)]
static FORMAT_KIND: TagKindEntry = TagKindEntry {
    name: FORMAT_TAG_KIND,
    description: "Marks a tag kind as a value format",
    define: || {
        TagKindDef::new(FORMAT_TAG_KIND).with_description("Marks a tag kind as a value format")
    },
};
