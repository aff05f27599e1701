//! Registry System
//!
//! Auto-registration infrastructure for built-in tag kinds and component
//! types. Uses the `linkme` crate for compile-time registration of entries
//! that are discovered at runtime.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Component Registration Flow                  │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  1. Provider defines:  #[linkme::distributed_slice(VALIDATOR_TYPES)]
//! │                        static ENTRY: ValidatorTypeEntry = ...   │
//! │                              ↓                                  │
//! │  2. Registry declares: #[linkme::distributed_slice]             │
//! │                        pub static VALIDATOR_TYPES: [..] = [..]  │
//! │                              ↓                                  │
//! │  3. Factory builds:    validator_registry()                     │
//! │                              ↓                                  │
//! │  4. Tag selects:       @Constraint(validated_by = "RangeValidator")
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registering a validator (in decor-providers)
//!
//! ```ignore
//! use decor_application::ports::registry::{ValidatorTypeEntry, VALIDATOR_TYPES};
//!
//! #[linkme::distributed_slice(VALIDATOR_TYPES)]
//! static RANGE_VALIDATOR: ValidatorTypeEntry = ValidatorTypeEntry {
//!     name: "RangeValidator",
//!     description: "Numeric bounds",
//!     describe: RangeValidator::descriptor,
//! };
//! ```

pub mod component;
pub mod formatter;
pub mod tag_kind;
pub mod validator;

pub use component::{ComponentRegistry, ComponentTypeEntry};
pub use formatter::{
    FORMATTER_TYPES, FormatterRegistry, FormatterTypeEntry, formatter_registry,
    list_formatter_types,
};
pub use tag_kind::{TAG_KINDS, TagKindEntry, builtin_tag_kinds, list_tag_kinds};
pub use validator::{
    VALIDATOR_TYPES, ValidatorRegistry, ValidatorTypeEntry, list_validator_types,
    validator_registry,
};
