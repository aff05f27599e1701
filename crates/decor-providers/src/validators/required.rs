//! Presence validator

use std::sync::Arc;

use decor_application::domain_services::{ConstructorDef, TypeDescriptor};
use decor_application::ports::registry::{
    TAG_KINDS, TagKindEntry, VALIDATOR_TYPES, ValidatorTypeEntry,
};
use decor_domain::ports::Validator;
use decor_domain::value_objects::TagKindDef;
use serde_json::Value;

use super::constraint;

/// Registered type name
pub const REQUIRED_VALIDATOR: &str = "RequiredValidator";

/// Rejects null and empty strings
///
/// Stateless, so the type is registered with shared scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequiredValidator;

impl RequiredValidator {
    /// Constructors of the type
    pub fn descriptor() -> TypeDescriptor<dyn Validator> {
        TypeDescriptor::new(REQUIRED_VALIDATOR)
            .shared()
            .with_constructor(ConstructorDef::nullary(|| {
                let validator: Arc<dyn Validator> = Arc::new(RequiredValidator);
                Ok(validator)
            }))
    }
}

impl Validator for RequiredValidator {
    fn component_name(&self) -> &str {
        REQUIRED_VALIDATOR
    }

    fn is_valid(&self, value: &Value) -> bool {
        match value {
            Value::Null => false,
            Value::String(text) => !text.is_empty(),
            _ => true,
        }
    }
}

#[linkme::distributed_slice(VALIDATOR_TYPES)]
static REQUIRED_VALIDATOR_ENTRY: ValidatorTypeEntry = ValidatorTypeEntry {
    name: REQUIRED_VALIDATOR,
    description: "Non-null, non-empty value",
    describe: RequiredValidator::descriptor,
};

#[linkme::distributed_slice(TAG_KINDS)]
static REQUIRED_KIND: TagKindEntry = TagKindEntry {
    name: "Required",
    description: "Value must be present",
    define: || {
        TagKindDef::new("Required")
            .with_description("Value must be present")
            .with_tag(constraint(REQUIRED_VALIDATOR))
    },
};
