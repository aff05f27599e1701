//! Length validator for strings and lists

use std::sync::Arc;

use decor_application::domain_services::{ConstructorDef, TypeDescriptor};
use decor_application::ports::registry::{
    TAG_KINDS, TagKindEntry, VALIDATOR_TYPES, ValidatorTypeEntry,
};
use decor_domain::ports::Validator;
use decor_domain::value_objects::{ParamType, TagKindDef};
use serde_json::Value;

use super::constraint;

/// Registered type name
pub const LENGTH_VALIDATOR: &str = "LengthValidator";

/// Accepts strings (counted in chars) and lists whose length is within bounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthValidator {
    min: usize,
    max: usize,
}

impl LengthValidator {
    /// Length between `min` and `max`, inclusive
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Length of at most `max`
    pub fn at_most(max: usize) -> Self {
        Self::new(0, max)
    }

    /// Constructors of the type
    pub fn descriptor() -> TypeDescriptor<dyn Validator> {
        TypeDescriptor::new(LENGTH_VALIDATOR)
            .with_constructor(ConstructorDef::new(
                vec![("max", ParamType::Integer)],
                |args| {
                    let validator: Arc<dyn Validator> =
                        Arc::new(LengthValidator::at_most(args.value("max")?));
                    Ok(validator)
                },
            ))
            .with_constructor(ConstructorDef::new(
                vec![("min", ParamType::Integer), ("max", ParamType::Integer)],
                |args| {
                    let validator: Arc<dyn Validator> =
                        Arc::new(LengthValidator::new(args.value("min")?, args.value("max")?));
                    Ok(validator)
                },
            ))
    }
}

impl Validator for LengthValidator {
    fn component_name(&self) -> &str {
        LENGTH_VALIDATOR
    }

    fn is_valid(&self, value: &Value) -> bool {
        let length = match value {
            Value::Null => return true,
            Value::String(text) => text.chars().count(),
            Value::Array(items) => items.len(),
            _ => return false,
        };
        (self.min..=self.max).contains(&length)
    }
}

#[linkme::distributed_slice(VALIDATOR_TYPES)]
static LENGTH_VALIDATOR_ENTRY: ValidatorTypeEntry = ValidatorTypeEntry {
    name: LENGTH_VALIDATOR,
    description: "String or list length check",
    describe: LengthValidator::descriptor,
};

#[linkme::distributed_slice(TAG_KINDS)]
static LENGTH_KIND: TagKindEntry = TagKindEntry {
    name: "Length",
    description: "String or list length between min and max",
    define: || {
        TagKindDef::new("Length")
            .with_description("String or list length between min and max")
            .with_tag(constraint(LENGTH_VALIDATOR))
    },
};
