//! Declared value type check
//!
//! The only built-in component that consumes the annotated declaration
//! itself rather than tag attributes.

use std::sync::Arc;

use decor_application::domain_services::{ConstructorDef, TypeDescriptor};
use decor_application::ports::registry::{
    TAG_KINDS, TagKindEntry, VALIDATOR_TYPES, ValidatorTypeEntry,
};
use decor_domain::ports::Validator;
use decor_domain::value_objects::{ParamType, TagKindDef};
use serde_json::Value;
use tracing::debug;

use super::constraint;

/// Registered type name
pub const TYPE_CHECK_VALIDATOR: &str = "TypeCheckValidator";

/// Accepts values whose JSON shape matches the declaration's value type
///
/// Unknown or missing value types accept everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCheckValidator {
    declaration_id: String,
    value_type: Option<String>,
}

impl TypeCheckValidator {
    /// Validator for a declaration's value type
    pub fn new(declaration_id: impl Into<String>, value_type: Option<String>) -> Self {
        Self {
            declaration_id: declaration_id.into(),
            value_type,
        }
    }

    /// Id of the checked declaration
    pub fn declaration_id(&self) -> &str {
        &self.declaration_id
    }

    /// Constructors of the type
    pub fn descriptor() -> TypeDescriptor<dyn Validator> {
        TypeDescriptor::new(TYPE_CHECK_VALIDATOR).with_constructor(ConstructorDef::new(
            vec![("declaration", ParamType::Declaration)],
            |args| {
                let declaration = args.declaration("declaration")?;
                let validator: Arc<dyn Validator> = Arc::new(TypeCheckValidator::new(
                    declaration.id.clone(),
                    declaration.value_type.clone(),
                ));
                Ok(validator)
            },
        ))
    }
}

impl Validator for TypeCheckValidator {
    fn component_name(&self) -> &str {
        TYPE_CHECK_VALIDATOR
    }

    fn is_valid(&self, value: &Value) -> bool {
        if value.is_null() {
            return true;
        }
        match self.value_type.as_deref() {
            Some("i8" | "i16" | "i32" | "i64" | "isize") => value.is_i64(),
            Some("u8" | "u16" | "u32" | "u64" | "usize") => value.is_u64(),
            Some("f32" | "f64") => value.is_number(),
            Some("bool") => value.is_boolean(),
            Some("String" | "str" | "char") => value.is_string(),
            Some(other) => {
                debug!(
                    declaration = %self.declaration_id,
                    value_type = other,
                    "Unknown value type, accepting"
                );
                true
            }
            None => true,
        }
    }
}

#[linkme::distributed_slice(VALIDATOR_TYPES)]
static TYPE_CHECK_VALIDATOR_ENTRY: ValidatorTypeEntry = ValidatorTypeEntry {
    name: TYPE_CHECK_VALIDATOR,
    description: "Value shape matches the declared value type",
    describe: TypeCheckValidator::descriptor,
};

#[linkme::distributed_slice(TAG_KINDS)]
static TYPED_KIND: TagKindEntry = TagKindEntry {
    name: "Typed",
    description: "Value must match the declared value type",
    define: || {
        TagKindDef::new("Typed")
            .with_description("Value must match the declared value type")
            .with_tag(constraint(TYPE_CHECK_VALIDATOR))
    },
};
