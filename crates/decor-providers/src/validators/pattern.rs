//! Regular expression validator

use std::sync::Arc;

use decor_application::domain_services::{ConstructorDef, TypeDescriptor};
use decor_application::ports::registry::{
    TAG_KINDS, TagKindEntry, VALIDATOR_TYPES, ValidatorTypeEntry,
};
use decor_domain::error::{Error, Result};
use decor_domain::ports::Validator;
use decor_domain::value_objects::{ParamType, TagKindDef};
use regex::Regex;
use serde_json::Value;

use super::constraint;

/// Registered type name
pub const PATTERN_VALIDATOR: &str = "PatternValidator";

/// Accepts strings matching a regular expression; null is accepted
#[derive(Debug, Clone)]
pub struct PatternValidator {
    regex: Regex,
}

impl PatternValidator {
    /// Compile the pattern
    pub fn new(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|e| {
            Error::invalid_argument(format!("Invalid pattern `{pattern}`: {e}"))
        })?;
        Ok(Self { regex })
    }

    /// Source pattern
    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }

    /// Constructors of the type
    pub fn descriptor() -> TypeDescriptor<dyn Validator> {
        TypeDescriptor::new(PATTERN_VALIDATOR).with_constructor(ConstructorDef::new(
            vec![("regex", ParamType::Text)],
            |args| {
                let pattern: String = args.value("regex")?;
                let validator: Arc<dyn Validator> = Arc::new(PatternValidator::new(&pattern)?);
                Ok(validator)
            },
        ))
    }
}

impl Validator for PatternValidator {
    fn component_name(&self) -> &str {
        PATTERN_VALIDATOR
    }

    fn is_valid(&self, value: &Value) -> bool {
        match value {
            Value::Null => true,
            Value::String(text) => self.regex.is_match(text),
            _ => false,
        }
    }
}

#[linkme::distributed_slice(VALIDATOR_TYPES)]
static PATTERN_VALIDATOR_ENTRY: ValidatorTypeEntry = ValidatorTypeEntry {
    name: PATTERN_VALIDATOR,
    description: "Regular expression match",
    describe: PatternValidator::descriptor,
};

#[linkme::distributed_slice(TAG_KINDS)]
static PATTERN_KIND: TagKindEntry = TagKindEntry {
    name: "Pattern",
    description: "String matching a regular expression",
    define: || {
        TagKindDef::new("Pattern")
            .with_description("String matching a regular expression")
            .with_tag(constraint(PATTERN_VALIDATOR))
    },
};
