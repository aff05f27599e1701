//! Numeric range validator
//!
//! Backs `@Range(min, max, inclusive)`. Two constructors are declared; the
//! three-parameter one wins whenever `inclusive` can be supplied, which the
//! kind's default guarantees for catalog-introspected tags.

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
pub const RANGE_VALIDATOR: &str = "RangeValidator";

/// Accepts numbers between `min` and `max`; null is accepted
#[derive(Debug, Clone, PartialEq)]
pub struct RangeValidator {
    min: f64,
    max: f64,
    inclusive: bool,
}

impl RangeValidator {
    /// Inclusive range
    pub fn new(min: f64, max: f64) -> Self {
        Self::with_inclusive(min, max, true)
    }

    /// Range with explicit bound handling
    pub fn with_inclusive(min: f64, max: f64, inclusive: bool) -> Self {
        Self {
            min,
            max,
            inclusive,
        }
    }

    /// Whether the bounds themselves are accepted
    pub fn inclusive(&self) -> bool {
        self.inclusive
    }

    /// Constructors of the type
    pub fn descriptor() -> TypeDescriptor<dyn Validator> {
        TypeDescriptor::new(RANGE_VALIDATOR)
            .with_constructor(ConstructorDef::new(
                vec![("min", ParamType::Float), ("max", ParamType::Float)],
                |args| {
                    let validator: Arc<dyn Validator> =
                        Arc::new(RangeValidator::new(args.value("min")?, args.value("max")?));
                    Ok(validator)
                },
            ))
            .with_constructor(ConstructorDef::new(
                vec![
                    ("min", ParamType::Float),
                    ("max", ParamType::Float),
                    ("inclusive", ParamType::Bool),
                ],
                |args| {
                    let validator: Arc<dyn Validator> = Arc::new(RangeValidator::with_inclusive(
                        args.value("min")?,
                        args.value("max")?,
                        args.value("inclusive")?,
                    ));
                    Ok(validator)
                },
            ))
    }
}

impl Validator for RangeValidator {
    fn component_name(&self) -> &str {
        RANGE_VALIDATOR
    }

    fn is_valid(&self, value: &Value) -> bool {
        if value.is_null() {
            return true;
        }
        let Some(number) = value.as_f64() else {
            return false;
        };
        if self.inclusive {
            number >= self.min && number <= self.max
        } else {
            number > self.min && number < self.max
        }
    }
}

// ============================================================================
// Auto-registration via linkme
// ============================================================================

#[linkme::distributed_slice(VALIDATOR_TYPES)]
static RANGE_VALIDATOR_ENTRY: ValidatorTypeEntry = ValidatorTypeEntry {
    name: RANGE_VALIDATOR,
    description: "Numeric bounds check",
    describe: RangeValidator::descriptor,
};

#[linkme::distributed_slice(TAG_KINDS)]
static RANGE_KIND: TagKindEntry = TagKindEntry {
    name: "Range",
    description: "Numeric value between min and max",
    define: || {
        TagKindDef::new("Range")
            .with_description("Numeric value between min and max")
            .with_tag(constraint(RANGE_VALIDATOR))
            .with_default("inclusive", true)
    },
};
