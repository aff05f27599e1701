//! Fixed-scale decimal formatter

use std::sync::Arc;

use decor_application::domain_services::{ConstructorDef, TypeDescriptor};
use decor_application::ports::registry::{
    FORMATTER_TYPES, FormatterTypeEntry, TAG_KINDS, TagKindEntry,
};
use decor_domain::error::{Error, Result};
use decor_domain::ports::Formatter;
use decor_domain::value_objects::{ParamType, TagKindDef};
use serde_json::Value;

use super::format;

/// Registered type name
pub const DECIMAL_FORMATTER: &str = "DecimalFormatter";

/// Default number of fraction digits for `@Decimal`
pub const DEFAULT_DECIMAL_SCALE: usize = 2;

/// Renders numbers with a fixed number of fraction digits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalFormatter {
    scale: usize,
}

impl DecimalFormatter {
    /// Formatter with `scale` fraction digits
    pub fn new(scale: usize) -> Self {
        Self { scale }
    }

    /// Number of fraction digits
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Constructors of the type
    pub fn descriptor() -> TypeDescriptor<dyn Formatter> {
        TypeDescriptor::new(DECIMAL_FORMATTER).with_constructor(ConstructorDef::new(
            vec![("scale", ParamType::Integer)],
            |args| {
                let formatter: Arc<dyn Formatter> =
                    Arc::new(DecimalFormatter::new(args.value("scale")?));
                Ok(formatter)
            },
        ))
    }
}

impl Formatter for DecimalFormatter {
    fn component_name(&self) -> &str {
        DECIMAL_FORMATTER
    }

    fn format(&self, value: &Value) -> Result<String> {
        let number = value.as_f64().ok_or_else(|| {
            Error::invalid_argument(format!("{DECIMAL_FORMATTER} expects a number, got {value}"))
        })?;
        Ok(format!("{number:.*}", self.scale))
    }

    fn parse(&self, text: &str) -> Result<Value> {
        let number: f64 = text.trim().parse().map_err(|e| {
            Error::invalid_argument(format!("`{text}` is not a decimal number: {e}"))
        })?;
        serde_json::Number::from_f64(number)
            .map(Value::Number)
            .ok_or_else(|| Error::invalid_argument(format!("`{text}` is not a finite number")))
    }
}

#[linkme::distributed_slice(FORMATTER_TYPES)]
static DECIMAL_FORMATTER_ENTRY: FormatterTypeEntry = FormatterTypeEntry {
    name: DECIMAL_FORMATTER,
    description: "Fixed-scale decimal rendering",
    describe: DecimalFormatter::descriptor,
};

#[linkme::distributed_slice(TAG_KINDS)]
static DECIMAL_KIND: TagKindEntry = TagKindEntry {
    name: "Decimal",
    description: "Number rendered with a fixed scale",
    define: || {
        TagKindDef::new("Decimal")
            .with_description("Number rendered with a fixed scale")
            .with_tag(format(DECIMAL_FORMATTER))
            .with_default("scale", DEFAULT_DECIMAL_SCALE)
    },
};
