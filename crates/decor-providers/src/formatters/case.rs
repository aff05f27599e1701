//! Letter case formatter
//!
//! One shared type serves both `@Uppercase` and `@Lowercase`; the meta tag
//! on each kind carries the `upper` flag.

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
pub const CASE_FORMATTER: &str = "CaseFormatter";

/// Converts text to upper or lower case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseFormatter {
    upper: bool,
}

impl CaseFormatter {
    /// Upper-casing formatter
    pub fn upper() -> Self {
        Self { upper: true }
    }

    /// Lower-casing formatter
    pub fn lower() -> Self {
        Self { upper: false }
    }

    /// Whether text is upper-cased
    pub fn is_upper(&self) -> bool {
        self.upper
    }

    fn convert(&self, text: &str) -> String {
        if self.upper {
            text.to_uppercase()
        } else {
            text.to_lowercase()
        }
    }

    /// Constructors of the type
    pub fn descriptor() -> TypeDescriptor<dyn Formatter> {
        TypeDescriptor::new(CASE_FORMATTER)
            .shared()
            .with_constructor(ConstructorDef::new(
                vec![("upper", ParamType::Bool)],
                |args| {
                    let formatter: Arc<dyn Formatter> = if args.value::<bool>("upper")? {
                        Arc::new(CaseFormatter::upper())
                    } else {
                        Arc::new(CaseFormatter::lower())
                    };
                    Ok(formatter)
                },
            ))
    }
}

impl Formatter for CaseFormatter {
    fn component_name(&self) -> &str {
        CASE_FORMATTER
    }

    fn format(&self, value: &Value) -> Result<String> {
        match value {
            Value::String(text) => Ok(self.convert(text)),
            other => Err(Error::invalid_argument(format!(
                "{CASE_FORMATTER} expects text, got {other}"
            ))),
        }
    }

    fn parse(&self, text: &str) -> Result<Value> {
        Ok(Value::String(self.convert(text)))
    }
}

#[linkme::distributed_slice(FORMATTER_TYPES)]
static CASE_FORMATTER_ENTRY: FormatterTypeEntry = FormatterTypeEntry {
    name: CASE_FORMATTER,
    description: "Upper or lower case text",
    describe: CaseFormatter::descriptor,
};

#[linkme::distributed_slice(TAG_KINDS)]
static UPPERCASE_KIND: TagKindEntry = TagKindEntry {
    name: "Uppercase",
    description: "Text rendered in upper case",
    define: || {
        TagKindDef::new("Uppercase")
            .with_description("Text rendered in upper case")
            .with_tag(format(CASE_FORMATTER).with("upper", true))
    },
};

#[linkme::distributed_slice(TAG_KINDS)]
static LOWERCASE_KIND: TagKindEntry = TagKindEntry {
    name: "Lowercase",
    description: "Text rendered in lower case",
    define: || {
        TagKindDef::new("Lowercase")
            .with_description("Text rendered in lower case")
            .with_tag(format(CASE_FORMATTER).with("upper", false))
    },
};
