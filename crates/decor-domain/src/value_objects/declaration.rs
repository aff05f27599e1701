//! Declarations that may carry tags

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::kind::TagKind;
use super::tag::Tag;
use crate::error::{Error, Result};

/// What sort of program element a declaration describes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeclarationKind {
    /// A type definition
    Type,
    /// A field of a type
    #[default]
    Field,
    /// A method of a type
    Method,
    /// A method or constructor parameter
    Parameter,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Type => "type",
            Self::Field => "field",
            Self::Method => "method",
            Self::Parameter => "parameter",
        };
        f.write_str(name)
    }
}

/// A field, parameter, type or method together with its directly attached tags
///
/// Declarations are snapshots handed over by the introspection layer; the
/// engine never mutates them. A declaration carries at most one tag of each
/// kind, which [`Declaration::with_tag`] and [`Declaration::validate`] enforce.
///
/// # Example
///
/// ```
/// use decor_domain::value_objects::{Declaration, Tag};
///
/// let quantity = Declaration::field("Order.quantity")
///     .with_value_type("i64")
///     .with_tag(Tag::new("Range").with("min", 1).with("max", 10))
///     .unwrap();
///
/// assert_eq!(quantity.tags.len(), 1);
/// assert!(quantity.with_tag(Tag::new("Range")).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    /// Dotted path identifying the declaration (e.g. `Order.quantity`)
    pub id: String,

    /// Program element kind
    #[serde(default)]
    pub kind: DeclarationKind,

    /// Name of the declared value type, when known
    #[serde(default)]
    pub value_type: Option<String>,

    /// Directly attached tags, in declaration order
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Declaration {
    /// Create an untagged declaration
    pub fn new(id: impl Into<String>, kind: DeclarationKind) -> Self {
        Self {
            id: id.into(),
            kind,
            value_type: None,
            tags: Vec::new(),
        }
    }

    /// Create an untagged field declaration
    pub fn field(id: impl Into<String>) -> Self {
        Self::new(id, DeclarationKind::Field)
    }

    /// Create an untagged type declaration
    pub fn type_decl(id: impl Into<String>) -> Self {
        Self::new(id, DeclarationKind::Type)
    }

    /// Set the declared value type
    pub fn with_value_type(mut self, value_type: impl Into<String>) -> Self {
        self.value_type = Some(value_type.into());
        self
    }

    /// Attach a tag, rejecting a second tag of the same kind
    pub fn with_tag(mut self, tag: Tag) -> Result<Self> {
        if self.has_tag(&tag.kind) {
            return Err(duplicate_kind(&self.id, &tag.kind));
        }
        self.tags.push(tag);
        Ok(self)
    }

    /// Whether a tag of the given kind is attached directly
    pub fn has_tag(&self, kind: &TagKind) -> bool {
        self.tags.iter().any(|tag| tag.is(kind))
    }

    /// The directly attached tag of the given kind
    pub fn tag(&self, kind: &TagKind) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.is(kind))
    }

    /// Check invariants of a declaration built outside of the builder
    /// (e.g. deserialized from a catalog file)
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::invalid_argument("Declaration id cannot be empty"));
        }
        let mut seen = HashSet::new();
        for tag in &self.tags {
            if !seen.insert(&tag.kind) {
                return Err(duplicate_kind(&self.id, &tag.kind));
            }
        }
        Ok(())
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind, self.id)
    }
}

fn duplicate_kind(id: &str, kind: &TagKind) -> Error {
    Error::invalid_argument(format!(
        "Declaration `{id}` already carries a tag of kind `{kind}`"
    ))
}
