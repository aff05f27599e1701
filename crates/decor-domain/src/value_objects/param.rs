//! Constructor parameter descriptors

use std::fmt;

use serde_json::Value;

use super::kind::TagKind;
use super::supplied::Supplied;

/// Type expected by a constructor parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// JSON boolean
    Bool,
    /// JSON number without fractional part
    Integer,
    /// Any JSON number
    Float,
    /// JSON string
    Text,
    /// JSON array
    List,
    /// JSON object
    Map,
    /// Any JSON value, including null
    Json,
    /// The declaration being decorated
    Declaration,
    /// A tag of the given kind
    Tag(TagKind),
    /// An opaque object identified by its type name
    Object(String),
}

impl ParamType {
    /// Whether a tag attribute value can feed a parameter of this type
    pub fn accepts(&self, value: &Value) -> bool {
        match self {
            Self::Bool => value.is_boolean(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Float => value.is_number(),
            Self::Text => value.is_string(),
            Self::List => value.is_array(),
            Self::Map => value.is_object(),
            Self::Json => true,
            Self::Declaration | Self::Tag(_) | Self::Object(_) => false,
        }
    }

    /// Whether the parameter expects a plain attribute value
    pub fn is_value(&self) -> bool {
        matches!(
            self,
            Self::Bool | Self::Integer | Self::Float | Self::Text | Self::List | Self::Map | Self::Json
        )
    }

    /// Whether a supplied argument can be passed for a parameter of this type
    pub fn admits(&self, supplied: &Supplied) -> bool {
        match (self, supplied) {
            (ty, Supplied::Value(value)) if ty.is_value() => ty.accepts(value),
            (Self::Declaration, Supplied::Declaration(_)) | (Self::Object(_), Supplied::Object(_)) => {
                true
            }
            (Self::Tag(kind), Supplied::Tag(tag)) => tag.is(kind),
            _ => false,
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Integer => f.write_str("integer"),
            Self::Float => f.write_str("float"),
            Self::Text => f.write_str("text"),
            Self::List => f.write_str("list"),
            Self::Map => f.write_str("map"),
            Self::Json => f.write_str("json"),
            Self::Declaration => f.write_str("declaration"),
            Self::Tag(kind) => write!(f, "@{kind}"),
            Self::Object(name) => f.write_str(name),
        }
    }
}

/// Describes one constructor parameter
///
/// Supplier predicates are evaluated against descriptors, so the name and
/// type are all a rule can see about the parameter it is asked to fill.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParamDescriptor {
    /// Zero-based position in the constructor
    pub index: usize,
    /// Parameter name
    pub name: String,
    /// Expected type
    pub ty: ParamType,
}

impl ParamDescriptor {
    /// Create a descriptor
    pub fn new(index: usize, name: impl Into<String>, ty: ParamType) -> Self {
        Self {
            index,
            name: name.into(),
            ty,
        }
    }
}

impl fmt::Display for ParamDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.ty)
    }
}
