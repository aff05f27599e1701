//! Values produced by suppliers for constructor parameters

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use super::declaration::Declaration;
use super::tag::Tag;

/// A value able to satisfy a constructor parameter
#[derive(Clone)]
pub enum Supplied {
    /// Plain attribute value
    Value(Value),
    /// The decorated declaration
    Declaration(Arc<Declaration>),
    /// A tag from the provenance chain
    Tag(Tag),
    /// Any shared object, recovered by downcasting
    Object(Arc<dyn Any + Send + Sync>),
}

impl Supplied {
    /// Wrap an arbitrary shared object
    pub fn object<T: Any + Send + Sync>(value: T) -> Self {
        Self::Object(Arc::new(value))
    }

    /// Stable text identifying the argument, used in shared-cache keys
    ///
    /// Objects have no such identity and yield `None`.
    pub fn fingerprint(&self) -> Option<String> {
        match self {
            Self::Value(value) => Some(value.to_string()),
            Self::Declaration(declaration) => Some(format!("<{}>", declaration.id)),
            Self::Tag(tag) => Some(tag.to_string()),
            Self::Object(_) => None,
        }
    }

    /// Borrow the JSON value, if this is one
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl From<Value> for Supplied {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

impl From<Tag> for Supplied {
    fn from(tag: Tag) -> Self {
        Self::Tag(tag)
    }
}

impl From<Arc<Declaration>> for Supplied {
    fn from(declaration: Arc<Declaration>) -> Self {
        Self::Declaration(declaration)
    }
}

impl fmt::Debug for Supplied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
            Self::Declaration(declaration) => {
                f.debug_tuple("Declaration").field(&declaration.id).finish()
            }
            Self::Tag(tag) => f.debug_tuple("Tag").field(&tag.kind).finish(),
            Self::Object(_) => f.write_str("Object(..)"),
        }
    }
}
