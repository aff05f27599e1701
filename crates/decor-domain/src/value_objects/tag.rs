//! Tags attached to declarations and to tag kinds

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::kind::TagKind;

/// An attached metadata instance
///
/// A tag carries its kind and the key/value attributes it was declared
/// with. Attribute values are JSON values so tags can be written in
/// catalog files as well as built in code.
///
/// # Example
///
/// ```
/// use decor_domain::value_objects::Tag;
///
/// let range = Tag::new("Range").with("min", 1).with("max", 10);
/// assert_eq!(range.kind.as_str(), "Range");
/// assert_eq!(range.attribute("max"), Some(&serde_json::json!(10)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Kind of the tag
    pub kind: TagKind,

    /// Declared attribute values
    #[serde(default)]
    pub attributes: BTreeMap<String, Value>,
}

impl Tag {
    /// Create a tag without attributes
    pub fn new(kind: impl Into<TagKind>) -> Self {
        Self {
            kind: kind.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Set an attribute value
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Whether the tag is of the given kind
    pub fn is(&self, kind: &TagKind) -> bool {
        &self.kind == kind
    }

    /// Look up an attribute value
    pub fn attribute(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// Look up an attribute holding a string
    pub fn attribute_str(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).and_then(Value::as_str)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.kind)?;
        if self.attributes.is_empty() {
            return Ok(());
        }
        let rendered: Vec<String> = self
            .attributes
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect();
        write!(f, "({})", rendered.join(","))
    }
}
