//! Tag kind identity and tag kind definitions

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::tag::Tag;

/// Identity of a tag kind
///
/// Two tags are of the same kind when their `TagKind`s compare equal.
/// Kinds are plain names; the catalog owns their definitions.
///
/// # Example
///
/// ```
/// use decor_domain::value_objects::TagKind;
///
/// let kind = TagKind::from("Range");
/// assert_eq!(kind.as_str(), "Range");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagKind(String);

impl TagKind {
    /// Create a tag kind from its name
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Name of the tag kind
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TagKind {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl From<String> for TagKind {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Definition of a tag kind
///
/// Describes the tag kind's own defining type: the tags attached to it
/// (its meta tags) and the default values of its attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagKindDef {
    /// Kind being defined
    pub name: TagKind,

    /// Human-readable description
    #[serde(default)]
    pub description: String,

    /// Tags attached to the kind itself, in declaration order
    #[serde(default)]
    pub tags: Vec<Tag>,

    /// Attribute values used when a tag of this kind omits them
    #[serde(default)]
    pub defaults: BTreeMap<String, Value>,
}

impl TagKindDef {
    /// Create an empty definition for a kind
    pub fn new(name: impl Into<TagKind>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            tags: Vec::new(),
            defaults: BTreeMap::new(),
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach a meta tag to the kind
    pub fn with_tag(mut self, tag: Tag) -> Self {
        self.tags.push(tag);
        self
    }

    /// Declare a default attribute value
    pub fn with_default(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.defaults.insert(key.into(), value.into());
        self
    }

    /// Fill the attributes a tag of this kind leaves unset
    pub fn complete(&self, tag: &Tag) -> Tag {
        if self.defaults.is_empty() {
            return tag.clone();
        }
        let mut completed = tag.clone();
        for (key, value) in &self.defaults {
            completed
                .attributes
                .entry(key.clone())
                .or_insert_with(|| value.clone());
        }
        completed
    }
}
