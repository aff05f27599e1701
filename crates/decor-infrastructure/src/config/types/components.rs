//! Component kind configuration types

use decor_domain::constants::{
    CONSTRAINT_POINTS_TO, CONSTRAINT_TAG_KIND, FORMAT_POINTS_TO, FORMAT_TAG_KIND,
};
use serde::{Deserialize, Serialize};

/// How a component family is discovered
///
/// `tag_kind` is the meta tag kind searched for on declarations;
/// `points_to` names the attribute on that tag holding the implementation
/// type name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentKindConfig {
    /// Tag kind searched for
    pub tag_kind: String,

    /// Attribute naming the implementation type
    #[serde(default)]
    pub points_to: Option<String>,
}

impl ComponentKindConfig {
    /// Create a component kind configuration
    pub fn new(tag_kind: impl Into<String>, points_to: Option<&str>) -> Self {
        Self {
            tag_kind: tag_kind.into(),
            points_to: points_to.map(str::to_string),
        }
    }
}

/// Component families served by the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentsConfig {
    /// Validators, found through `@Constraint(validated_by = ...)`
    pub validator: ComponentKindConfig,

    /// Formatters, found through `@Format(formatted_by = ...)`
    pub formatter: ComponentKindConfig,
}

impl Default for ComponentsConfig {
    fn default() -> Self {
        Self {
            validator: ComponentKindConfig::new(CONSTRAINT_TAG_KIND, Some(CONSTRAINT_POINTS_TO)),
            formatter: ComponentKindConfig::new(FORMAT_TAG_KIND, Some(FORMAT_POINTS_TO)),
        }
    }
}
