//! Component Ports
//!
//! Interfaces of the runtime components the engine constructs from tags.
//! Concrete implementations live in `decor-providers` and are reached
//! through the component registries, never named directly by callers.

use std::fmt::Debug;

use serde_json::Value;

use crate::error::Result;

/// Checks a value against a constraint
pub trait Validator: Send + Sync + Debug {
    /// Registered type name of the validator
    fn component_name(&self) -> &str;

    /// Whether the value satisfies the constraint
    fn is_valid(&self, value: &Value) -> bool;
}

/// Converts values to and from display text
pub trait Formatter: Send + Sync + Debug {
    /// Registered type name of the formatter
    fn component_name(&self) -> &str;

    /// Render a value as text
    fn format(&self, value: &Value) -> Result<String>;

    /// Parse text back into a value
    fn parse(&self, text: &str) -> Result<Value>;
}
