//! Error handling types
//!
//! Absence of a tag or component is not an error in this crate; it is
//! expressed as `Option::None` by the operations that can observe it.
//! The variants below cover the failures that must be surfaced.

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the decoration resolution engine
#[derive(Error, Debug)]
pub enum Error {
    /// A tag was found but no constructor of the target type could be satisfied
    #[error("Cannot create component `{target}`: {}", .reasons.join("; "))]
    Creation {
        /// Name of the component type that could not be built
        target: String,
        /// One entry per rejected constructor, naming the unresolved parameters
        reasons: Vec<String>,
    },

    /// A tag points to a component type that is not registered
    #[error("Unknown component type `{type_name}` referenced by tag `{tag_kind}`")]
    UnknownComponentType {
        /// Component type named by the tag
        type_name: String,
        /// Kind of the tag carrying the reference
        tag_kind: String,
    },

    /// Invalid argument provided to a function
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument
        message: String,
    },

    /// Resource not found error
    #[error("Not found: {resource}")]
    NotFound {
        /// The resource that was not found
        resource: String,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O operation error
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// JSON conversion error
    #[error("JSON conversion error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

// Resolution error creation methods
impl Error {
    /// Create a creation failure for a component type
    pub fn creation<S: Into<String>>(target: S, reasons: Vec<String>) -> Self {
        Self::Creation {
            target: target.into(),
            reasons,
        }
    }

    /// Create an unknown component type error
    pub fn unknown_component_type<S: Into<String>, K: Into<String>>(
        type_name: S,
        tag_kind: K,
    ) -> Self {
        Self::UnknownComponentType {
            type_name: type_name.into(),
            tag_kind: tag_kind.into(),
        }
    }

    /// Whether this error means "a tag was found but the component could not be built"
    pub fn is_creation_failure(&self) -> bool {
        matches!(
            self,
            Self::Creation { .. } | Self::UnknownComponentType { .. }
        )
    }
}

// Basic error creation methods
impl Error {
    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

// Configuration and I/O error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an I/O error
    pub fn io<S: Into<String>>(message: S) -> Self {
        Self::Io {
            message: message.into(),
            source: None,
        }
    }

    /// Create an I/O error with source
    pub fn io_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Io {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}
