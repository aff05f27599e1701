//! Domain layer constants
//!
//! Names shared between the built-in tag kinds, the component kinds that
//! consume them and the default configuration. Infrastructure-specific
//! constants remain in `decor_infrastructure::constants`.

// ============================================================================
// META TAG KINDS
// ============================================================================

/// Meta tag kind marking a tag kind as a validation constraint
pub const CONSTRAINT_TAG_KIND: &str = "Constraint";

/// Attribute of [`CONSTRAINT_TAG_KIND`] naming the validator type
pub const CONSTRAINT_POINTS_TO: &str = "validated_by";

/// Meta tag kind marking a tag kind as a formatting directive
pub const FORMAT_TAG_KIND: &str = "Format";

/// Attribute of [`FORMAT_TAG_KIND`] naming the formatter type
pub const FORMAT_POINTS_TO: &str = "formatted_by";

// ============================================================================
// COMPONENT KINDS
// ============================================================================

/// Component kind name for validators
pub const VALIDATOR_COMPONENT_KIND: &str = "validator";

/// Component kind name for formatters
pub const FORMATTER_COMPONENT_KIND: &str = "formatter";
