//! Infrastructure layer constants
//!
//! Contains constants that are part of the infrastructure implementation.
//! Tag kind and component kind names are defined in `decor_domain::constants`.

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "decor.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "decor";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "DECOR";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// RESOLUTION CONSTANTS
// ============================================================================

/// Shared-scope components are cached unless disabled
pub const DEFAULT_CACHE_SHARED_COMPONENTS: bool = true;

/// Batch validation memoizes domain searches unless disabled
pub const DEFAULT_MEMOIZE_RESOLUTION: bool = true;

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "DECOR_LOG";

/// File name stem for rolling log files
pub const LOG_FILE_STEM: &str = "decor";
