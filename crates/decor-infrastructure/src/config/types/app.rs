//! Main application configuration

use serde::{Deserialize, Serialize};

use super::{CatalogConfig, ComponentsConfig, LoggingConfig, ResolutionConfig};

/// Root configuration
///
/// Every section has defaults, so an empty TOML file is a valid configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Resolution behaviour
    #[serde(default)]
    pub resolution: ResolutionConfig,

    /// Metadata catalog sources
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Component kinds served by the engine
    #[serde(default)]
    pub components: ComponentsConfig,
}
