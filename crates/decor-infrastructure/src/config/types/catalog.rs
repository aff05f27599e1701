//! Metadata catalog configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Where tag kinds and declarations come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// TOML catalog file loaded after the built-ins
    pub path: Option<PathBuf>,

    /// Seed the catalog with the linked built-in tag kinds
    pub include_builtins: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: None,
            include_builtins: true,
        }
    }
}
