//! Resolution configuration types

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CACHE_SHARED_COMPONENTS, DEFAULT_MEMOIZE_RESOLUTION};

/// Resolution behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    /// Cache shared-scope components per (tag kind, type)
    pub cache_shared_components: bool,

    /// Memoize domain searches within a batch
    pub memoize: bool,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            cache_shared_components: DEFAULT_CACHE_SHARED_COMPONENTS,
            memoize: DEFAULT_MEMOIZE_RESOLUTION,
        }
    }
}
