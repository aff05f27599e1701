//! Configuration types module

pub mod app;
pub mod catalog;
pub mod components;
pub mod logging;
pub mod resolution;

// Re-export main types
pub use app::AppConfig;
pub use catalog::CatalogConfig;
pub use components::{ComponentKindConfig, ComponentsConfig};
pub use logging::LoggingConfig;
pub use resolution::ResolutionConfig;
