//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the resolution engine.
//!
//! ### Configuration & Composition
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | figment-based configuration (defaults, TOML, environment) |
//! | [`constants`] | Centralized configuration constants |
//! | [`di`] | Component factories and the bootstrapped [`Engine`](di::Engine) |
//!
//! ### Metadata
//! | Module | Description |
//! |--------|-------------|
//! | [`metadata`] | In-memory catalog of tag kinds and declarations, TOML catalog files |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

// Force linkme registration of all providers from decor-providers
extern crate decor_providers;

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod logging;
pub mod metadata;

// Re-export commonly used types
pub use di::{ComponentFactory, ComponentKind, Engine, bootstrap};
pub use error_ext::ErrorContext;
pub use metadata::MetadataCatalog;
