//! # Decor - Built-in Providers
//!
//! Tag kinds and component types that ship with the engine. Every item
//! registers itself through a `linkme` distributed slice declared in
//! `decor-application`; nothing here is called by name from the engine.
//!
//! ## Provider Categories
//!
//! | Category | Port | Implementations |
//! |----------|------|-----------------|
//! | Validators | `Validator` | Range, Length, Pattern, Required, TypeCheck |
//! | Formatters | `Formatter` | Decimal, Case |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! decor-providers = { version = "0.1", default-features = false, features = ["validators"] }
//! ```
//!
//! Linking this crate is enough to make its registrations visible. Test
//! binaries that do not otherwise use it should force linkage with
//! `extern crate decor_providers;`.

pub use decor_domain::error::{Error, Result};
pub use decor_domain::ports::{Formatter, Validator};

/// Validator implementations and the `Constraint` meta kind
#[cfg(feature = "validators")]
pub mod validators;

/// Formatter implementations and the `Format` meta kind
#[cfg(feature = "formatters")]
pub mod formatters;
