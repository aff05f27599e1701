//! Engine Bootstrap
//!
//! Composition root: builds the metadata catalog from configuration and
//! wires one component factory per built-in component family.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let config = ConfigLoader::new().load()?;
//! let engine = bootstrap(&config)?;
//!
//! let quantity = engine.catalog().require_declaration("Order.quantity")?;
//! assert!(engine.validate(quantity, &json!(5))?);
//! ```

use std::sync::Arc;

use decor_application::domain_services::{DecorationGraph, ResolutionSession};
use decor_application::ports::registry::{formatter_registry, validator_registry};
use decor_domain::constants::{FORMATTER_COMPONENT_KIND, VALIDATOR_COMPONENT_KIND};
use decor_domain::error::Result;
use decor_domain::ports::{Formatter, Validator};
use decor_domain::value_objects::Declaration;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::di::factory::{ComponentFactory, ComponentKind};
use crate::metadata::MetadataCatalog;

/// A ready-to-use resolution engine
pub struct Engine {
    config: Arc<AppConfig>,
    catalog: Arc<MetadataCatalog>,
    validators: ComponentFactory<dyn Validator>,
    formatters: ComponentFactory<dyn Formatter>,
}

/// Build an engine from configuration
///
/// The catalog is seeded with the linked built-in tag kinds (unless
/// disabled), then the configured catalog file is merged on top.
pub fn bootstrap(config: &AppConfig) -> Result<Engine> {
    let mut catalog = if config.catalog.include_builtins {
        MetadataCatalog::with_builtins()
    } else {
        MetadataCatalog::new()
    };
    if let Some(path) = &config.catalog.path {
        catalog.load_file(path)?;
    }
    Ok(Engine::new(config.clone(), catalog))
}

impl Engine {
    /// Wire factories over an already assembled catalog
    pub fn new(config: AppConfig, catalog: MetadataCatalog) -> Self {
        let catalog = Arc::new(catalog);
        let graph = DecorationGraph::new(catalog.clone());
        let cache = config.resolution.cache_shared_components;

        let validators = ComponentFactory::new(
            ComponentKind::from_config(VALIDATOR_COMPONENT_KIND, &config.components.validator),
            graph.clone(),
            Arc::new(validator_registry()),
        )
        .with_cache(cache);
        let formatters = ComponentFactory::new(
            ComponentKind::from_config(FORMATTER_COMPONENT_KIND, &config.components.formatter),
            graph,
            Arc::new(formatter_registry()),
        )
        .with_cache(cache);

        info!(
            kinds = catalog.kind_count(),
            declarations = catalog.declarations().len(),
            validators = validators.registry().len(),
            formatters = formatters.registry().len(),
            "Engine ready"
        );

        Self {
            config: Arc::new(config),
            catalog,
            validators,
            formatters,
        }
    }

    /// Configuration the engine was built from
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// The metadata catalog
    pub fn catalog(&self) -> &MetadataCatalog {
        &self.catalog
    }

    /// Validator factory
    pub fn validators(&self) -> &ComponentFactory<dyn Validator> {
        &self.validators
    }

    /// Formatter factory
    pub fn formatters(&self) -> &ComponentFactory<dyn Formatter> {
        &self.formatters
    }

    /// Whether `value` passes the validator resolved for a declaration
    ///
    /// A declaration without a validator accepts every value.
    pub fn validate(&self, declaration: &Declaration, value: &Value) -> Result<bool> {
        Ok(self
            .validators
            .create(declaration)?
            .is_none_or(|validator| validator.is_valid(value)))
    }

    /// [`validate`](Self::validate) for a catalog declaration
    pub fn validate_id(&self, id: &str, value: &Value) -> Result<bool> {
        self.validate(self.catalog.require_declaration(id)?, value)
    }

    /// Validate many values, one verdict per entry
    ///
    /// With memoization enabled, repeated declarations are searched once.
    pub fn validate_all(&self, entries: &[(&Declaration, Value)]) -> Result<Vec<bool>> {
        let mut session = ResolutionSession::new();
        let mut verdicts = Vec::with_capacity(entries.len());
        for (declaration, value) in entries {
            let validator = if self.config.resolution.memoize {
                self.validators.create_in(&mut session, declaration)?
            } else {
                self.validators.create(declaration)?
            };
            verdicts.push(validator.is_none_or(|validator| validator.is_valid(value)));
        }
        debug!(
            entries = entries.len(),
            memo_hits = session.memo_hits(),
            "Batch validated"
        );
        Ok(verdicts)
    }

    /// Render `value` with the formatter resolved for a declaration
    ///
    /// Without a formatter the value's JSON text is returned.
    pub fn format(&self, declaration: &Declaration, value: &Value) -> Result<String> {
        match self.formatters.create(declaration)? {
            Some(formatter) => formatter.format(value),
            None => Ok(match value {
                Value::String(text) => text.clone(),
                other => other.to_string(),
            }),
        }
    }

    /// Parse text with the formatter resolved for a declaration
    ///
    /// Without a formatter the text is kept as a JSON string.
    pub fn parse(&self, declaration: &Declaration, text: &str) -> Result<Value> {
        match self.formatters.create(declaration)? {
            Some(formatter) => formatter.parse(text),
            None => Ok(Value::String(text.to_string())),
        }
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("catalog", &self.catalog)
            .field("validators", &self.validators)
            .field("formatters", &self.formatters)
            .finish()
    }
}
