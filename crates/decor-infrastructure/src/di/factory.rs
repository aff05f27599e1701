//! Component Factory
//!
//! Turns a declaration into a component: domain-search the component
//! kind's tag, expose the provenance chain to the supplier context, pick the
//! implementation type the tag points to, and bind its most specific
//! satisfiable constructor.
//!
//! ## Supplier order
//!
//! | Order | Rule |
//! |-------|------|
//! | 1 | caller overrides |
//! | 2 | tag attributes by parameter name, chain root first |
//! | 3 | chain tags for `Tag(kind)` parameters |
//! | 4 | the declaration for `Declaration` parameters |
//! | 5 | the factory's default context |

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use dashmap::DashMap;
use decor_application::domain_services::{
    ComponentBinding, ComponentScope, ConstructorResolver, DecorationGraph, DomainResolver,
    ResolutionSession, SupplierContext, SupplierRule, predicates,
};
use decor_application::ports::registry::ComponentRegistry;
use decor_domain::error::{Error, Result};
use decor_domain::value_objects::{
    Declaration, ParamDescriptor, ParamType, ProvenanceChain, Supplied, Tag, TagKind,
};
use serde_json::Value;
use tracing::{debug, trace};

use crate::config::ComponentKindConfig;

/// A family of components discovered through one meta tag kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentKind {
    name: String,
    tag_kind: TagKind,
    points_to: Option<String>,
}

impl ComponentKind {
    /// Component kind `name` found through tags of `tag_kind`
    pub fn new(name: impl Into<String>, tag_kind: impl Into<TagKind>) -> Self {
        Self {
            name: name.into(),
            tag_kind: tag_kind.into(),
            points_to: None,
        }
    }

    /// Attribute on the found tag naming the implementation type
    pub fn pointing_to(mut self, attribute: impl Into<String>) -> Self {
        self.points_to = Some(attribute.into());
        self
    }

    /// Component kind from its configuration section
    pub fn from_config(name: impl Into<String>, config: &ComponentKindConfig) -> Self {
        Self {
            name: name.into(),
            tag_kind: TagKind::new(config.tag_kind.clone()),
            points_to: config.points_to.clone(),
        }
    }

    /// Family name (e.g. "validator")
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Tag kind searched for
    pub fn tag_kind(&self) -> &TagKind {
        &self.tag_kind
    }

    /// Points-to attribute, if any
    pub fn points_to(&self) -> Option<&str> {
        self.points_to.as_deref()
    }

    /// Implementation type selected by a found tag
    ///
    /// The points-to attribute when present, else the tag's own kind name.
    pub fn type_name_for(&self, tag: &Tag) -> String {
        self.points_to
            .as_deref()
            .and_then(|attribute| tag.attribute_str(attribute))
            .map_or_else(|| tag.kind.as_str().to_string(), str::to_string)
    }
}

/// Identity of a shared component
///
/// Two requests share an instance only when they reach the same
/// implementation type from the same root tag kind through the same
/// constructor with equal arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    tag_kind: TagKind,
    type_name: String,
    constructor: usize,
    arguments: Vec<String>,
}

impl CacheKey {
    /// Key for a binding, or `None` when an argument has no stable identity
    fn for_binding<C: ?Sized>(
        chain: &ProvenanceChain,
        binding: &ComponentBinding<C>,
    ) -> Option<Self> {
        let arguments = binding
            .arguments()
            .iter()
            .map(|(_, value)| value.fingerprint())
            .collect::<Option<Vec<_>>>()?;
        Some(Self {
            tag_kind: chain.root().kind.clone(),
            type_name: binding.type_name().to_string(),
            constructor: binding.constructor_index(),
            arguments,
        })
    }
}

/// Cached instance slot; filled at most once, left empty when creation fails
type CacheSlot<C> = Arc<Mutex<Option<Arc<C>>>>;

/// Builds components of one family from declarations and tags
pub struct ComponentFactory<C: ?Sized> {
    kind: ComponentKind,
    resolver: DomainResolver,
    registry: Arc<ComponentRegistry<C>>,
    constructors: ConstructorResolver,
    defaults: SupplierContext,
    cache: DashMap<CacheKey, CacheSlot<C>>,
    cache_enabled: bool,
}

impl<C: ?Sized + Send + Sync + 'static> ComponentFactory<C> {
    /// Create a factory with caching enabled and an empty default context
    pub fn new(
        kind: ComponentKind,
        graph: DecorationGraph,
        registry: Arc<ComponentRegistry<C>>,
    ) -> Self {
        Self {
            kind,
            resolver: DomainResolver::new(graph),
            registry,
            constructors: ConstructorResolver::new(),
            defaults: SupplierContext::new(),
            cache: DashMap::new(),
            cache_enabled: true,
        }
    }

    /// Rules consulted after everything derived from the tag
    pub fn with_defaults(mut self, defaults: SupplierContext) -> Self {
        self.defaults = defaults;
        self
    }

    /// Enable or disable caching of shared-scope components
    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache_enabled = enabled;
        self
    }

    /// The component kind served
    pub fn kind(&self) -> &ComponentKind {
        &self.kind
    }

    /// The domain resolver used for searches
    pub fn resolver(&self) -> &DomainResolver {
        &self.resolver
    }

    /// The registry of implementation types
    pub fn registry(&self) -> &ComponentRegistry<C> {
        &self.registry
    }

    /// Component for a declaration, or `None` when no tag of the kind is reachable
    pub fn create(&self, declaration: &Declaration) -> Result<Option<Arc<C>>> {
        let chain = self.resolver.resolve(declaration, &self.kind.tag_kind);
        self.create_from(chain, Some(declaration), None)
    }

    /// Like [`create`](Self::create) with caller rules taking precedence
    pub fn create_with(
        &self,
        declaration: &Declaration,
        overrides: &SupplierContext,
    ) -> Result<Option<Arc<C>>> {
        let chain = self.resolver.resolve(declaration, &self.kind.tag_kind);
        self.create_from(chain, Some(declaration), Some(overrides))
    }

    /// Like [`create`](Self::create), reusing domain searches memoized in `session`
    pub fn create_in(
        &self,
        session: &mut ResolutionSession,
        declaration: &Declaration,
    ) -> Result<Option<Arc<C>>> {
        let chain = self
            .resolver
            .resolve_in(session, declaration, &self.kind.tag_kind);
        self.create_from(chain, Some(declaration), None)
    }

    /// Component for a bare tag, searching from the tag itself
    ///
    /// No declaration is available, so `Declaration` parameters stay unresolved.
    pub fn create_for_tag(
        &self,
        tag: &Tag,
        overrides: Option<&SupplierContext>,
    ) -> Result<Option<Arc<C>>> {
        let chain = self
            .resolver
            .resolve_from_tags(std::slice::from_ref(tag), &self.kind.tag_kind);
        self.create_from(chain, None, overrides)
    }

    /// Number of cached shared components
    pub fn cached_len(&self) -> usize {
        self.cache
            .iter()
            .filter(|slot| lock_slot(slot.value()).is_some())
            .count()
    }

    /// Drop every cached shared component
    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    fn create_from(
        &self,
        chain: Option<ProvenanceChain>,
        declaration: Option<&Declaration>,
        overrides: Option<&SupplierContext>,
    ) -> Result<Option<Arc<C>>> {
        match chain {
            Some(chain) => self.build(&chain, declaration, overrides).map(Some),
            None => Ok(None),
        }
    }

    fn build(
        &self,
        chain: &ProvenanceChain,
        declaration: Option<&Declaration>,
        overrides: Option<&SupplierContext>,
    ) -> Result<Arc<C>> {
        let type_name = self.kind.type_name_for(chain.leaf());
        let descriptor = self.registry.get(&type_name).ok_or_else(|| {
            Error::unknown_component_type(type_name.clone(), chain.leaf().kind.as_str())
        })?;

        let context = self.context_for(chain, declaration, overrides);
        let binding = self.constructors.resolve(&*descriptor, &context)?;

        if !self.cache_enabled || descriptor.scope() != ComponentScope::Shared {
            return self.instantiate(chain, &binding);
        }
        let Some(key) = CacheKey::for_binding(chain, &binding) else {
            trace!(component = %type_name, "Object argument, shared component not cached");
            return self.instantiate(chain, &binding);
        };

        // Only the slot stays locked while building
        let slot = Arc::clone(self.cache.entry(key).or_default().value());
        let mut cached = lock_slot(&slot);
        if let Some(component) = cached.as_ref() {
            trace!(component = %type_name, "Shared component cache hit");
            return Ok(Arc::clone(component));
        }
        let component = self.instantiate(chain, &binding)?;
        *cached = Some(Arc::clone(&component));
        Ok(component)
    }

    fn instantiate(
        &self,
        chain: &ProvenanceChain,
        binding: &ComponentBinding<C>,
    ) -> Result<Arc<C>> {
        debug!(
            component = %binding.type_name(),
            kind = %self.kind.name,
            chain = %chain,
            constructor = binding.constructor_index(),
            "Creating component"
        );
        binding.instantiate()
    }

    fn context_for(
        &self,
        chain: &ProvenanceChain,
        declaration: Option<&Declaration>,
        overrides: Option<&SupplierContext>,
    ) -> SupplierContext {
        let mut derived = SupplierContext::new();

        for tag in chain {
            for (name, value) in &tag.attributes {
                let supplied = Supplied::Value(value.clone());
                derived.push(SupplierRule::new(
                    format!("@{}.{name}", tag.kind),
                    predicates::named_accepting(name.clone(), value),
                    Arc::new(move |_: &ParamDescriptor| supplied.clone()),
                ));
            }
        }

        let tags: Arc<Vec<Tag>> = Arc::new(chain.as_slice().to_vec());
        let available = Arc::clone(&tags);
        derived.push(SupplierRule::new(
            "provenance tag",
            Arc::new(move |param: &ParamDescriptor| match &param.ty {
                ParamType::Tag(kind) => available.iter().any(|tag| tag.is(kind)),
                _ => false,
            }),
            Arc::new(move |param: &ParamDescriptor| {
                let found = match &param.ty {
                    ParamType::Tag(kind) => tags.iter().find(|tag| tag.is(kind)),
                    _ => None,
                };
                found.cloned().map_or(Supplied::Value(Value::Null), Supplied::Tag)
            }),
        ));

        if let Some(declaration) = declaration {
            let shared = Arc::new(declaration.clone());
            derived.push(SupplierRule::new(
                "declaration",
                predicates::of_type(ParamType::Declaration),
                Arc::new(move |_: &ParamDescriptor| Supplied::Declaration(Arc::clone(&shared))),
            ));
        }

        overrides
            .cloned()
            .unwrap_or_default()
            .append(derived)
            .append(self.defaults.clone())
    }
}

fn lock_slot<C: ?Sized>(slot: &Mutex<Option<Arc<C>>>) -> MutexGuard<'_, Option<Arc<C>>> {
    slot.lock().unwrap_or_else(PoisonError::into_inner)
}

impl<C: ?Sized + Send + Sync + 'static> std::fmt::Debug for ComponentFactory<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentFactory")
            .field("kind", &self.kind)
            .field("registered", &self.registry.len())
            .field("cached", &self.cached_len())
            .field("cache_enabled", &self.cache_enabled)
            .finish()
    }
}
