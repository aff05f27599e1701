//! Constructor Resolver
//!
//! Picks, among a component type's constructors, the one whose parameters
//! can all be supplied by a [`SupplierContext`].
//!
//! ## Ranking
//!
//! 1. A constructor is a candidate only if every parameter resolves to an
//!    argument of the parameter's type.
//! 2. The candidate with the most parameters wins.
//! 3. On equal parameter counts the first declared candidate wins.
//!
//! A type whose constructors all fail yields [`Error::Creation`] listing,
//! per constructor, the parameters nothing could supply or that were
//! supplied with the wrong type.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use decor_domain::error::{Error, Result};
use decor_domain::value_objects::{Declaration, ParamDescriptor, ParamType, Supplied, Tag};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, trace};

use super::supplier::SupplierContext;

/// Whether instances of a component type may be shared
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ComponentScope {
    /// Stateless; one instance may serve every caller
    Shared,
    /// A fresh instance per request
    #[default]
    Prototype,
}

/// Build function of a constructor
pub type BuildFn<C> = Arc<dyn Fn(&Arguments) -> Result<Arc<C>> + Send + Sync>;

/// One way of constructing a component
pub struct ConstructorDef<C: ?Sized> {
    params: Vec<ParamDescriptor>,
    build: BuildFn<C>,
}

impl<C: ?Sized> ConstructorDef<C> {
    /// Create a constructor from `(name, type)` pairs in declaration order
    pub fn new<F>(params: Vec<(&str, ParamType)>, build: F) -> Self
    where
        F: Fn(&Arguments) -> Result<Arc<C>> + Send + Sync + 'static,
    {
        let params = params
            .into_iter()
            .enumerate()
            .map(|(index, (name, ty))| ParamDescriptor::new(index, name, ty))
            .collect();
        Self {
            params,
            build: Arc::new(build),
        }
    }

    /// Create a zero-parameter constructor
    pub fn nullary<F>(build: F) -> Self
    where
        F: Fn() -> Result<Arc<C>> + Send + Sync + 'static,
    {
        Self::new(Vec::new(), move |_| build())
    }

    /// Parameters in declaration order
    pub fn params(&self) -> &[ParamDescriptor] {
        &self.params
    }

    /// Number of parameters
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Rendered parameter list, e.g. `(min: integer, max: integer)`
    pub fn signature(&self) -> String {
        let params: Vec<String> = self.params.iter().map(ToString::to_string).collect();
        format!("({})", params.join(", "))
    }
}

impl<C: ?Sized> Clone for ConstructorDef<C> {
    fn clone(&self) -> Self {
        Self {
            params: self.params.clone(),
            build: Arc::clone(&self.build),
        }
    }
}

impl<C: ?Sized> fmt::Debug for ConstructorDef<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.signature())
    }
}

/// A constructible component type
pub struct TypeDescriptor<C: ?Sized> {
    name: String,
    scope: ComponentScope,
    constructors: Vec<ConstructorDef<C>>,
}

impl<C: ?Sized> TypeDescriptor<C> {
    /// Describe a prototype-scoped type with no constructors yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            scope: ComponentScope::Prototype,
            constructors: Vec::new(),
        }
    }

    /// Mark instances as shareable
    pub fn shared(mut self) -> Self {
        self.scope = ComponentScope::Shared;
        self
    }

    /// Add a constructor; declaration order is the tie-break order
    pub fn with_constructor(mut self, constructor: ConstructorDef<C>) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Type name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declared scope
    pub fn scope(&self) -> ComponentScope {
        self.scope
    }

    /// Constructors in declaration order
    pub fn constructors(&self) -> &[ConstructorDef<C>] {
        &self.constructors
    }
}

impl<C: ?Sized> fmt::Debug for TypeDescriptor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeDescriptor")
            .field("name", &self.name)
            .field("scope", &self.scope)
            .field("constructors", &self.constructors)
            .finish()
    }
}

/// Resolved arguments handed to a build function
#[derive(Debug, Clone)]
pub struct Arguments {
    params: Vec<ParamDescriptor>,
    values: Vec<Supplied>,
}

impl Arguments {
    fn new(params: Vec<ParamDescriptor>, values: Vec<Supplied>) -> Self {
        Self { params, values }
    }

    /// Number of arguments
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether there are no arguments
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// `(descriptor, value)` pairs in parameter order
    pub fn iter(&self) -> impl Iterator<Item = (&ParamDescriptor, &Supplied)> {
        self.params.iter().zip(self.values.iter())
    }

    /// Argument supplied for the parameter named `name`
    pub fn get(&self, name: &str) -> Result<&Supplied> {
        self.iter()
            .find(|(param, _)| param.name == name)
            .map(|(_, value)| value)
            .ok_or_else(|| Error::invalid_argument(format!("No argument named `{name}`")))
    }

    /// JSON argument for `name`
    pub fn raw_value(&self, name: &str) -> Result<&Value> {
        match self.get(name)? {
            Supplied::Value(value) => Ok(value),
            other => Err(mismatch(name, "a value", other)),
        }
    }

    /// JSON argument for `name`, deserialized into `T`
    pub fn value<T: DeserializeOwned>(&self, name: &str) -> Result<T> {
        let value = self.raw_value(name)?;
        serde_json::from_value(value.clone()).map_err(|e| {
            Error::invalid_argument(format!("Argument `{name}` cannot be converted: {e}"))
        })
    }

    /// Declaration argument for `name`
    pub fn declaration(&self, name: &str) -> Result<Arc<Declaration>> {
        match self.get(name)? {
            Supplied::Declaration(declaration) => Ok(Arc::clone(declaration)),
            other => Err(mismatch(name, "a declaration", other)),
        }
    }

    /// Tag argument for `name`
    pub fn tag(&self, name: &str) -> Result<&Tag> {
        match self.get(name)? {
            Supplied::Tag(tag) => Ok(tag),
            other => Err(mismatch(name, "a tag", other)),
        }
    }

    /// Object argument for `name`, downcast to `T`
    pub fn object<T: Any + Send + Sync>(&self, name: &str) -> Result<Arc<T>> {
        match self.get(name)? {
            Supplied::Object(object) => Arc::clone(object).downcast::<T>().map_err(|_| {
                Error::invalid_argument(format!(
                    "Argument `{name}` is not a `{}`",
                    std::any::type_name::<T>()
                ))
            }),
            other => Err(mismatch(name, "an object", other)),
        }
    }
}

fn mismatch(name: &str, expected: &str, found: &Supplied) -> Error {
    Error::invalid_argument(format!(
        "Argument `{name}` should be {expected}, found {found:?}"
    ))
}

/// The chosen constructor together with its resolved arguments
pub struct ComponentBinding<C: ?Sized> {
    type_name: String,
    constructor_index: usize,
    constructor: ConstructorDef<C>,
    arguments: Arguments,
}

impl<C: ?Sized> ComponentBinding<C> {
    /// Name of the bound type
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Position of the chosen constructor in declaration order
    pub fn constructor_index(&self) -> usize {
        self.constructor_index
    }

    /// The chosen constructor
    pub fn constructor(&self) -> &ConstructorDef<C> {
        &self.constructor
    }

    /// Arguments, one per parameter
    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// Invoke the chosen constructor
    ///
    /// A failure inside the build function is reported as a creation
    /// failure of the bound type.
    pub fn instantiate(&self) -> Result<Arc<C>> {
        (self.constructor.build)(&self.arguments).map_err(|e| match e {
            Error::Creation { .. } => e,
            other => Error::creation(
                self.type_name.clone(),
                vec![format!("{} failed: {other}", self.constructor.signature())],
            ),
        })
    }
}

impl<C: ?Sized> fmt::Debug for ComponentBinding<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentBinding")
            .field("type_name", &self.type_name)
            .field("constructor", &self.constructor)
            .field("arguments", &self.arguments.values)
            .finish()
    }
}

/// Ranked constructor selection
#[derive(Debug, Clone, Copy, Default)]
pub struct ConstructorResolver;

impl ConstructorResolver {
    /// Create a resolver
    pub fn new() -> Self {
        Self
    }

    /// Bind the most specific satisfiable constructor of `descriptor`
    pub fn resolve<C: ?Sized>(
        &self,
        descriptor: &TypeDescriptor<C>,
        context: &SupplierContext,
    ) -> Result<ComponentBinding<C>> {
        if descriptor.constructors.is_empty() {
            return Err(Error::creation(
                descriptor.name.clone(),
                vec!["no constructors declared".to_string()],
            ));
        }

        let mut best: Option<(usize, Vec<Supplied>)> = None;
        let mut reasons = Vec::new();

        for (index, constructor) in descriptor.constructors.iter().enumerate() {
            match bind_params(constructor, context) {
                Ok(values) => {
                    trace!(
                        component = %descriptor.name,
                        constructor = %constructor.signature(),
                        "Constructor satisfiable"
                    );
                    let better = best.as_ref().is_none_or(|(chosen, _)| {
                        constructor.arity() > descriptor.constructors[*chosen].arity()
                    });
                    if better {
                        best = Some((index, values));
                    }
                }
                Err(problem) => reasons.push(format!("{} {problem}", constructor.signature())),
            }
        }

        let Some((index, values)) = best else {
            return Err(Error::creation(descriptor.name.clone(), reasons));
        };
        let constructor = descriptor.constructors[index].clone();
        debug!(
            component = %descriptor.name,
            constructor = %constructor.signature(),
            "Constructor selected"
        );
        Ok(ComponentBinding {
            type_name: descriptor.name.clone(),
            constructor_index: index,
            arguments: Arguments::new(constructor.params.clone(), values),
            constructor,
        })
    }
}

/// Resolve every parameter, or describe the ones that could not be bound
///
/// A supplied argument whose variant or JSON shape does not fit the
/// parameter type counts as unbound.
fn bind_params<C: ?Sized>(
    constructor: &ConstructorDef<C>,
    context: &SupplierContext,
) -> std::result::Result<Vec<Supplied>, String> {
    let mut values = Vec::with_capacity(constructor.arity());
    let mut missing = Vec::new();
    let mut rejected = Vec::new();
    for param in &constructor.params {
        match context.resolve(param) {
            Some(value) if param.ty.admits(&value) => values.push(value),
            Some(value) => {
                trace!(param = %param, supplied = ?value, "Supplied argument rejected");
                rejected.push(param.name.clone());
            }
            None => missing.push(param.name.clone()),
        }
    }
    let mut problems = Vec::new();
    if !missing.is_empty() {
        problems.push(format!("missing [{}]", missing.join(", ")));
    }
    if !rejected.is_empty() {
        problems.push(format!("mistyped [{}]", rejected.join(", ")));
    }
    if problems.is_empty() {
        Ok(values)
    } else {
        Err(problems.join(", "))
    }
}
