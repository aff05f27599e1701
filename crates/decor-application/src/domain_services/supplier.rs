//! Supplier Context
//!
//! An ordered rule table answering "what value satisfies this parameter?".
//! Rules are evaluated in insertion order and the first rule whose
//! predicate matches supplies the value. When no rule matches, the
//! optional fallback supplier answers; without one the parameter is absent.
//!
//! ```ignore
//! let mut context = SupplierContext::new();
//! context
//!     .use_supplier(|_| Supplied::Value(json!(10)))
//!     .when_named("max");
//! context
//!     .use_supplier(|_| Supplied::Value(json!(true)))
//!     .when_type(ParamType::Bool);
//! ```

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use decor_domain::value_objects::{ParamDescriptor, ParamType, Supplied};
use serde_json::Value;

/// Predicate over a parameter descriptor
pub type Predicate = Arc<dyn Fn(&ParamDescriptor) -> bool + Send + Sync>;

/// Produces a value for a matched parameter
pub type Supplier = Arc<dyn Fn(&ParamDescriptor) -> Supplied + Send + Sync>;

/// Predicate constructors
pub mod predicates {
    use super::*;

    /// Matches a parameter by name
    pub fn named(name: impl Into<String>) -> Predicate {
        let name = name.into();
        Arc::new(move |param: &ParamDescriptor| param.name == name)
    }

    /// Matches a parameter by type
    pub fn of_type(ty: ParamType) -> Predicate {
        Arc::new(move |param: &ParamDescriptor| param.ty == ty)
    }

    /// Matches a named parameter whose type can hold `value`
    pub fn named_accepting(name: impl Into<String>, value: &Value) -> Predicate {
        let name = name.into();
        let value = value.clone();
        Arc::new(move |param: &ParamDescriptor| param.name == name && param.ty.accepts(&value))
    }

    /// Matches when any of the predicates match
    pub fn any(predicates: Vec<Predicate>) -> Predicate {
        Arc::new(move |param: &ParamDescriptor| predicates.iter().any(|p| p(param)))
    }

    /// Matches when all of the predicates match
    pub fn all(predicates: Vec<Predicate>) -> Predicate {
        Arc::new(move |param: &ParamDescriptor| predicates.iter().all(|p| p(param)))
    }

    /// Matches every parameter
    pub fn always() -> Predicate {
        Arc::new(|_: &ParamDescriptor| true)
    }
}

/// One (predicate, supplier) pair
#[derive(Clone)]
pub struct SupplierRule {
    label: String,
    predicate: Predicate,
    supplier: Supplier,
}

impl SupplierRule {
    /// Create a rule
    pub fn new(label: impl Into<String>, predicate: Predicate, supplier: Supplier) -> Self {
        Self {
            label: label.into(),
            predicate,
            supplier,
        }
    }

    /// Rule supplying a constant for a named parameter
    pub fn constant(name: impl Into<String>, value: Supplied) -> Self {
        let name = name.into();
        Self::new(
            format!("constant {name}"),
            predicates::named(name),
            Arc::new(move |_: &ParamDescriptor| value.clone()),
        )
    }

    /// Diagnostic label
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the rule applies to a parameter
    pub fn matches(&self, param: &ParamDescriptor) -> bool {
        (self.predicate)(param)
    }

    /// Produce the rule's value for a parameter
    pub fn supply(&self, param: &ParamDescriptor) -> Supplied {
        (self.supplier)(param)
    }
}

impl fmt::Debug for SupplierRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupplierRule")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Ordered table of supplier rules with an optional fallback
#[derive(Clone, Default)]
pub struct SupplierContext {
    rules: Vec<SupplierRule>,
    fallback: Option<Supplier>,
}

impl SupplierContext {
    /// Create an empty context; every parameter resolves to absent
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a rule supplying values from `supplier`; finish it with `when*`
    pub fn use_supplier<F>(&mut self, supplier: F) -> RuleBuilder<'_>
    where
        F: Fn(&ParamDescriptor) -> Supplied + Send + Sync + 'static,
    {
        RuleBuilder {
            context: self,
            supplier: Arc::new(supplier),
            label: None,
        }
    }

    /// Append a rule
    pub fn push(&mut self, rule: SupplierRule) {
        self.rules.push(rule);
    }

    /// Append a rule, builder style
    pub fn with_rule(mut self, rule: SupplierRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Append a rule supplying a JSON value to the parameter named `name`
    pub fn supply_value(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.with_rule(SupplierRule::constant(name, Supplied::Value(value.into())))
    }

    /// Append a rule supplying a shared object to the parameter named `name`
    pub fn supply_object<T: Any + Send + Sync>(self, name: impl Into<String>, value: T) -> Self {
        self.with_rule(SupplierRule::constant(name, Supplied::object(value)))
    }

    /// Set the supplier used when no rule matches
    pub fn with_fallback<F>(mut self, fallback: F) -> Self
    where
        F: Fn(&ParamDescriptor) -> Supplied + Send + Sync + 'static,
    {
        self.fallback = Some(Arc::new(fallback));
        self
    }

    /// Place `front`'s rules ahead of this context's rules
    ///
    /// This context's fallback is kept; `front`'s fallback is used only when
    /// this context has none.
    pub fn prepend(mut self, front: SupplierContext) -> Self {
        let mut rules = front.rules;
        rules.append(&mut self.rules);
        self.rules = rules;
        if self.fallback.is_none() {
            self.fallback = front.fallback;
        }
        self
    }

    /// Place `back`'s rules after this context's rules
    pub fn append(mut self, back: SupplierContext) -> Self {
        self.rules.extend(back.rules);
        if self.fallback.is_none() {
            self.fallback = back.fallback;
        }
        self
    }

    /// Value for a parameter, or `None` when nothing supplies it
    pub fn resolve(&self, param: &ParamDescriptor) -> Option<Supplied> {
        if let Some(rule) = self.rules.iter().find(|rule| rule.matches(param)) {
            return Some(rule.supply(param));
        }
        self.fallback.as_ref().map(|fallback| fallback(param))
    }

    /// Labels of the rules, in evaluation order
    pub fn labels(&self) -> Vec<&str> {
        self.rules.iter().map(SupplierRule::label).collect()
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the context has no rules
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Whether a fallback supplier is set
    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }
}

impl fmt::Debug for SupplierContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SupplierContext")
            .field("rules", &self.labels())
            .field("fallback", &self.fallback.is_some())
            .finish()
    }
}

/// Pending rule created by [`SupplierContext::use_supplier`]
#[must_use = "a rule is only added once a `when*` method is called"]
pub struct RuleBuilder<'a> {
    context: &'a mut SupplierContext,
    supplier: Supplier,
    label: Option<String>,
}

impl RuleBuilder<'_> {
    /// Name the rule for diagnostics
    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Add the rule guarded by a closure predicate
    pub fn when<P>(self, predicate: P)
    where
        P: Fn(&ParamDescriptor) -> bool + Send + Sync + 'static,
    {
        self.when_matching(Arc::new(predicate));
    }

    /// Add the rule guarded by a prebuilt predicate
    pub fn when_matching(self, predicate: Predicate) {
        let label = self
            .label
            .unwrap_or_else(|| format!("rule {}", self.context.rules.len()));
        self.context
            .push(SupplierRule::new(label, predicate, self.supplier));
    }

    /// Add the rule for parameters with the given name
    pub fn when_named(mut self, name: impl Into<String>) {
        let name = name.into();
        if self.label.is_none() {
            self.label = Some(format!("named {name}"));
        }
        self.when_matching(predicates::named(name));
    }

    /// Add the rule for parameters of the given type
    pub fn when_type(mut self, ty: ParamType) {
        if self.label.is_none() {
            self.label = Some(format!("type {ty}"));
        }
        self.when_matching(predicates::of_type(ty));
    }
}
