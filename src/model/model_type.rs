//! # Model Blueprints
//!
//! A [`ModelType`] is a reusable blueprint: the set of attribute names a
//! model declares, their default rules, the composed (derived) attribute
//! definitions, and any template children every instance is born with.
//!
//! ## Build Once, Instantiate Many
//!
//! Types are assembled through [`ModelTypeBuilder`] and are immutable after
//! `build()`. The definition lives behind an `Arc`, so cloning a
//! `ModelType` is cheap and many instance trees can share one blueprint.
//!
//! ## Structural Inheritance
//!
//! `builder.extends(&parent)` copies the parent's attribute specs, composed
//! definitions, and template children into the child builder *at build
//! time*. The child's own declarations are applied on top and override by
//! name; non-overridden parent entries remain. There is no runtime lookup
//! chain — instance reads stay O(1) regardless of how deep the ancestry is.

use std::collections::HashMap;
use std::sync::Arc;

use uuid::Uuid;

use crate::attributes::{AttrValue, AttributeRegistry, ComposedSpec, DefaultRule, DeferredFn};
use crate::model::ModelInstance;
use crate::naming;

#[derive(Debug)]
struct TypeInner {
    name: String,
    key: String,
    type_id: Uuid,
    attributes: AttributeRegistry,
    composed: HashMap<String, ComposedSpec>,
    template_children: Vec<ModelInstance>,
}

/// A reusable model blueprint. Cheap to clone; immutable after build.
#[derive(Debug, Clone)]
pub struct ModelType {
    inner: Arc<TypeInner>,
}

impl ModelType {
    /// Start building a new type. `name` is the type's display name
    /// ("Login", "CreditCard"); its humanized form becomes the lookup key
    /// for the generated singular/plural accessors.
    pub fn builder(name: impl Into<String>) -> ModelTypeBuilder {
        ModelTypeBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// The snake_case key instances of this type are looked up by.
    pub fn key(&self) -> &str {
        &self.inner.key
    }

    /// Create an instance with no explicit overrides. Deferred defaults are
    /// not evaluated here; they resolve lazily on first read.
    pub fn instantiate(&self) -> ModelInstance {
        ModelInstance::from_type(self.clone(), std::iter::empty())
    }

    /// Create an instance seeding the given names as explicitly-set values,
    /// bypassing default resolution for those names.
    pub fn instantiate_with<I, K, V>(&self, initial_values: I) -> ModelInstance
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<AttrValue>,
    {
        ModelInstance::from_type(
            self.clone(),
            initial_values
                .into_iter()
                .map(|(k, v)| (k.into(), v.into())),
        )
    }

    pub(crate) fn default_rule(&self, name: &str) -> Option<&DefaultRule> {
        self.inner
            .attributes
            .get(name)
            .and_then(|spec| spec.default_rule.as_ref())
    }

    pub(crate) fn composed_spec(&self, name: &str) -> Option<&ComposedSpec> {
        self.inner.composed.get(name)
    }

    pub(crate) fn template_children(&self) -> &[ModelInstance] {
        &self.inner.template_children
    }

    fn registry(&self) -> &AttributeRegistry {
        &self.inner.attributes
    }

    fn composed_map(&self) -> &HashMap<String, ComposedSpec> {
        &self.inner.composed
    }
}

/// Two `ModelType` handles are equal when they refer to the same built
/// blueprint, not when their definitions happen to look alike.
impl PartialEq for ModelType {
    fn eq(&self, other: &Self) -> bool {
        self.inner.type_id == other.inner.type_id
    }
}

impl Eq for ModelType {}

/// Builder for [`ModelType`]. Declarations are last-write-wins: declaring a
/// default for a name that already has one overwrites it, and naming an
/// undeclared attribute in a default rule registers it implicitly.
pub struct ModelTypeBuilder {
    name: String,
    attributes: AttributeRegistry,
    composed: HashMap<String, ComposedSpec>,
    template_children: Vec<ModelInstance>,
}

impl ModelTypeBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: AttributeRegistry::new(),
            composed: HashMap::new(),
            template_children: Vec::new(),
        }
    }

    /// Copy the parent's attribute specs, composed definitions, and
    /// template children into this builder. Call before the child's own
    /// declarations so the child overrides by name.
    pub fn extends(mut self, parent: &ModelType) -> Self {
        self.attributes.merge_from(parent.registry());
        for (name, spec) in parent.composed_map() {
            self.composed.insert(name.clone(), spec.clone());
        }
        self.template_children
            .extend(parent.template_children().iter().cloned());
        self
    }

    /// Declare an attribute with no default value.
    pub fn attr(mut self, name: impl Into<String>) -> Self {
        self.attributes.declare(name);
        self
    }

    /// Declare several attributes with no default values.
    pub fn attrs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self.attributes.declare(name);
        }
        self
    }

    /// Register a literal default for `name`, creating the attribute spec
    /// if it was never declared.
    pub fn default_value(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attributes
            .set_default(name, DefaultRule::Literal(value.into()));
        self
    }

    /// Register a deferred default: the closure runs against the owning
    /// instance the first time the attribute is read, never at declaration
    /// time. Creates the attribute spec if it was never declared.
    pub fn default_with<F, V>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut ModelInstance) -> V + Send + Sync + 'static,
        V: Into<AttrValue>,
    {
        let expr: DeferredFn = Arc::new(move |instance| f(instance).into());
        self.attributes
            .set_default(name, DefaultRule::Deferred(expr));
        self
    }

    /// Register a composed attribute: read-only, re-evaluated against the
    /// instance on every read, never cached.
    pub fn compose<F, V>(mut self, name: impl Into<String>, f: F) -> Self
    where
        F: Fn(&mut ModelInstance) -> V + Send + Sync + 'static,
        V: Into<AttrValue>,
    {
        let name = name.into();
        let expr: DeferredFn = Arc::new(move |instance| f(instance).into());
        self.composed.insert(name.clone(), ComposedSpec { name, expr });
        self
    }

    /// Attach a template child: every instance created from the built type
    /// starts with its own clone of `child` in its sub-model tree.
    pub fn add_model(mut self, child: ModelInstance) -> Self {
        self.template_children.push(child);
        self
    }

    pub fn build(self) -> ModelType {
        let key = naming::humanize(&self.name);
        ModelType {
            inner: Arc::new(TypeInner {
                name: self.name,
                key,
                type_id: Uuid::new_v4(),
                attributes: self.attributes,
                composed: self.composed,
                template_children: self.template_children,
            }),
        }
    }
}
