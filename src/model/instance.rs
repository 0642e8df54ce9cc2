//! # Model Instances
//!
//! A [`ModelInstance`] is the concrete attribute bag end-users interact
//! with: explicitly-set values, lazily-resolved defaults, always-fresh
//! composed attributes, an identity (`model_name` + `uuid`), and a tree of
//! attached child instances.
//!
//! ## Read Resolution Order
//!
//! `get(name)` resolves in this order:
//!
//! 1. Identity names (`"model_name"`, `"uuid"`) — always the current value.
//! 2. Explicitly-set value — returned as stored.
//! 3. Composed definition — evaluated now, never cached.
//! 4. Default rule — resolved once (literal or deferred), cached for the
//!    instance's lifetime, then returned from the cache.
//! 5. Nothing — `None`. Unknown or unset names are silent absence, never an
//!    error; fixtures are best-effort data.
//!
//! ## Identity Coupling
//!
//! `uuid` is the model name plus a freshly generated random suffix.
//! Reassigning `model_name` regenerates the uuid and clears the
//! resolved-default cache, so name- and uuid-derived defaults observe the
//! new identity on their next read. Explicitly-set values survive a rename.

use std::collections::HashMap;

use uuid::Uuid;

use crate::attributes::{AttrValue, DefaultRule};
use crate::error::{ModelError, Result};
use crate::model::{ModelQuery, ModelType, SubModelTree};
use crate::naming;

/// A concrete, mutable attribute bag plus child tree, built from a
/// [`ModelType`].
#[derive(Debug, Clone)]
pub struct ModelInstance {
    ty: ModelType,
    model_name: String,
    uuid: String,
    /// Explicitly-set attributes only.
    values: HashMap<String, AttrValue>,
    /// Lazily-resolved default values, cached per instance.
    resolved: HashMap<String, AttrValue>,
    children: SubModelTree,
}

impl ModelInstance {
    pub(crate) fn from_type(
        ty: ModelType,
        initial_values: impl IntoIterator<Item = (String, AttrValue)>,
    ) -> Self {
        let model_name = ty.key().to_string();
        let uuid = fresh_uuid(&model_name);
        let children = SubModelTree::from_children(ty.template_children().to_vec());
        let mut instance = Self {
            ty,
            model_name,
            uuid,
            values: HashMap::new(),
            resolved: HashMap::new(),
            children,
        };
        for (name, value) in initial_values {
            instance.set(name, value);
        }
        instance
    }

    pub fn model_type(&self) -> &ModelType {
        &self.ty
    }

    /// Whether this instance was built from `ty`.
    pub fn is_a(&self, ty: &ModelType) -> bool {
        &self.ty == ty
    }

    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Rename the instance. Regenerates `uuid` from the new name and clears
    /// the resolved-default cache: name- and uuid-derived defaults pick up
    /// the new identity on their next read, re-resolved literals are
    /// unchanged, and explicitly-set values are untouched.
    pub fn set_model_name(&mut self, name: impl Into<String>) {
        self.model_name = name.into();
        self.uuid = fresh_uuid(&self.model_name);
        self.resolved.clear();
    }

    /// Read an attribute by name. See the module docs for the resolution
    /// order. Returns `None` for names with no value, no composed
    /// definition, and no default rule.
    pub fn get(&mut self, name: &str) -> Option<AttrValue> {
        if name == "model_name" {
            return Some(AttrValue::Str(self.model_name.clone()));
        }
        if name == "uuid" {
            return Some(AttrValue::Str(self.uuid.clone()));
        }
        if let Some(value) = self.values.get(name) {
            return Some(value.clone());
        }
        // Composed attributes re-evaluate on every read; the expression is
        // cloned out of the shared type definition so it can borrow the
        // instance mutably.
        if let Some(spec) = self.ty.composed_spec(name).cloned() {
            return Some((spec.expr)(self));
        }
        if let Some(cached) = self.resolved.get(name) {
            return Some(cached.clone());
        }
        if let Some(rule) = self.ty.default_rule(name).cloned() {
            let value = match rule {
                DefaultRule::Literal(value) => value,
                DefaultRule::Deferred(expr) => expr(self),
            };
            self.resolved.insert(name.to_string(), value.clone());
            return Some(value);
        }
        None
    }

    /// Store an explicit value for `name`, shadowing any default or
    /// composed definition on subsequent reads.
    ///
    /// The identity names are coupled: setting `"model_name"` renames the
    /// instance (regenerating `uuid`), and setting `"uuid"` replaces the
    /// generated id outright.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        if name == "model_name" {
            self.set_model_name(value.to_string());
            return;
        }
        if name == "uuid" {
            self.uuid = value.to_string();
            return;
        }
        self.resolved.remove(&name);
        self.values.insert(name, value);
    }

    pub fn children(&self) -> &SubModelTree {
        &self.children
    }

    /// Attach a child instance. Children keep insertion order and the same
    /// type may be attached any number of times.
    pub fn add_model(&mut self, child: ModelInstance) {
        self.children.add(child);
    }

    /// The first attached child whose type key matches `name` (the
    /// singular accessor).
    pub fn sub_model(&self, name: &str) -> Result<&ModelInstance> {
        self.children
            .first_of(name)
            .ok_or_else(|| ModelError::ModelNotFound(name.to_string()))
    }

    /// Mutable variant of [`sub_model`](Self::sub_model), needed to read
    /// attributes (reads may resolve and cache defaults).
    pub fn sub_model_mut(&mut self, name: &str) -> Result<&mut ModelInstance> {
        self.children
            .first_of_mut(name)
            .ok_or_else(|| ModelError::ModelNotFound(name.to_string()))
    }

    /// All attached children of the type named by the singularized form of
    /// `plural_name`, in insertion order. Empty when none are attached.
    pub fn sub_models(&self, plural_name: &str) -> Vec<&ModelInstance> {
        self.children.all_of(&naming::singularize(plural_name))
    }

    /// Mutable variant of [`sub_models`](Self::sub_models).
    pub fn sub_models_mut(&mut self, plural_name: &str) -> Vec<&mut ModelInstance> {
        self.children.all_of_mut(&naming::singularize(plural_name))
    }

    /// Depth-first search of this instance's subtree: self first, then each
    /// child's subtree in attachment order. The query is a [`ModelType`]
    /// (match by type identity) or a [`ModelInstance`] (match by uuid).
    pub fn find<Q: ModelQuery + ?Sized>(&self, query: &Q) -> Result<&ModelInstance> {
        if query.matches(self) {
            return Ok(self);
        }
        self.children
            .search(query)
            .ok_or_else(|| ModelError::ModelNotFound(query.description()))
    }
}

fn fresh_uuid(model_name: &str) -> String {
    format!("{}{}", model_name, Uuid::new_v4().simple())
}
