//! Attribute specifications and the per-type registry.
//!
//! This module defines the schema side of the attribute system: which names
//! exist on a model type, what default rule (if any) supplies a value when
//! the attribute was never explicitly set, and the composed (derived,
//! read-only) attribute definitions.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::attributes::AttrValue;
use crate::model::ModelInstance;

/// A deferred expression evaluated in instance context at read time.
///
/// The closure receives the owning instance mutably because reading other
/// attributes from inside the expression may itself resolve (and cache)
/// further defaults on the same instance.
pub type DeferredFn = Arc<dyn Fn(&mut ModelInstance) -> AttrValue + Send + Sync>;

/// How an attribute's default value is produced when it was never set.
#[derive(Clone)]
pub enum DefaultRule {
    /// A fixed value, returned as-is.
    Literal(AttrValue),

    /// An expression evaluated lazily against the owning instance on first
    /// read. Never evaluated at declaration time.
    Deferred(DeferredFn),
}

impl fmt::Debug for DefaultRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultRule::Literal(v) => f.debug_tuple("Literal").field(v).finish(),
            DefaultRule::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// Specification for a single attribute: its name and optional default rule.
///
/// Unique per name within a model type. When a child type inherits from a
/// parent, specs are copied over and may be overridden by name (child wins).
#[derive(Debug, Clone)]
pub struct AttributeSpec {
    pub name: String,
    pub default_rule: Option<DefaultRule>,
}

impl AttributeSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default_rule: None,
        }
    }
}

/// A derived, read-only attribute definition.
///
/// Composed attributes are recomputed on every read and never cached, so
/// they always observe the instance's current state.
#[derive(Clone)]
pub struct ComposedSpec {
    pub name: String,
    pub expr: DeferredFn,
}

impl fmt::Debug for ComposedSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComposedSpec")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Registry of attribute specs for one model type.
///
/// This is the single source of truth for which attribute names a type
/// declares. Setting a default for an undeclared name registers the spec
/// implicitly (register-if-absent), so attributes first mentioned in a
/// default rule are still accessible on instances.
#[derive(Debug, Clone, Default)]
pub struct AttributeRegistry {
    specs: HashMap<String, AttributeSpec>,
}

impl AttributeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare an attribute with no default rule. Keeps any rule already
    /// registered under that name.
    pub fn declare(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.specs
            .entry(name.clone())
            .or_insert_with(|| AttributeSpec::new(name));
    }

    /// Register or overwrite the default rule for `name`, creating the spec
    /// if it was never declared. Duplicate declarations are last-write-wins.
    pub fn set_default(&mut self, name: impl Into<String>, rule: DefaultRule) {
        let name = name.into();
        let spec = self
            .specs
            .entry(name.clone())
            .or_insert_with(|| AttributeSpec::new(name));
        spec.default_rule = Some(rule);
    }

    /// Look up an attribute spec by name.
    pub fn get(&self, name: &str) -> Option<&AttributeSpec> {
        self.specs.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.specs.contains_key(name)
    }

    /// Overlay `other`'s specs onto this registry, overwriting by name.
    /// Used for structural inheritance: the parent's registry is cloned and
    /// the child's declarations are merged on top.
    pub fn merge_from(&mut self, other: &AttributeRegistry) {
        for (name, spec) in &other.specs {
            self.specs.insert(name.clone(), spec.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declare_registers_spec_without_rule() {
        let mut registry = AttributeRegistry::new();
        registry.declare("first_name");
        let spec = registry.get("first_name").unwrap();
        assert_eq!(spec.name, "first_name");
        assert!(spec.default_rule.is_none());
    }

    #[test]
    fn unknown_attribute_returns_none() {
        let registry = AttributeRegistry::new();
        assert!(registry.get("nonexistent").is_none());
    }

    #[test]
    fn set_default_on_undeclared_name_creates_spec() {
        let mut registry = AttributeRegistry::new();
        registry.set_default("nickname", DefaultRule::Literal("ace".into()));
        assert!(registry.contains("nickname"));
    }

    #[test]
    fn declare_does_not_clobber_existing_rule() {
        let mut registry = AttributeRegistry::new();
        registry.set_default("password", DefaultRule::Literal("password".into()));
        registry.declare("password");
        assert!(registry.get("password").unwrap().default_rule.is_some());
    }

    #[test]
    fn duplicate_defaults_are_last_write_wins() {
        let mut registry = AttributeRegistry::new();
        registry.set_default("city", DefaultRule::Literal("Austin".into()));
        registry.set_default("city", DefaultRule::Literal("Dallas".into()));
        match registry.get("city").unwrap().default_rule.as_ref().unwrap() {
            DefaultRule::Literal(v) => assert_eq!(v.as_str(), Some("Dallas")),
            other => panic!("Expected literal rule, got {other:?}"),
        }
    }

    #[test]
    fn merge_from_overlays_by_name() {
        let mut parent = AttributeRegistry::new();
        parent.set_default("password", DefaultRule::Literal("password".into()));
        parent.declare("street1");

        let mut child = AttributeRegistry::new();
        child.set_default("password", DefaultRule::Literal("hunter2".into()));

        let mut merged = AttributeRegistry::new();
        merged.merge_from(&parent);
        merged.merge_from(&child);

        assert!(merged.contains("street1"));
        match merged.get("password").unwrap().default_rule.as_ref().unwrap() {
            DefaultRule::Literal(v) => assert_eq!(v.as_str(), Some("hunter2")),
            other => panic!("Expected literal rule, got {other:?}"),
        }
    }
}
