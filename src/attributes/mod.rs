//! # Attribute System
//!
//! This module provides the value and schema layers of the model engine.
//! Instead of fixed struct fields, model attributes are name-indexed and
//! described by specs:
//!
//! - **Values**: [`AttrValue`] is the loose runtime representation fixture
//!   data is made of (strings, integers, booleans, lists).
//! - **Specifications**: [`AttributeSpec`] declares that a name exists on a
//!   type and what [`DefaultRule`] (if any) supplies its value when unset.
//! - **Composed definitions**: [`ComposedSpec`] declares a derived,
//!   read-only attribute recomputed on every read.
//! - **Registry**: [`AttributeRegistry`] is the per-type collection of
//!   specs, with permissive register-if-absent semantics.
//!
//! Default rules come in two flavors: a `Literal` value returned as-is, and
//! a `Deferred` closure evaluated lazily against the owning instance the
//! first time the attribute is read. Composed expressions use the same
//! closure shape but are re-evaluated on every read and never cached.

mod spec;
mod value;

pub use spec::{AttributeRegistry, AttributeSpec, ComposedSpec, DefaultRule, DeferredFn};
pub use value::AttrValue;
