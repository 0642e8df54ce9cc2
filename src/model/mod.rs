//! # Model Engine
//!
//! The definition and resolution core:
//!
//! - [`ModelType`] / [`ModelTypeBuilder`]: reusable blueprints — attribute
//!   declarations, default rules, composed definitions, template children,
//!   and structural inheritance ([`model_type`]).
//! - [`ModelInstance`]: the concrete attribute bag with lazy default
//!   resolution and identity propagation ([`instance`]).
//! - [`SubModelTree`] / [`ModelQuery`]: ordered child composition and
//!   depth-first search ([`tree`]).

mod instance;
mod model_type;
mod tree;

pub use instance::ModelInstance;
pub use model_type::{ModelType, ModelTypeBuilder};
pub use tree::{ModelQuery, SubModelTree};
