//! # Modelkit Architecture
//!
//! Modelkit is a **model-composition engine for test-fixture data**: named
//! attribute bags ("models") with inheritable default values, derived
//! ("composed") attributes recomputed on demand, and tree composition of
//! sub-models searchable by type. An orchestration layer (a UI driver, a
//! scenario runner) instantiates models and reads resolved attribute
//! values; this crate is the definition and resolution core only.
//!
//! ## The Two Halves
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Definition (model/model_type.rs, attributes/)              │
//! │  - ModelType: built once, immutable, cheaply shared         │
//! │  - Attribute specs, default rules, composed definitions     │
//! │  - Structural inheritance: parent flattened in at build     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ instantiate
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Resolution (model/instance.rs, model/tree.rs)              │
//! │  - ModelInstance: explicit values, lazy cached defaults,    │
//! │    always-fresh composed reads, model_name/uuid identity    │
//! │  - SubModelTree: ordered children, singular/plural access,  │
//! │    depth-first find by type or instance                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use modelkit::{AttrValue, ModelType};
//!
//! let login = ModelType::builder("Login")
//!     .attrs(["username", "password"])
//!     .default_value("password", "password")
//!     .default_with("username", |m| format!("user_{}", m.uuid()))
//!     .build();
//!
//! let user = ModelType::builder("User")
//!     .attrs(["first_name", "last_name"])
//!     .compose("full_name", |m| {
//!         format!(
//!             "{} {}",
//!             m.get("first_name").unwrap_or(AttrValue::Str(String::new())),
//!             m.get("last_name").unwrap_or(AttrValue::Str(String::new()))
//!         )
//!     })
//!     .add_model(login.instantiate())
//!     .build();
//!
//! let mut fixture = user.instantiate_with([("first_name", "Ada")]);
//! assert_eq!(
//!     fixture.sub_model_mut("login").unwrap().get("password"),
//!     Some(AttrValue::from("password"))
//! );
//! assert!(fixture.find(&login).is_ok());
//! ```
//!
//! ## Error Policy
//!
//! Fixtures are best-effort data, not strictly validated records: reading
//! an unknown or unset attribute is silent absence (`None`), never an
//! error. The single structural failure is [`ModelError::ModelNotFound`],
//! raised when a tree search matches nothing — the caller decides whether
//! absence is fatal.
//!
//! ## Concurrency
//!
//! None. A built [`ModelType`] is read-only and safely shared across
//! instance trees; a [`ModelInstance`] and its subtree are exclusively
//! owned by one fixture at a time. All operations are synchronous,
//! in-memory computation.
//!
//! ## Module Overview
//!
//! - [`model`]: `ModelType`, `ModelInstance`, `SubModelTree` — the engine
//! - [`attributes`]: value enum, attribute specs, default rules
//! - [`naming`]: humanize/pluralize/singularize for keys and accessors
//! - [`error`]: error types

pub mod attributes;
pub mod error;
pub mod model;
pub mod naming;

pub use attributes::{AttrValue, AttributeRegistry, AttributeSpec, ComposedSpec, DefaultRule};
pub use error::{ModelError, Result};
pub use model::{ModelInstance, ModelQuery, ModelType, ModelTypeBuilder, SubModelTree};
