#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Default Value Resolution
//!
//! Resolves a "zero-like" default value from a type descriptor string.
//!
//! ## Overview
//!
//! A type descriptor names either a primitive kind (`null`, `object`,
//! `array`, `bool`/`boolean`, `float`/`double`, `int`/`integer`/`number`,
//! `string` — case-insensitive) or a fully-qualified type such as
//! `app::widgets::Widget`. Primitive keywords dispatch on a fixed table;
//! type names resolve through an explicit [`TypeRegistry`] recording, per
//! type, the construction facts runtime reflection would otherwise discover.
//!
//! The [`FrameworkResolver`] composes the base [`DefaultResolver`] with an
//! externally supplied service registry, adding `@service_id` lookup, a
//! container-aware factory capability ([`ContainerCreate`]), and a
//! conventional zero-argument `create()` factory strategy.
//!
//! ## Module Organization
//!
//! - [`value`] - The [`DefaultValue`] model and opaque [`Instance`] wrapper
//! - [`error`] - Structured error handling with classification codes
//! - [`registry`] - Type and service registration tables
//! - [`resolver`] - The default and framework resolution entry points
//! - [`logging`] - Optional console tracing initialization
//!
//! ## Quick Start
//!
//! ```rust
//! use default_value::{DefaultResolver, DefaultValue, TypeEntry, TypeRegistry};
//! use std::sync::Arc;
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Widget {
//!     label: String,
//! }
//!
//! let registry = Arc::new(TypeRegistry::new());
//! registry.register(TypeEntry::constructible::<Widget>("app::widgets::Widget"));
//! let resolver = DefaultResolver::new(registry);
//!
//! assert_eq!(resolver.get("int").unwrap(), DefaultValue::Int(0));
//! assert_eq!(resolver.get("array").unwrap(), DefaultValue::Array(Vec::new()));
//!
//! let value = resolver.get("app::widgets::Widget").unwrap();
//! assert_eq!(
//!     value.as_instance().unwrap().downcast_ref::<Widget>(),
//!     Some(&Widget::default())
//! );
//! ```

pub mod error;
pub mod logging;
pub mod registry;
pub mod resolver;
pub mod value;

pub use error::{ErrorCode, ResolutionError, Result};
pub use registry::{
    ContainerCreate, ServiceContainer, ServiceError, ServiceRegistry, TypeEntry, TypeRegistry,
    TypeRegistryStats,
};
pub use resolver::{DefaultResolver, FrameworkResolver, SERVICE_ID_PREFIX, TYPE_PATH_SEPARATOR};
pub use value::{DefaultValue, Instance};
