//! # Registry Infrastructure
//!
//! Registration tables consulted during default value resolution.
//!
//! ## Overview
//!
//! Rust has no runtime reflection, so the facts a reflective implementation
//! would discover about a type (is it instantiable? how many parameters does
//! its constructor require? does it expose a factory?) are recorded up front
//! in an explicit registry keyed by type name.
//!
//! ## Available Registries
//!
//! - **TypeRegistry**: type name → construction facts and factory closures
//! - **ServiceRegistry / ServiceContainer**: identifier → service instance,
//!   the external collaborator contract used by the framework resolver

pub mod service_registry;
pub mod type_registry;

// Re-export main types for easy access
pub use service_registry::{ContainerCreate, ServiceContainer, ServiceError, ServiceRegistry};
pub use type_registry::{TypeEntry, TypeRegistry, TypeRegistryStats};
