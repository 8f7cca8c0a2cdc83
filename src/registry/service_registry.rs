//! # Service Registry
//!
//! The lookup-by-name contract through which the framework resolver consults
//! an externally supplied dependency-injection container, plus a small
//! in-memory implementation for embedding and tests.
//!
//! The container is never owned or mutated by the resolvers; it is passed in
//! at construction time and treated as a read-only lookup service.

use std::collections::HashMap;

use parking_lot::RwLock;
use thiserror::Error;
use tracing::debug;

use crate::value::DefaultValue;

/// Service lookup failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error("you have requested a non-existent service \"{id}\"")]
    NotFound { id: String },
}

impl ServiceError {
    /// Create a not-found error for a service identifier.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }
}

/// Lookup-by-name contract for an externally supplied service container.
pub trait ServiceRegistry: Send + Sync {
    /// Look up a service instance by identifier.
    fn lookup(&self, id: &str) -> Result<DefaultValue, ServiceError>;
}

/// Capability for types that build themselves from a container.
///
/// Registering a type with [`super::TypeEntry::container_aware`] marks it as
/// carrying this capability; the framework resolver then constructs it by
/// passing in the service registry it was built with.
pub trait ContainerCreate {
    fn create(container: &dyn ServiceRegistry) -> Self
    where
        Self: Sized;
}

/// Thread-safe in-memory service container.
pub struct ServiceContainer {
    services: RwLock<HashMap<String, DefaultValue>>,
}

impl ServiceContainer {
    /// Create an empty service container.
    pub fn new() -> Self {
        Self {
            services: RwLock::new(HashMap::new()),
        }
    }

    /// Register a service instance under an identifier.
    ///
    /// Re-registering an identifier replaces the previous instance.
    pub fn register(&self, id: impl Into<String>, value: DefaultValue) {
        let id = id.into();
        debug!(service_id = %id, "Registering service");
        self.services.write().insert(id, value);
    }

    /// Whether a service is registered under the identifier.
    pub fn contains(&self, id: &str) -> bool {
        self.services.read().contains_key(id)
    }

    /// Number of registered services.
    pub fn len(&self) -> usize {
        self.services.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.services.read().is_empty()
    }
}

impl Default for ServiceContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl ServiceRegistry for ServiceContainer {
    fn lookup(&self, id: &str) -> Result<DefaultValue, ServiceError> {
        self.services
            .read()
            .get(id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found(id))
    }
}
