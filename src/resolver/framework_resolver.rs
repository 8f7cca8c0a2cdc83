//! # Framework Resolver
//!
//! Framework-integration layer over [`DefaultResolver`], built by composition
//! rather than inheritance: it holds the base resolver and an externally
//! supplied service registry, tries its own strategies, and delegates to the
//! base for everything else.
//!
//! ## Resolution order
//!
//! 1. `@id` descriptors are stripped and looked up in the service registry.
//!    A missing service fails with `MissingClass` carrying the registry's
//!    error message.
//! 2. Fully-qualified type names go through the base resolver first; on
//!    failure, the entry's container-aware factory is tried, then (for
//!    instantiable types) its conventional zero-argument `create()` factory.
//!    When neither applies, the base error is re-raised unchanged.
//! 3. Primitive keywords delegate entirely to the base resolver.
//!
//! The failure path does the registry lookup twice; call volume is expected
//! to be low, so the second lookup is accepted for the simpler delegation.
//!
//! ## Usage
//!
//! ```rust
//! use default_value::{
//!     DefaultResolver, DefaultValue, FrameworkResolver, ServiceContainer, TypeRegistry,
//! };
//! use std::sync::Arc;
//!
//! let registry = Arc::new(TypeRegistry::new());
//! let container = Arc::new(ServiceContainer::new());
//! container.register("current_user", DefaultValue::String("admin".to_string()));
//!
//! let resolver = FrameworkResolver::new(DefaultResolver::new(registry), container);
//! assert_eq!(
//!     resolver.get("@current_user").unwrap(),
//!     DefaultValue::String("admin".to_string())
//! );
//! ```

use std::sync::Arc;

use tracing::debug;

use crate::error::{ResolutionError, Result};
use crate::registry::ServiceRegistry;
use crate::resolver::default_resolver::{DefaultResolver, TYPE_PATH_SEPARATOR};
use crate::value::DefaultValue;

/// Marker prefix for service-identifier descriptors.
pub const SERVICE_ID_PREFIX: char = '@';

/// Resolver adding service lookup and factory strategies over the base.
pub struct FrameworkResolver {
    base: DefaultResolver,
    services: Arc<dyn ServiceRegistry>,
}

impl FrameworkResolver {
    /// Create a framework resolver from a base resolver and a service registry.
    pub fn new(base: DefaultResolver, services: Arc<dyn ServiceRegistry>) -> Self {
        Self { base, services }
    }

    /// The wrapped base resolver.
    pub fn base(&self) -> &DefaultResolver {
        &self.base
    }

    /// Get a default value for a type descriptor, service identifier included.
    pub fn get(&self, descriptor: &str) -> Result<DefaultValue> {
        if let Some(id) = descriptor.strip_prefix(SERVICE_ID_PREFIX) {
            debug!(service_id = %id, "Resolving descriptor via service registry");
            return self
                .services
                .lookup(id)
                .map_err(|err| ResolutionError::missing_class(descriptor, err.to_string()));
        }

        if !descriptor.contains(TYPE_PATH_SEPARATOR) {
            return self.base.get(descriptor);
        }

        match self.base.get_default_from_type_name(descriptor) {
            Ok(value) => Ok(value),
            Err(original) => self.resolve_via_factories(descriptor, original),
        }
    }

    /// Factory fallbacks for a type name the base resolver rejected.
    fn resolve_via_factories(
        &self,
        descriptor: &str,
        original: ResolutionError,
    ) -> Result<DefaultValue> {
        let Some(entry) = self.base.registry().lookup(descriptor) else {
            return Err(original);
        };

        if let Some(factory) = entry.container_factory() {
            debug!(type_name = %descriptor, "Constructing via container-aware factory");
            return Ok(DefaultValue::Instance(factory(self.services.as_ref())));
        }

        if entry.is_instantiable() {
            if let Some(create) = entry.create_factory() {
                debug!(type_name = %descriptor, "Constructing via create() factory");
                return Ok(DefaultValue::Instance(create()));
            }
        }

        Err(original)
    }
}
