//! # Type Registry
//!
//! Thread-safe registration table mapping fully-qualified type names to the
//! construction facts the resolvers dispatch on.
//!
//! ## Overview
//!
//! A [`TypeEntry`] records what reflection would otherwise discover about a
//! type: whether it is instantiable at all, how many required parameters its
//! constructor takes, and the factory closures it exposes. The resolvers
//! never construct anything themselves; they only invoke closures registered
//! here.
//!
//! ## Usage
//!
//! ```rust
//! use default_value::{TypeEntry, TypeRegistry};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Widget {
//!     label: String,
//! }
//!
//! let registry = TypeRegistry::new();
//! registry.register(TypeEntry::constructible::<Widget>("app::widgets::Widget"));
//! registry.register(TypeEntry::not_instantiable("app::traits::Renderer"));
//!
//! assert!(registry.contains("app::widgets::Widget"));
//! assert_eq!(registry.stats().total_types, 2);
//! ```

use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use tracing::{debug, warn};

use crate::registry::service_registry::{ContainerCreate, ServiceRegistry};
use crate::value::Instance;

/// Zero-argument constructor or factory closure.
pub type ConstructorFn = Arc<dyn Fn() -> Instance + Send + Sync>;

/// Factory closure receiving the service container.
pub type ContainerFactoryFn = Arc<dyn Fn(&dyn ServiceRegistry) -> Instance + Send + Sync>;

/// Construction facts for one registered type name.
#[derive(Clone)]
pub struct TypeEntry {
    name: String,
    instantiable: bool,
    required_params: usize,
    constructor: Option<ConstructorFn>,
    container_factory: Option<ContainerFactoryFn>,
    create_factory: Option<ConstructorFn>,
}

impl TypeEntry {
    /// A type constructible with zero arguments via its `Default` impl.
    ///
    /// Covers both a declared zero-parameter constructor and the
    /// no-explicit-constructor case.
    pub fn constructible<T>(name: impl Into<String>) -> Self
    where
        T: Default + Any + Send + Sync,
    {
        let name = name.into();
        let type_name = name.clone();
        Self {
            name,
            instantiable: true,
            required_params: 0,
            constructor: Some(Arc::new(move || {
                Instance::with_type_name(type_name.clone(), T::default())
            })),
            container_factory: None,
            create_factory: None,
        }
    }

    /// A type constructible with zero arguments via an explicit closure.
    pub fn with_constructor<T, F>(name: impl Into<String>, constructor: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let name = name.into();
        let type_name = name.clone();
        Self {
            name,
            instantiable: true,
            required_params: 0,
            constructor: Some(Arc::new(move || {
                Instance::with_type_name(type_name.clone(), constructor())
            })),
            container_factory: None,
            create_factory: None,
        }
    }

    /// An abstract or interface-like type that can never be instantiated.
    pub fn not_instantiable(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            instantiable: false,
            required_params: 0,
            constructor: None,
            container_factory: None,
            create_factory: None,
        }
    }

    /// An instantiable type whose constructor requires `count` parameters.
    ///
    /// With `count == 0` this models the ambiguous "constructor inspection
    /// failed" case: the entry claims constructibility but supplies no
    /// constructor, and resolution fails unclassified.
    pub fn requires_parameters(name: impl Into<String>, count: usize) -> Self {
        Self {
            name: name.into(),
            instantiable: true,
            required_params: count,
            constructor: None,
            container_factory: None,
            create_factory: None,
        }
    }

    /// Mark the type as container-aware: it builds itself from the service
    /// container via its [`ContainerCreate`] impl.
    pub fn container_aware<T>(mut self) -> Self
    where
        T: ContainerCreate + Any + Send + Sync,
    {
        let type_name = self.name.clone();
        self.container_factory = Some(Arc::new(move |container| {
            Instance::with_type_name(type_name.clone(), T::create(container))
        }));
        self
    }

    /// Attach a conventional zero-argument `create()` factory.
    pub fn with_create<T, F>(mut self, factory: F) -> Self
    where
        T: Any + Send + Sync,
        F: Fn() -> T + Send + Sync + 'static,
    {
        let type_name = self.name.clone();
        self.create_factory = Some(Arc::new(move || {
            Instance::with_type_name(type_name.clone(), factory())
        }));
        self
    }

    /// The fully-qualified type name this entry is registered under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the type can be instantiated at all.
    pub fn is_instantiable(&self) -> bool {
        self.instantiable
    }

    /// Number of required constructor parameters.
    pub fn required_params(&self) -> usize {
        self.required_params
    }

    /// The zero-argument constructor, when one exists.
    pub fn constructor(&self) -> Option<&ConstructorFn> {
        self.constructor.as_ref()
    }

    /// The container-aware factory, when the type carries that capability.
    pub fn container_factory(&self) -> Option<&ContainerFactoryFn> {
        self.container_factory.as_ref()
    }

    /// The conventional zero-argument `create()` factory, when declared.
    pub fn create_factory(&self) -> Option<&ConstructorFn> {
        self.create_factory.as_ref()
    }
}

impl fmt::Debug for TypeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeEntry")
            .field("name", &self.name)
            .field("instantiable", &self.instantiable)
            .field("required_params", &self.required_params)
            .field("constructor", &self.constructor.is_some())
            .field("container_factory", &self.container_factory.is_some())
            .field("create_factory", &self.create_factory.is_some())
            .finish()
    }
}

/// Statistics about the registered types.
#[derive(Debug, Clone, Serialize)]
pub struct TypeRegistryStats {
    pub total_types: usize,
    pub type_names: Vec<String>,
}

/// Thread-safe registry of type entries keyed by fully-qualified name.
pub struct TypeRegistry {
    entries: RwLock<HashMap<String, TypeEntry>>,
}

impl TypeRegistry {
    /// Create an empty type registry.
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Register a type entry, replacing any previous entry of the same name.
    pub fn register(&self, entry: TypeEntry) {
        let name = entry.name().to_string();
        let previous = self.entries.write().insert(name.clone(), entry);
        if previous.is_some() {
            warn!(type_name = %name, "Replaced existing type registration");
        } else {
            debug!(type_name = %name, "Registered type");
        }
    }

    /// Look up an entry by fully-qualified name.
    pub fn lookup(&self, name: &str) -> Option<TypeEntry> {
        self.entries.read().get(name).cloned()
    }

    /// Whether a type is registered under the name.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.read().contains_key(name)
    }

    /// Get registry statistics.
    pub fn stats(&self) -> TypeRegistryStats {
        let entries = self.entries.read();
        let mut type_names: Vec<String> = entries.keys().cloned().collect();
        type_names.sort();
        TypeRegistryStats {
            total_types: entries.len(),
            type_names,
        }
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
