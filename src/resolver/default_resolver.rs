//! # Default Resolver
//!
//! Given a type descriptor string, returns a zero-like default value.
//!
//! ## Overview
//!
//! A descriptor containing the `::` path separator is treated as a
//! fully-qualified type name and resolved through the [`TypeRegistry`].
//! Anything else is matched case-insensitively against the primitive keyword
//! table:
//!
//! | keyword(s)                | default            |
//! |---------------------------|--------------------|
//! | `null`                    | `Null`             |
//! | `object`                  | empty `Object`     |
//! | `array`                   | empty `Array`      |
//! | `bool`, `boolean`         | `Bool(false)`      |
//! | `float`, `double`         | `Float(0.0)`       |
//! | `number`, `int`, `integer`| `Int(0)`           |
//! | `string`                  | empty `String`     |
//!
//! ## Usage
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
//! assert_eq!(resolver.get("INT").unwrap(), DefaultValue::Int(0));
//! let value = resolver.get("app::widgets::Widget").unwrap();
//! assert_eq!(
//!     value.as_instance().unwrap().downcast_ref::<Widget>(),
//!     Some(&Widget::default())
//! );
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::error::{ResolutionError, Result};
use crate::registry::TypeRegistry;
use crate::value::DefaultValue;

/// Path-separator sequence marking a descriptor as a fully-qualified type name.
pub const TYPE_PATH_SEPARATOR: &str = "::";

/// Resolves type descriptors to zero-like default values.
pub struct DefaultResolver {
    registry: Arc<TypeRegistry>,
}

impl DefaultResolver {
    /// Create a resolver over a type registry.
    pub fn new(registry: Arc<TypeRegistry>) -> Self {
        Self { registry }
    }

    /// The type registry this resolver consults.
    pub fn registry(&self) -> &Arc<TypeRegistry> {
        &self.registry
    }

    /// Get a default value for a type descriptor.
    pub fn get(&self, descriptor: &str) -> Result<DefaultValue> {
        if descriptor.contains(TYPE_PATH_SEPARATOR) {
            return self.get_default_from_type_name(descriptor);
        }

        match descriptor.to_lowercase().as_str() {
            "null" => Ok(DefaultValue::Null),
            "object" => Ok(DefaultValue::Object(BTreeMap::new())),
            "array" => Ok(DefaultValue::Array(Vec::new())),
            "bool" | "boolean" => Ok(DefaultValue::Bool(false)),
            "float" | "double" => Ok(DefaultValue::Float(0.0)),
            "number" | "int" | "integer" => Ok(DefaultValue::Int(0)),
            "string" => Ok(DefaultValue::String(String::new())),
            _ => Err(ResolutionError::unclassified(
                descriptor,
                "that variable type is not understood",
            )),
        }
    }

    /// Resolve a fully-qualified type name through the registry.
    pub(crate) fn get_default_from_type_name(&self, name: &str) -> Result<DefaultValue> {
        let Some(entry) = self.registry.lookup(name) else {
            return Err(ResolutionError::missing_class(
                name,
                format!("type \"{name}\" does not exist"),
            ));
        };

        if !entry.is_instantiable() {
            return Err(ResolutionError::cannot_instantiate(name));
        }

        if entry.required_params() == 0 {
            if let Some(constructor) = entry.constructor() {
                debug!(type_name = %name, "Constructing default instance");
                return Ok(DefaultValue::Instance(constructor()));
            }
            // Registered as constructible with zero parameters but no
            // constructor closure was supplied. Historical revisions of this
            // behavior disagreed; resolution fails unclassified rather than
            // treating the entry as constructible.
            return Err(ResolutionError::unclassified(
                name,
                format!("\"{name}\" is registered as constructible but supplies no constructor"),
            ));
        }

        Err(ResolutionError::requires_parameters(
            name,
            entry.required_params(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::registry::TypeEntry;

    #[derive(Debug, Default, PartialEq)]
    struct Widget {
        label: String,
    }

    fn resolver() -> DefaultResolver {
        let registry = Arc::new(TypeRegistry::new());
        registry.register(TypeEntry::constructible::<Widget>("app::widgets::Widget"));
        DefaultResolver::new(registry)
    }

    #[test]
    fn test_keyword_dispatch() {
        let resolver = resolver();
        assert_eq!(resolver.get("int").unwrap(), DefaultValue::Int(0));
        assert_eq!(resolver.get("STRING").unwrap(), DefaultValue::String(String::new()));
    }

    #[test]
    fn test_unknown_keyword_is_unclassified() {
        let err = resolver().get("zebra").unwrap_err();
        assert_eq!(err.code(), ErrorCode::Unclassified);
        assert!(err.reason().contains("that variable type is not understood"));
    }

    #[test]
    fn test_registered_type_constructs_instance() {
        let value = resolver().get("app::widgets::Widget").unwrap();
        let instance = value.as_instance().unwrap();
        assert_eq!(instance.downcast_ref::<Widget>(), Some(&Widget::default()));
    }

    #[test]
    fn test_unregistered_type_is_missing_class() {
        let err = resolver().get("app::widgets::Gone").unwrap_err();
        assert_eq!(err.code(), ErrorCode::MissingClass);
        assert!(err.reason().contains("does not exist"));
    }
}
