//! # Default Value Model
//!
//! The value vocabulary produced by the resolvers: primitive zero-like values
//! plus opaque instances built by registered constructors and factories.
//!
//! Primitive variants have value semantics. [`Instance`] wraps a constructed
//! object behind `Arc<dyn Any>`; equality for instances is identity (same
//! allocation), so two independently constructed instances of the same type
//! are never equal even when their fields match. Callers compare contents by
//! downcasting.

use std::any::Any;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// An opaque constructed instance of a registered type.
#[derive(Clone)]
pub struct Instance {
    type_name: String,
    inner: Arc<dyn Any + Send + Sync>,
}

impl Instance {
    /// Wrap a freshly constructed value, using its Rust type path as the name.
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self::with_type_name(std::any::type_name::<T>(), value)
    }

    /// Wrap a freshly constructed value under an explicit registered name.
    pub fn with_type_name<T: Any + Send + Sync>(name: impl Into<String>, value: T) -> Self {
        Self {
            type_name: name.into(),
            inner: Arc::new(value),
        }
    }

    /// The registered type name this instance was constructed under.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Whether the wrapped value is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.inner.as_ref().is::<T>()
    }

    /// Borrow the wrapped value as a `T`, if it is one.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }
}

impl fmt::Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("type_name", &self.type_name)
            .field("inner", &"<Arc<dyn Any>>")
            .finish()
    }
}

impl PartialEq for Instance {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

/// A zero-like default value produced by resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum DefaultValue {
    /// The absence value.
    Null,
    /// Boolean false by default.
    Bool(bool),
    /// Integer zero by default.
    Int(i64),
    /// Floating-point zero by default.
    Float(f64),
    /// Empty string by default.
    String(String),
    /// Empty ordered sequence by default.
    Array(Vec<DefaultValue>),
    /// Empty structured object (no fields) by default.
    Object(BTreeMap<String, DefaultValue>),
    /// A constructed instance of a registered type.
    Instance(Instance),
}

impl DefaultValue {
    /// Wrap a constructed value as an instance.
    pub fn instance<T: Any + Send + Sync>(value: T) -> Self {
        DefaultValue::Instance(Instance::new(value))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, DefaultValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DefaultValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            DefaultValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            DefaultValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            DefaultValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[DefaultValue]> {
        match self {
            DefaultValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, DefaultValue>> {
        match self {
            DefaultValue::Object(fields) => Some(fields),
            _ => None,
        }
    }

    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            DefaultValue::Instance(instance) => Some(instance),
            _ => None,
        }
    }

    /// Convert to a JSON value.
    ///
    /// Returns `None` for instances (and for containers holding one), since
    /// constructed objects have no generic JSON form. Non-finite floats also
    /// yield `None`, matching `serde_json` number semantics.
    pub fn to_json(&self) -> Option<serde_json::Value> {
        match self {
            DefaultValue::Null => Some(serde_json::Value::Null),
            DefaultValue::Bool(b) => Some(serde_json::Value::Bool(*b)),
            DefaultValue::Int(n) => Some(serde_json::Value::Number((*n).into())),
            DefaultValue::Float(f) => serde_json::Number::from_f64(*f).map(serde_json::Value::Number),
            DefaultValue::String(s) => Some(serde_json::Value::String(s.clone())),
            DefaultValue::Array(items) => items
                .iter()
                .map(DefaultValue::to_json)
                .collect::<Option<Vec<_>>>()
                .map(serde_json::Value::Array),
            DefaultValue::Object(fields) => fields
                .iter()
                .map(|(key, value)| value.to_json().map(|json| (key.clone(), json)))
                .collect::<Option<serde_json::Map<_, _>>>()
                .map(serde_json::Value::Object),
            DefaultValue::Instance(_) => None,
        }
    }
}
