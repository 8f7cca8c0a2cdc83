//! # Resolvers
//!
//! The two resolution entry points:
//!
//! - **DefaultResolver**: primitive keyword dispatch plus registry-backed
//!   type-name instantiation.
//! - **FrameworkResolver**: composes the default resolver with a service
//!   registry, adding service-identifier lookup and factory strategies.

pub mod default_resolver;
pub mod framework_resolver;

// Re-export main types for easy access
pub use default_resolver::{DefaultResolver, TYPE_PATH_SEPARATOR};
pub use framework_resolver::{FrameworkResolver, SERVICE_ID_PREFIX};
