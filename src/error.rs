//! # Resolution Error Types
//!
//! Structured error handling for default value resolution using thiserror.
//! A single error type carries the original type descriptor, a human-readable
//! reason, and a stable classification code.

use serde::Serialize;
use thiserror::Error;

/// Classification codes for resolution failures.
///
/// Discriminants are stable and part of the public contract; callers may
/// persist or report them numerically via [`ErrorCode::as_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Unrecognized primitive keyword or other unclassified failure.
    Unclassified = 0,
    /// The named type is not registered / does not exist.
    MissingClass = 1,
    /// The named type exists but is abstract or otherwise non-instantiable.
    CannotInstantiate = 2,
    /// Reserved: the named type has no usable constructor. Not currently
    /// produced by any resolution path, kept for code stability.
    NoConstructor = 3,
    /// The named type's constructor requires one or more parameters.
    RequiresParameters = 4,
}

impl ErrorCode {
    /// Numeric form of the classification code.
    pub fn as_code(self) -> u8 {
        self as u8
    }
}

/// Error returned when a default value cannot be determined.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("cannot determine a default value from \"{descriptor}\": {reason}")]
pub struct ResolutionError {
    descriptor: String,
    reason: String,
    code: ErrorCode,
}

impl ResolutionError {
    /// Create a resolution error with an explicit classification code.
    pub fn new(
        descriptor: impl Into<String>,
        reason: impl Into<String>,
        code: ErrorCode,
    ) -> Self {
        Self {
            descriptor: descriptor.into(),
            reason: reason.into(),
            code,
        }
    }

    /// Create an unclassified error (code 0).
    pub fn unclassified(descriptor: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(descriptor, reason, ErrorCode::Unclassified)
    }

    /// Create a missing-class error for an unregistered or unknown type.
    pub fn missing_class(descriptor: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(descriptor, reason, ErrorCode::MissingClass)
    }

    /// Create a cannot-instantiate error for an abstract or interface-like type.
    pub fn cannot_instantiate(descriptor: impl Into<String>) -> Self {
        let descriptor = descriptor.into();
        let reason = format!("\"{descriptor}\" is not instantiable");
        Self::new(descriptor, reason, ErrorCode::CannotInstantiate)
    }

    /// Create a requires-parameters error for a constructor that cannot be
    /// called with zero arguments.
    pub fn requires_parameters(descriptor: impl Into<String>, count: usize) -> Self {
        let descriptor = descriptor.into();
        let reason =
            format!("\"{descriptor}\" has a constructor but it requires {count} parameters");
        Self::new(descriptor, reason, ErrorCode::RequiresParameters)
    }

    /// The original type descriptor the caller passed in.
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    /// The human-readable reason the default could not be determined.
    pub fn reason(&self) -> &str {
        &self.reason
    }

    /// The classification code for this failure.
    pub fn code(&self) -> ErrorCode {
        self.code
    }
}

/// Result type alias for resolution operations.
pub type Result<T> = std::result::Result<T, ResolutionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_includes_descriptor_and_reason() {
        let err = ResolutionError::unclassified("zebra", "that variable type is not understood");
        let display = format!("{err}");
        assert!(display.contains("cannot determine a default value from \"zebra\""));
        assert!(display.contains("that variable type is not understood"));
    }

    #[test]
    fn test_error_code_discriminants_are_stable() {
        assert_eq!(ErrorCode::Unclassified.as_code(), 0);
        assert_eq!(ErrorCode::MissingClass.as_code(), 1);
        assert_eq!(ErrorCode::CannotInstantiate.as_code(), 2);
        assert_eq!(ErrorCode::NoConstructor.as_code(), 3);
        assert_eq!(ErrorCode::RequiresParameters.as_code(), 4);
    }

    #[test]
    fn test_helper_constructors_set_codes() {
        let err = ResolutionError::cannot_instantiate("app::traits::Renderer");
        assert_eq!(err.code(), ErrorCode::CannotInstantiate);
        assert!(err.reason().contains("is not instantiable"));

        let err = ResolutionError::requires_parameters("app::http::ApiClient", 2);
        assert_eq!(err.code(), ErrorCode::RequiresParameters);
        assert!(err.reason().contains("requires 2 parameters"));

        let err = ResolutionError::missing_class("app::Gone", "type \"app::Gone\" does not exist");
        assert_eq!(err.code(), ErrorCode::MissingClass);
        assert_eq!(err.descriptor(), "app::Gone");
    }

    #[test]
    fn test_error_code_serializes_as_screaming_snake_case() {
        let json = serde_json::to_string(&ErrorCode::RequiresParameters).unwrap();
        assert_eq!(json, "\"REQUIRES_PARAMETERS\"");
    }
}
