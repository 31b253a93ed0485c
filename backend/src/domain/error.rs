//! Domain-level error types.
//!
//! These errors are transport agnostic. The inbound HTTP adapter maps them to
//! status codes and response bodies; nothing in this module knows about Actix.

use serde_json::Value;

/// Stable machine-readable error code describing the failure category.
///
/// The categories mirror the request-processing pipeline: a request is either
/// rejected during field checking (`MissingField`, `InvalidType`), rejected by
/// the array-length reconciler (`ArityMismatch`), fails at the storage
/// collaborator (`StorageFailure`), misses on a lookup (`NotFound`), or hits
/// an unexpected internal condition (`Internal`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorCode {
    /// A required request field is absent.
    MissingField,
    /// A request field has the wrong primitive shape.
    InvalidType,
    /// Parallel batch arrays have unequal nonzero lengths.
    ArityMismatch,
    /// A lookup matched zero rows.
    NotFound,
    /// The storage collaborator reported a failure.
    StorageFailure,
    /// An unexpected error occurred inside the domain.
    Internal,
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` must be non-empty once trimmed of whitespace.
///
/// # Examples
/// ```
/// use pantry_backend::domain::{Error, ErrorCode};
///
/// let err = Error::not_found("no such dietitian");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    message: String,
    details: Option<Value>,
}

/// Validation errors emitted by the constructors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ErrorValidationError {
    /// The supplied message was empty or whitespace-only.
    #[error("error message must not be empty")]
    EmptyMessage,
}

impl Error {
    /// Create a new error, panicking if validation fails.
    ///
    /// # Panics
    /// Panics when `message` is empty once trimmed. Use [`Error::try_new`]
    /// when the message originates from untrusted input.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        match Self::try_new(code, message) {
            Ok(value) => value,
            Err(err) => panic!("error messages must satisfy validation: {err}"),
        }
    }

    /// Fallible constructor that validates the message content.
    pub fn try_new(
        code: ErrorCode,
        message: impl Into<String>,
    ) -> Result<Self, ErrorValidationError> {
        let message = message.into();
        if message.trim().is_empty() {
            return Err(ErrorValidationError::EmptyMessage);
        }
        Ok(Self {
            code,
            message,
            details: None,
        })
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Supplementary error details for adapters and structured logs.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach structured details to the error.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::MissingField`].
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingField, message)
    }

    /// Convenience constructor for [`ErrorCode::InvalidType`].
    pub fn invalid_type(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidType, message)
    }

    /// Convenience constructor for [`ErrorCode::ArityMismatch`].
    pub fn arity_mismatch(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ArityMismatch, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// Convenience constructor for [`ErrorCode::StorageFailure`].
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageFailure, message)
    }

    /// Convenience constructor for [`ErrorCode::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Internal, message)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests;
