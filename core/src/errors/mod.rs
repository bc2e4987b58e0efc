//! Domain-specific error types and error handling.

use thiserror::Error;

/// Core domain errors
///
/// Verification outcomes such as a wrong or expired code are not errors;
/// they are reported through `VerificationResult`.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The verification store failed or could not be reached
    #[error("Persistence error: {message}")]
    Persistence { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    /// Whether retrying the same request may succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, DomainError::Persistence { .. })
    }
}

/// Failure reported by a `VerificationStore` implementation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct StoreError(pub String);

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::Persistence { message: err.0 }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
