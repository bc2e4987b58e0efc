//! # Infrastructure Layer
//!
//! Concrete implementations of the collaborators around the verification
//! service:
//! - **Cache**: Redis client with connection and command retries
//! - **Store**: `VerificationStore` backends (in-memory, Redis)
//! - **Mail**: delivery of verification codes (mock, HTTP mail API)

// Re-export core types for convenience
pub use linka_core::errors::*;

/// Cache module - Redis client and operations
pub mod cache;

/// Verification record stores
pub mod store;

/// Mail delivery module - External mail providers
pub mod mail;

use linka_core::errors::StoreError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Stored data could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail delivery error
    #[error("Mail service error: {0}")]
    Mail(String),
}

impl From<InfrastructureError> for StoreError {
    fn from(err: InfrastructureError) -> Self {
        StoreError::new(err.to_string())
    }
}
