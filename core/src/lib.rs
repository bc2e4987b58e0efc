//! # LINKA Core
//!
//! Core business logic and domain layer for the LINKA backend.
//! This crate contains the verification record entity, the verification
//! service with its collaborator traits, and the domain error types.

pub mod domain;
pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
