//! Verification service module for email-based verification
//!
//! This module provides the verification code workflow:
//! - Code generation and issuance (one active code per email)
//! - Code verification with expiry and single-use consumption
//! - Collaborator traits for storage, time and code generation

mod config;
mod service;
mod traits;
mod types;


pub use config::VerificationServiceConfig;
pub use service::VerificationService;
pub use traits::{Clock, CodeGenerator, RandomCodeGenerator, SystemClock, VerificationStore};
pub use types::{IssuedCode, VerificationResult};
