//! Shared utilities and common types for the LINKA server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Email helpers (normalization, plausibility checks, log masking)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, CacheConfig, Environment, LogFormat, LoggingConfig, MailConfig, MailProvider,
    ServerConfig, StoreBackend, StoreConfig, VerificationConfig,
};
pub use utils::email;
