//! Verification record stores
//!
//! Implementations of the core `VerificationStore` trait:
//! - `MemoryVerificationStore`: process-local map, for development and tests
//! - `RedisVerificationStore`: Redis keys with native expiry

pub mod memory_store;
pub mod redis_store;


use std::sync::Arc;

use chrono::Duration;
use linka_core::services::verification::VerificationStore;
use linka_shared::config::{StoreBackend, StoreConfig, VerificationConfig};

use crate::cache::RedisClient;
use crate::InfrastructureError;

pub use memory_store::MemoryVerificationStore;
pub use redis_store::RedisVerificationStore;

/// Create the verification store selected by configuration
///
/// Unlike mail delivery there is no fallback: a Redis deployment that
/// cannot reach Redis fails at startup instead of silently keeping codes
/// in process memory.
pub async fn create_store(
    store: &StoreConfig,
    verification: &VerificationConfig,
) -> Result<Arc<dyn VerificationStore>, InfrastructureError> {
    let retention_seconds = verification.retention_seconds();

    match store.backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory verification store");
            Ok(Arc::new(MemoryVerificationStore::with_retention(
                Duration::seconds(retention_seconds as i64),
            )))
        }
        StoreBackend::Redis => {
            let client = RedisClient::new(&store.redis).await?;
            tracing::info!("Using Redis verification store");
            Ok(Arc::new(RedisVerificationStore::new(
                client,
                store.redis.clone(),
                retention_seconds,
            )))
        }
    }
}
