//! Redis-backed verification store
//!
//! Each record is a JSON document under `{prefix}:verification:{email}`,
//! written with `SET ... EX` so a re-issue atomically replaces the previous
//! code and abandoned records disappear after the retention window.

use async_trait::async_trait;
use tracing::{debug, warn};

use linka_core::errors::StoreError;
use linka_core::services::verification::VerificationStore;
use linka_core::VerificationRecord;
use linka_shared::config::cache::CacheConfig;
use linka_shared::utils::email::mask_email;

use crate::cache::RedisClient;

/// Verification store on top of `RedisClient`
#[derive(Clone)]
pub struct RedisVerificationStore {
    client: RedisClient,
    config: CacheConfig,
    /// Key expiry in seconds; longer than the code TTL
    retention_seconds: u64,
}

impl RedisVerificationStore {
    pub fn new(client: RedisClient, config: CacheConfig, retention_seconds: u64) -> Self {
        Self {
            client,
            config,
            retention_seconds,
        }
    }

    /// Redis key holding the record for an email
    pub fn record_key(&self, email: &str) -> String {
        format_record_key(&self.config, email)
    }
}

pub(crate) fn format_record_key(config: &CacheConfig, email: &str) -> String {
    config.make_key(&format!("verification:{}", email))
}

pub(crate) fn encode_record(record: &VerificationRecord) -> Result<String, StoreError> {
    serde_json::to_string(record)
        .map_err(|e| StoreError::new(format!("Failed to encode verification record: {}", e)))
}

pub(crate) fn decode_record(raw: &str) -> Result<VerificationRecord, StoreError> {
    serde_json::from_str(raw)
        .map_err(|e| StoreError::new(format!("Failed to decode verification record: {}", e)))
}

#[async_trait]
impl VerificationStore for RedisVerificationStore {
    async fn upsert(&self, record: &VerificationRecord) -> Result<(), StoreError> {
        let payload = encode_record(record)?;
        self.client
            .set_with_expiry(&self.record_key(&record.email), &payload, self.retention_seconds)
            .await?;

        debug!(
            email = %mask_email(&record.email),
            retention_seconds = self.retention_seconds,
            "Stored verification record"
        );
        Ok(())
    }

    async fn find(&self, email: &str) -> Result<Option<VerificationRecord>, StoreError> {
        match self.client.get(&self.record_key(email)).await? {
            Some(raw) => decode_record(&raw).map(Some).map_err(|e| {
                warn!(email = %mask_email(email), error = %e, "Unreadable verification record");
                e
            }),
            None => Ok(None),
        }
    }

    async fn delete(&self, email: &str) -> Result<bool, StoreError> {
        Ok(self.client.delete(&self.record_key(email)).await?)
    }
}
