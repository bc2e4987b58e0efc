//! In-memory verification store

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use linka_core::errors::StoreError;
use linka_core::services::verification::VerificationStore;
use linka_core::VerificationRecord;

/// Verification records held in a process-local map
///
/// Each upsert also drops records issued longer ago than the retention
/// window, standing in for the key expiry a Redis deployment gets natively.
#[derive(Clone)]
pub struct MemoryVerificationStore {
    records: Arc<RwLock<HashMap<String, VerificationRecord>>>,
    retention: Duration,
}

impl MemoryVerificationStore {
    /// Create a store with the default one hour retention
    pub fn new() -> Self {
        Self::with_retention(Duration::hours(1))
    }

    pub fn with_retention(retention: Duration) -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
            retention,
        }
    }

    /// Number of records currently held
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Drop records issued before `now - retention`; returns how many were dropped
    pub async fn purge_stale(&self, now: DateTime<Utc>) -> usize {
        let cutoff = now - self.retention;
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, record| record.issued_at >= cutoff);
        before - records.len()
    }
}

impl Default for MemoryVerificationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VerificationStore for MemoryVerificationStore {
    async fn upsert(&self, record: &VerificationRecord) -> Result<(), StoreError> {
        let purged = self.purge_stale(Utc::now()).await;
        if purged > 0 {
            tracing::debug!(purged, "Dropped stale verification records");
        }

        self.records
            .write()
            .await
            .insert(record.email.clone(), record.clone());
        Ok(())
    }

    async fn find(&self, email: &str) -> Result<Option<VerificationRecord>, StoreError> {
        Ok(self.records.read().await.get(email).cloned())
    }

    async fn delete(&self, email: &str) -> Result<bool, StoreError> {
        Ok(self.records.write().await.remove(email).is_some())
    }
}
