//! Traits for the verification service's collaborators

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::{rngs::OsRng, Rng};

use crate::domain::entities::verification_record::{VerificationRecord, CODE_MAX, CODE_MIN};
use crate::errors::StoreError;

/// Key-value storage for verification records, keyed by normalized email
///
/// Implementations must make `upsert` atomic per key: concurrent writers
/// for the same email resolve last-writer-wins.
#[async_trait]
pub trait VerificationStore: Send + Sync {
    /// Insert the record, replacing any existing record for the same email
    async fn upsert(&self, record: &VerificationRecord) -> Result<(), StoreError>;
    /// Look up the record for an email
    async fn find(&self, email: &str) -> Result<Option<VerificationRecord>, StoreError>;
    /// Remove the record for an email; true if one was removed
    async fn delete(&self, email: &str) -> Result<bool, StoreError>;
}

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Produces verification codes
pub trait CodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Uniform 6-digit codes in `[100000, 999999]` from the OS CSPRNG
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomCodeGenerator;

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        OsRng.gen_range(CODE_MIN..=CODE_MAX).to_string()
    }
}
