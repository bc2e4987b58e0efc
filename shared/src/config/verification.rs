//! Verification code and record storage configuration

use serde::{Deserialize, Serialize};

use super::{env_or, CacheConfig};

/// Default lifetime of an issued verification code
pub const DEFAULT_CODE_TTL_MINUTES: i64 = 10;

/// Default time a record may linger in a store with native key expiry
pub const DEFAULT_RECORD_RETENTION_MINUTES: i64 = 60;

/// Verification code lifetime settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VerificationConfig {
    /// Minutes after issuance during which a code verifies
    pub code_ttl_minutes: i64,

    /// Minutes after issuance before a store may drop the record on its own.
    /// Longer than the TTL so late attempts still report an expired code.
    pub record_retention_minutes: i64,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            code_ttl_minutes: DEFAULT_CODE_TTL_MINUTES,
            record_retention_minutes: DEFAULT_RECORD_RETENTION_MINUTES,
        }
    }
}

impl VerificationConfig {
    /// Create from environment variables
    ///
    /// Retention is raised to the TTL when configured below it.
    pub fn from_env() -> Self {
        let code_ttl_minutes =
            env_or("VERIFICATION_CODE_TTL_MINUTES", DEFAULT_CODE_TTL_MINUTES).max(1);
        let record_retention_minutes = env_or(
            "VERIFICATION_RECORD_RETENTION_MINUTES",
            DEFAULT_RECORD_RETENTION_MINUTES,
        )
        .max(code_ttl_minutes);

        Self {
            code_ttl_minutes,
            record_retention_minutes,
        }
    }

    /// Retention window in seconds, never shorter than the TTL
    pub fn retention_seconds(&self) -> u64 {
        (self.record_retention_minutes.max(self.code_ttl_minutes) * 60) as u64
    }
}

/// Backend holding verification records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// In-process map; records vanish on restart
    #[default]
    Memory,
    /// Redis keys with native expiry
    Redis,
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "memory" | "mem" => Ok(StoreBackend::Memory),
            "redis" => Ok(StoreBackend::Redis),
            _ => Err(format!("Invalid verification store: {}", s)),
        }
    }
}

/// Verification record storage configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Selected backend
    #[serde(default)]
    pub backend: StoreBackend,

    /// Redis settings, used when `backend` is `redis`
    #[serde(default)]
    pub redis: CacheConfig,
}

impl StoreConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            backend: env_or("VERIFICATION_STORE", StoreBackend::default()),
            redis: CacheConfig::from_env(),
        }
    }
}
