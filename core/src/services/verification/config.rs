//! Configuration for the verification service

use chrono::Duration;
use linka_shared::config::verification::{VerificationConfig, DEFAULT_CODE_TTL_MINUTES};

/// Configuration for the verification service
#[derive(Debug, Clone)]
pub struct VerificationServiceConfig {
    /// Number of minutes after issuance before a code expires
    pub code_expiration_minutes: i64,
}

impl VerificationServiceConfig {
    /// TTL as a chrono duration
    pub fn code_ttl(&self) -> Duration {
        Duration::minutes(self.code_expiration_minutes)
    }
}

impl Default for VerificationServiceConfig {
    fn default() -> Self {
        Self {
            code_expiration_minutes: DEFAULT_CODE_TTL_MINUTES,
        }
    }
}

impl From<&VerificationConfig> for VerificationServiceConfig {
    fn from(config: &VerificationConfig) -> Self {
        Self {
            code_expiration_minutes: config.code_ttl_minutes,
        }
    }
}
