//! Types for verification service results

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A freshly issued verification code, ready to hand to a mail collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedCode {
    /// Normalized email the code is bound to
    pub email: String,
    /// The 6-digit code
    pub code: String,
    /// When the code was issued
    pub issued_at: DateTime<Utc>,
    /// When the code stops verifying
    pub expires_at: DateTime<Utc>,
}

impl IssuedCode {
    /// Whole minutes of validity, for delivery messages
    pub fn valid_for_minutes(&self) -> i64 {
        (self.expires_at - self.issued_at).num_minutes()
    }
}

/// Outcome of a verification attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationResult {
    /// The code matched within its lifetime and has been consumed
    Verified,
    /// A code is pending but the submitted one differs; retry allowed
    Mismatch,
    /// The pending code outlived its TTL and has been discarded
    Expired,
    /// No code is pending for this email
    NotFound,
}

impl VerificationResult {
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationResult::Verified)
    }

    /// Wire name, matching the serde representation
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationResult::Verified => "VERIFIED",
            VerificationResult::Mismatch => "MISMATCH",
            VerificationResult::Expired => "EXPIRED",
            VerificationResult::NotFound => "NOT_FOUND",
        }
    }
}

impl std::fmt::Display for VerificationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
