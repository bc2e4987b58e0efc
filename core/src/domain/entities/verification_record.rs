//! Verification record entity for email-based verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Smallest issued code; codes never start with a zero
pub const CODE_MIN: u32 = 100_000;

/// Largest issued code
pub const CODE_MAX: u32 = 999_999;

/// A pending verification code bound to one email address
///
/// The store holds at most one record per normalized email. Issuing a new
/// code replaces the record, which invalidates the previous code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationRecord {
    /// Normalized (trimmed, lowercased) email address; the record key
    pub email: String,

    /// The 6-digit verification code
    pub code: String,

    /// When the code was issued
    pub issued_at: DateTime<Utc>,
}

impl VerificationRecord {
    /// Creates a record for an already normalized email
    pub fn new(email: impl Into<String>, code: impl Into<String>, issued_at: DateTime<Utc>) -> Self {
        Self {
            email: email.into(),
            code: code.into(),
            issued_at,
        }
    }

    /// The instant after which the code no longer verifies
    pub fn expires_at(&self, ttl: Duration) -> DateTime<Utc> {
        self.issued_at + ttl
    }

    /// Whether `now` lies strictly beyond the TTL window
    ///
    /// An attempt exactly at `issued_at + ttl` is still in time.
    pub fn is_expired_at(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.issued_at > ttl
    }

    /// Exact, constant-time comparison against a submitted code
    pub fn matches(&self, submitted: &str) -> bool {
        self.code.len() == submitted.len()
            && constant_time_eq(self.code.as_bytes(), submitted.as_bytes())
    }

    /// Whether a string has the shape of an issued code
    pub fn is_well_formed_code(code: &str) -> bool {
        code.len() == CODE_LENGTH
            && code.chars().all(|c| c.is_ascii_digit())
            && code
                .parse::<u32>()
                .map(|n| (CODE_MIN..=CODE_MAX).contains(&n))
                .unwrap_or(false)
    }
}
