//! Main verification service implementation

use std::sync::Arc;

use linka_shared::utils::email::{mask_email, normalize_email};

use crate::domain::entities::verification_record::VerificationRecord;
use crate::errors::{DomainError, DomainResult};

use super::config::VerificationServiceConfig;
use super::traits::{Clock, CodeGenerator, RandomCodeGenerator, SystemClock, VerificationStore};
use super::types::{IssuedCode, VerificationResult};

/// Verification service for email verification codes
///
/// Constructed once at startup and shared between request handlers. All
/// state lives in the injected store, so the service itself is immutable.
///
/// A verification racing a re-issue for the same email may observe either
/// the old or the new code.
#[derive(Clone)]
pub struct VerificationService {
    /// Record storage
    store: Arc<dyn VerificationStore>,
    /// Time source
    clock: Arc<dyn Clock>,
    /// Code source
    codes: Arc<dyn CodeGenerator>,
    /// Service configuration
    config: VerificationServiceConfig,
}

impl VerificationService {
    /// Create a new verification service using the system clock and the
    /// random code generator
    pub fn new(store: Arc<dyn VerificationStore>, config: VerificationServiceConfig) -> Self {
        Self {
            store,
            clock: Arc::new(SystemClock),
            codes: Arc::new(RandomCodeGenerator),
            config,
        }
    }

    /// Replace the time source
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the code source
    pub fn with_code_generator(mut self, codes: Arc<dyn CodeGenerator>) -> Self {
        self.codes = codes;
        self
    }

    pub fn config(&self) -> &VerificationServiceConfig {
        &self.config
    }

    /// Issue a verification code for an email address
    ///
    /// This method:
    /// 1. Normalizes the email (trim + lowercase)
    /// 2. Generates a fresh 6-digit code
    /// 3. Upserts the record, replacing and invalidating any previous code
    ///
    /// The code is returned for delivery; this service never sends mail.
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedCode)` - The stored code and its validity window
    /// * `Err(DomainError::Validation)` - If the email is empty
    /// * `Err(DomainError::Persistence)` - If the store fails
    pub async fn issue_code(&self, email: &str) -> DomainResult<IssuedCode> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(DomainError::Validation {
                message: "Email must not be empty".to_string(),
            });
        }

        let record = VerificationRecord::new(email, self.codes.generate(), self.clock.now());

        self.store.upsert(&record).await.map_err(|e| {
            tracing::error!(
                email = %mask_email(&record.email),
                error = %e,
                event = "verification_code_storage_failed",
                "Failed to store verification code"
            );
            DomainError::from(e)
        })?;

        tracing::info!(
            email = %mask_email(&record.email),
            event = "verification_code_issued",
            "Issued verification code"
        );

        let expires_at = record.expires_at(self.config.code_ttl());
        Ok(IssuedCode {
            email: record.email,
            code: record.code,
            issued_at: record.issued_at,
            expires_at,
        })
    }

    /// Verify a submitted code
    ///
    /// Outcomes, in order of precedence:
    /// - no record: `NotFound`
    /// - record older than the TTL: record discarded, `Expired`
    /// - code differs: `Mismatch`, record kept for another attempt
    /// - code matches: record consumed, `Verified`
    ///
    /// If another request consumed the record between lookup and delete,
    /// the outcome is `NotFound`, so each code verifies at most once.
    ///
    /// # Returns
    ///
    /// * `Ok(VerificationResult)` - The outcome
    /// * `Err(DomainError::Validation)` - If the email or code is empty
    /// * `Err(DomainError::Persistence)` - If the store fails
    pub async fn verify_code(
        &self,
        email: &str,
        submitted_code: &str,
    ) -> DomainResult<VerificationResult> {
        let email = normalize_email(email);
        if email.is_empty() {
            return Err(DomainError::Validation {
                message: "Email must not be empty".to_string(),
            });
        }
        if submitted_code.is_empty() {
            return Err(DomainError::Validation {
                message: "Verification code must not be empty".to_string(),
            });
        }

        let result = self.evaluate(&email, submitted_code).await.map_err(|e| {
            tracing::error!(
                email = %mask_email(&email),
                error = %e,
                event = "verification_lookup_failed",
                "System error during code verification"
            );
            e
        })?;

        match result {
            VerificationResult::Verified => tracing::info!(
                email = %mask_email(&email),
                event = "verification_succeeded",
                "Verification code verified"
            ),
            other => tracing::warn!(
                email = %mask_email(&email),
                outcome = %other,
                event = "verification_rejected",
                "Verification code rejected"
            ),
        }

        Ok(result)
    }

    async fn evaluate(&self, email: &str, submitted_code: &str) -> DomainResult<VerificationResult> {
        let Some(record) = self.store.find(email).await? else {
            return Ok(VerificationResult::NotFound);
        };

        if record.is_expired_at(self.clock.now(), self.config.code_ttl()) {
            self.store.delete(email).await?;
            return Ok(VerificationResult::Expired);
        }

        if !record.matches(submitted_code) {
            return Ok(VerificationResult::Mismatch);
        }

        if self.store.delete(email).await? {
            Ok(VerificationResult::Verified)
        } else {
            Ok(VerificationResult::NotFound)
        }
    }
}
