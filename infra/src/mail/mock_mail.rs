//! Mock Mail Service Implementation
//!
//! Logs messages instead of sending them. Used in development and tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

use linka_shared::utils::email::{is_plausible_email, mask_email};

use super::mail_service::MailService;
use crate::InfrastructureError;

/// A message captured by the mock service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMail {
    pub message_id: String,
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Mock mail service for development and testing
///
/// Clones share the counter, the failure switch and the outbox, so a test
/// can keep a handle while the application owns another.
#[derive(Clone, Default)]
pub struct MockMailService {
    /// Number of messages sent
    message_count: Arc<AtomicU64>,
    /// Whether to simulate delivery failures
    simulate_failure: Arc<AtomicBool>,
    /// Messages sent so far, newest last
    outbox: Arc<Mutex<Vec<SentMail>>>,
}

impl MockMailService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock service that fails every delivery
    pub fn failing() -> Self {
        let service = Self::new();
        service.set_simulate_failure(true);
        service
    }

    /// Get the total number of messages sent
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Enable or disable failure simulation
    pub fn set_simulate_failure(&self, simulate: bool) {
        self.simulate_failure.store(simulate, Ordering::SeqCst);
    }

    /// The most recent message sent to `recipient`
    pub fn last_sent_to(&self, recipient: &str) -> Option<SentMail> {
        self.outbox
            .lock()
            .ok()?
            .iter()
            .rev()
            .find(|mail| mail.recipient == recipient)
            .cloned()
    }
}

#[async_trait]
impl MailService for MockMailService {
    async fn send_email(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, InfrastructureError> {
        if !is_plausible_email(recipient) {
            return Err(InfrastructureError::Mail(format!(
                "Invalid recipient address: {}",
                mask_email(recipient)
            )));
        }

        if self.simulate_failure.load(Ordering::SeqCst) {
            warn!(
                recipient = %mask_email(recipient),
                "Mock mail service simulating failure"
            );
            return Err(InfrastructureError::Mail(
                "Simulated mail delivery failure".to_string(),
            ));
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        if let Ok(mut outbox) = self.outbox.lock() {
            outbox.push(SentMail {
                message_id: message_id.clone(),
                recipient: recipient.to_string(),
                subject: subject.to_string(),
                body: body.to_string(),
            });
        }

        info!(
            target: "mail_service",
            provider = "mock",
            recipient = %mask_email(recipient),
            message_id = %message_id,
            message_number = count,
            subject = %subject,
            "Email sent successfully (mock)"
        );

        Ok(message_id)
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }

    async fn is_available(&self) -> bool {
        !self.simulate_failure.load(Ordering::SeqCst)
    }
}
