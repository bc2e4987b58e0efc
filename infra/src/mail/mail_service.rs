//! Mail Service Interface
//!
//! Defines the trait for mail service implementations that deliver
//! verification codes and other messages.

use async_trait::async_trait;

use crate::InfrastructureError;

/// Mail service trait for sending plain-text email
///
/// Implementations include:
/// - Transactional mail HTTP API
/// - Mock implementation for development
#[async_trait]
pub trait MailService: Send + Sync {
    /// Send an email message
    ///
    /// # Arguments
    ///
    /// * `recipient` - The recipient's email address
    /// * `subject` - Subject line
    /// * `body` - Plain-text body
    ///
    /// # Returns
    ///
    /// * `Ok(message_id)` - Identifier assigned to the sent message
    /// * `Err(InfrastructureError)` - If sending fails
    async fn send_email(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, InfrastructureError>;

    /// Send a verification code
    ///
    /// Formats the standard LINKA verification message and sends it.
    async fn send_verification_code(
        &self,
        recipient: &str,
        code: &str,
        expires_in_minutes: i64,
    ) -> Result<String, InfrastructureError> {
        let (subject, body) = verification_message(code, expires_in_minutes);
        self.send_email(recipient, &subject, &body).await
    }

    /// Get the service provider name
    fn provider_name(&self) -> &str;

    /// Check if the service is available
    ///
    /// Default implementation always returns true.
    async fn is_available(&self) -> bool {
        true
    }
}

/// Subject and body of a verification code email
pub fn verification_message(code: &str, expires_in_minutes: i64) -> (String, String) {
    let subject = String::from("Your LINKA verification code");
    let body = format!(
        "Your LINKA verification code is: {}\n\n\
         The code expires in {} minutes. If you did not request it, you can ignore this email.",
        code, expires_in_minutes
    );
    (subject, body)
}
