//! HTTP mail provider
//!
//! Sends messages to a transactional mail API as JSON:
//!
//! ```text
//! POST {api_url}
//! Authorization: Bearer {api_key}
//! {"from": "...", "to": "...", "subject": "...", "text": "..."}
//! ```
//!
//! The provider is expected to answer with a JSON object carrying the
//! message identifier in `id` or `message_id`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

use linka_shared::config::MailConfig;
use linka_shared::utils::email::mask_email;

use super::mail_service::MailService;
use crate::InfrastructureError;

/// Upper bound for the backoff between attempts
const MAX_RETRY_DELAY_MS: u64 = 10_000;

#[derive(Debug, Serialize)]
pub(crate) struct OutboundMail<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub subject: &'a str,
    pub text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct ProviderResponse {
    id: Option<String>,
    message_id: Option<String>,
}

/// How a failed attempt should be handled
enum Attempt {
    Retry(String),
    Fail(String),
}

/// Mail service backed by an HTTP API
pub struct HttpMailService {
    client: Client,
    config: MailConfig,
}

impl HttpMailService {
    /// Create the service
    ///
    /// Fails with `InfrastructureError::Config` when no endpoint is set.
    pub fn new(config: MailConfig) -> Result<Self, InfrastructureError> {
        if config.api_url.trim().is_empty() {
            return Err(InfrastructureError::Config(
                "MAIL_API_URL is required for the HTTP mail provider".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!(
            api_url = %config.api_url,
            from = %config.from_address,
            "HTTP mail service initialized"
        );

        Ok(Self { client, config })
    }

    async fn send_once(&self, mail: &OutboundMail<'_>) -> Result<String, Attempt> {
        let mut request = self.client.post(&self.config.api_url).json(mail);
        if !self.config.api_key.is_empty() {
            request = request.bearer_auth(&self.config.api_key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Attempt::Retry(format!("request failed: {}", e)))?;

        let status = response.status();
        if status.is_success() {
            let body = response.json::<ProviderResponse>().await.unwrap_or_default();
            return Ok(body
                .id
                .or(body.message_id)
                .unwrap_or_else(|| format!("http_{}", Uuid::new_v4())));
        }

        let detail = response.text().await.unwrap_or_default();
        let message = format!("provider responded {}: {}", status, detail.trim());
        if is_retryable_status(status) {
            Err(Attempt::Retry(message))
        } else {
            Err(Attempt::Fail(message))
        }
    }

    /// Send with exponential backoff on transient failures
    async fn send_with_retry(&self, mail: &OutboundMail<'_>) -> Result<String, InfrastructureError> {
        let max_attempts = self.config.max_retries.max(1);
        let mut attempts = 0;
        let mut delay = Duration::from_millis(self.config.retry_delay_ms);

        loop {
            attempts += 1;
            debug!(
                "Sending email attempt {}/{} to {}",
                attempts,
                max_attempts,
                mask_email(mail.to)
            );

            match self.send_once(mail).await {
                Ok(message_id) => {
                    info!(
                        recipient = %mask_email(mail.to),
                        message_id = %message_id,
                        attempts,
                        "Email sent successfully"
                    );
                    return Ok(message_id);
                }
                Err(Attempt::Fail(message)) => {
                    error!(
                        recipient = %mask_email(mail.to),
                        "Mail provider rejected the message: {}", message
                    );
                    return Err(InfrastructureError::Mail(format!(
                        "Invalid request: {}",
                        message
                    )));
                }
                Err(Attempt::Retry(message)) => {
                    if attempts >= max_attempts {
                        error!(
                            recipient = %mask_email(mail.to),
                            "Failed to send email after {} attempts: {}", attempts, message
                        );
                        return Err(InfrastructureError::Mail(format!(
                            "Failed to send email after {} attempts: {}",
                            attempts, message
                        )));
                    }

                    warn!(
                        "Failed to send email (attempt {}/{}): {}. Retrying in {:?}",
                        attempts, max_attempts, message, delay
                    );
                    sleep(delay).await;
                    delay = (delay * 2).min(Duration::from_millis(MAX_RETRY_DELAY_MS));
                }
            }
        }
    }
}

/// Server errors and rate limiting are worth another attempt; other
/// client errors are not
pub(crate) fn is_retryable_status(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

#[async_trait]
impl MailService for HttpMailService {
    async fn send_email(
        &self,
        recipient: &str,
        subject: &str,
        body: &str,
    ) -> Result<String, InfrastructureError> {
        let mail = OutboundMail {
            from: &self.config.from_address,
            to: recipient,
            subject,
            text: body,
        };
        self.send_with_retry(&mail).await
    }

    fn provider_name(&self) -> &str {
        "HTTP"
    }
}
