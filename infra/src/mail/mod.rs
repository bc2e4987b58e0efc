//! Mail Service Module
//!
//! Delivery of verification codes by email. The verification service only
//! produces codes; the HTTP layer hands them to a `MailService`.
//!
//! ## Features
//!
//! - **Mail Service Trait**: Common interface for all mail providers
//! - **Mock Implementation**: Log output for development
//! - **HTTP Provider**: Transactional mail API with retries
//! - **Security**: Email masking in logs

pub mod http_mail;
pub mod mail_service;
pub mod mock_mail;

#[cfg(test)]
mod tests;

use std::sync::Arc;

use linka_shared::config::{MailConfig, MailProvider};

pub use http_mail::HttpMailService;
pub use mail_service::{verification_message, MailService};
pub use mock_mail::MockMailService;

/// Create a mail service based on configuration
///
/// An HTTP provider that cannot be constructed (missing endpoint, bad
/// client settings) falls back to the mock implementation with a warning,
/// so a development setup without mail credentials still starts.
pub fn create_mail_service(config: &MailConfig) -> Arc<dyn MailService> {
    match config.provider {
        MailProvider::Mock => Arc::new(MockMailService::new()),
        MailProvider::Http => match HttpMailService::new(config.clone()) {
            Ok(service) => Arc::new(service),
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Failed to configure HTTP mail provider, using mock implementation"
                );
                Arc::new(MockMailService::new())
            }
        },
    }
}
