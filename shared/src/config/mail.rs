//! Mail delivery configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// Mail delivery provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MailProvider {
    /// Log messages instead of sending them
    #[default]
    Mock,
    /// Transactional mail HTTP API
    Http,
}

impl std::str::FromStr for MailProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mock" => Ok(MailProvider::Mock),
            "http" | "api" => Ok(MailProvider::Http),
            _ => Err(format!("Invalid mail provider: {}", s)),
        }
    }
}

/// Mail delivery configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Selected provider
    #[serde(default)]
    pub provider: MailProvider,

    /// Endpoint accepting JSON messages (HTTP provider only)
    #[serde(default)]
    pub api_url: String,

    /// Bearer token for the mail API
    #[serde(default)]
    pub api_key: String,

    /// Sender address
    pub from_address: String,

    /// Maximum retry attempts for failed requests
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Initial retry delay in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,

    /// Timeout for API requests in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: MailProvider::default(),
            api_url: String::new(),
            api_key: String::new(),
            from_address: String::from("no-reply@linka.app"),
            max_retries: default_max_retries(),
            retry_delay_ms: default_retry_delay_ms(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            provider: env_or("MAIL_PROVIDER", defaults.provider),
            api_url: std::env::var("MAIL_API_URL").unwrap_or(defaults.api_url),
            api_key: std::env::var("MAIL_API_KEY").unwrap_or(defaults.api_key),
            from_address: std::env::var("MAIL_FROM").unwrap_or(defaults.from_address),
            max_retries: env_or("MAIL_MAX_RETRIES", defaults.max_retries),
            retry_delay_ms: env_or("MAIL_RETRY_DELAY_MS", defaults.retry_delay_ms),
            request_timeout_secs: env_or(
                "MAIL_REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            ),
        }
    }
}

fn default_max_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    500
}

fn default_request_timeout_secs() -> u64 {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mail_config_default() {
        let config = MailConfig::default();
        assert_eq!(config.provider, MailProvider::Mock);
        assert_eq!(config.max_retries, 3);
        assert!(config.api_url.is_empty());
    }

    #[test]
    fn test_mail_provider_from_str() {
        assert_eq!("HTTP".parse::<MailProvider>().unwrap(), MailProvider::Http);
        assert!("carrier-pigeon".parse::<MailProvider>().is_err());
    }
}
