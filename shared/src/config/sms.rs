//! SMS provider configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Default request timeout for provider API calls, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// SMS service configuration
///
/// Credentials and the fixed sender identity for the outbound SMS provider.
/// Loaded once at startup and passed into the dispatcher explicitly; the
/// dispatch path never reads the environment itself.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// SMS service provider ("vonage", "mock")
    pub provider: String,
    /// API credentials
    pub api_key: String,
    /// API secret/token
    pub api_secret: String,
    /// Fixed sender identifier, applied to every outbound message
    pub from_number: String,
    /// Timeout for provider API requests in seconds
    pub request_timeout_secs: u64,
}

impl SmsConfig {
    /// Load SMS configuration from environment variables
    ///
    /// Missing variables fall back to the mock provider defaults so a
    /// development environment works without any credentials configured.
    pub fn from_env() -> Self {
        Self {
            provider: env::var("SMS_PROVIDER").unwrap_or_else(|_| "mock".to_string()),
            api_key: env::var("SMS_API_KEY").unwrap_or_default(),
            api_secret: env::var("SMS_API_SECRET").unwrap_or_default(),
            from_number: env::var("SMS_FROM_NUMBER")
                .unwrap_or_else(|_| "12013814794".to_string()),
            request_timeout_secs: env::var("SMS_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: "mock".to_string(),
            api_key: String::new(),
            api_secret: String::new(),
            from_number: "12013814794".to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SmsConfig::default();
        assert_eq!(config.provider, "mock");
        assert!(config.api_key.is_empty());
        assert_eq!(config.from_number, "12013814794");
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    // Single test for the env loader so parallel tests never race on the
    // SMS_* variables.
    #[test]
    fn test_from_env() {
        std::env::set_var("SMS_PROVIDER", "vonage");
        std::env::set_var("SMS_API_KEY", "key123");
        std::env::set_var("SMS_API_SECRET", "secret456");
        std::env::set_var("SMS_FROM_NUMBER", "15550001111");
        std::env::set_var("SMS_REQUEST_TIMEOUT_SECS", "10");

        let config = SmsConfig::from_env();
        assert_eq!(config.provider, "vonage");
        assert_eq!(config.api_key, "key123");
        assert_eq!(config.api_secret, "secret456");
        assert_eq!(config.from_number, "15550001111");
        assert_eq!(config.request_timeout_secs, 10);

        // An unparseable timeout falls back to the default
        std::env::set_var("SMS_REQUEST_TIMEOUT_SECS", "not-a-number");
        let config = SmsConfig::from_env();
        assert_eq!(config.request_timeout_secs, DEFAULT_REQUEST_TIMEOUT_SECS);

        std::env::remove_var("SMS_PROVIDER");
        std::env::remove_var("SMS_API_KEY");
        std::env::remove_var("SMS_API_SECRET");
        std::env::remove_var("SMS_FROM_NUMBER");
        std::env::remove_var("SMS_REQUEST_TIMEOUT_SECS");
    }
}
