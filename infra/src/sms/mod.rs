//! SMS provider module
//!
//! Provider implementations behind the core `SmsProvider` trait:
//!
//! - **Vonage**: Production SMS via the Vonage REST API
//! - **Mock**: Logging implementation for development and tests
//!
//! [`create_sms_provider`] selects an implementation from configuration and
//! falls back to the mock when a production provider cannot be constructed.

pub mod mock_sms;
pub mod vonage;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use mock_sms::MockSmsProvider;
pub use vonage::{VonageConfig, VonageSmsProvider};

use std::sync::Arc;

use sc_core::services::dispatch::SmsProvider;
use sc_shared::config::SmsConfig;

/// Create an SMS provider based on configuration
///
/// Returns the implementation named by `config.provider`. Construction
/// failures and unknown provider names fall back to the mock provider with
/// a logged warning, so a misconfigured environment degrades to logging
/// rather than refusing to start.
pub fn create_sms_provider(config: &SmsConfig) -> Arc<dyn SmsProvider> {
    match config.provider.as_str() {
        "mock" => Arc::new(MockSmsProvider::new()),
        "vonage" => {
            let vonage_config = VonageConfig::new(config.api_key.clone(), config.api_secret.clone())
                .with_request_timeout_secs(config.request_timeout_secs);

            match VonageSmsProvider::new(vonage_config) {
                Ok(provider) => Arc::new(provider),
                Err(e) => {
                    tracing::error!("Failed to initialize Vonage SMS provider: {}", e);
                    tracing::warn!("Falling back to mock SMS provider");
                    Arc::new(MockSmsProvider::new())
                }
            }
        }
        _ => {
            tracing::warn!(
                "Unknown SMS provider '{}', using mock implementation",
                config.provider
            );
            Arc::new(MockSmsProvider::new())
        }
    }
}
