//! Mock SMS provider implementation
//!
//! A mock implementation of the SMS provider for development and testing.
//! Messages are logged instead of sent; answers can be scripted to simulate
//! a provider rejection or a transport fault.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use sc_core::errors::ProviderError;
use sc_core::services::dispatch::{SendReceipt, SmsProvider, TextEncoding};
use sc_shared::utils::phone::mask_phone_number;

/// Mock SMS provider for development and testing
///
/// This implementation:
/// - Logs message submissions with masked recipients
/// - Generates mock message IDs
/// - Tracks message count for testing
/// - Optionally simulates rejections or transport faults
#[derive(Clone)]
pub struct MockSmsProvider {
    /// Counter for tracking number of messages submitted
    message_count: Arc<AtomicU64>,
    /// Answer every send with this rejection instead of accepting
    reject_with: Option<String>,
    /// Fail every call with a transport error
    simulate_fault: bool,
}

impl MockSmsProvider {
    /// Create a mock provider that accepts every message
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            reject_with: None,
            simulate_fault: false,
        }
    }

    /// Create a mock provider that rejects every message with the given
    /// error text
    pub fn rejecting(error_text: impl Into<String>) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            reject_with: Some(error_text.into()),
            simulate_fault: false,
        }
    }

    /// Create a mock provider whose calls fail at the transport level
    pub fn faulty() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            reject_with: None,
            simulate_fault: true,
        }
    }

    /// Get the total number of messages submitted
    pub fn get_message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Reset the message counter
    pub fn reset_counter(&self) {
        self.message_count.store(0, Ordering::SeqCst);
    }
}

impl Default for MockSmsProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsProvider for MockSmsProvider {
    async fn send_sms(
        &self,
        from: &str,
        to: &str,
        text: &str,
        encoding: TextEncoding,
    ) -> Result<SendReceipt, ProviderError> {
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        let masked = mask_phone_number(to);

        if self.simulate_fault {
            warn!(
                target: "sms_provider",
                provider = "mock",
                recipient = %masked,
                "Simulating transport fault"
            );
            return Err(ProviderError::Transport(
                "simulated transport fault".to_string(),
            ));
        }

        if let Some(error_text) = &self.reject_with {
            warn!(
                target: "sms_provider",
                provider = "mock",
                recipient = %masked,
                error_text = %error_text,
                "Simulating provider rejection"
            );
            return Ok(SendReceipt::Rejected {
                error_text: error_text.clone(),
            });
        }

        let message_id = format!("mock_{}", Uuid::new_v4());

        info!(
            target: "sms_provider",
            provider = "mock",
            sender = from,
            recipient = %masked,
            message_id = %message_id,
            message_length = text.len(),
            encoding = encoding.as_str(),
            count = count,
            "SMS submitted (mock)"
        );

        // Simulate network delay
        tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

        Ok(SendReceipt::Accepted { message_id })
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
