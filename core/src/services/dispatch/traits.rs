//! Collaborator trait for SMS provider integration

use async_trait::async_trait;

use crate::errors::ProviderError;
use super::types::{SendReceipt, TextEncoding};

/// Trait for SMS provider integration
///
/// One implementation per provider; the dispatcher is generic over this
/// trait so tests can substitute a scripted double.
///
/// `Ok(SendReceipt)` covers both acceptance and a structured provider-side
/// rejection. `Err(ProviderError)` is reserved for calls that break down
/// before a structured answer exists (transport fault, unparseable body).
#[async_trait]
pub trait SmsProvider: Send + Sync {
    /// Submit one message to one recipient
    ///
    /// # Arguments
    ///
    /// * `from` - Fixed sender identifier
    /// * `to` - Normalized recipient number
    /// * `text` - Message body, passed through unmodified
    /// * `encoding` - Body encoding to request from the provider
    async fn send_sms(
        &self,
        from: &str,
        to: &str,
        text: &str,
        encoding: TextEncoding,
    ) -> Result<SendReceipt, ProviderError>;

    /// Get the service provider name (e.g. "Vonage", "Mock")
    fn provider_name(&self) -> &str;
}
