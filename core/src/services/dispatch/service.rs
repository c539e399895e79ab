//! Main dispatch service implementation

use std::sync::Arc;

use sc_shared::utils::phone::{is_dialable, mask_phone_number, normalize_recipient, split_recipients};
use tracing;

use crate::errors::SendError;

use super::config::DispatchConfig;
use super::traits::SmsProvider;
use super::types::{SendOutcome, SendReceipt, SendResult};

/// Dispatch service fanning a message out to a list of recipients
///
/// Holds the provider collaborator and the fixed sender configuration.
/// Stateless across calls: every invocation of [`dispatch`](Self::dispatch)
/// is independent.
pub struct DispatchService<P: SmsProvider + ?Sized> {
    /// SMS provider used for every outbound message
    provider: Arc<P>,
    /// Sender identity and dispatch policy
    config: DispatchConfig,
}

impl<P: SmsProvider + ?Sized> DispatchService<P> {
    /// Create a new dispatch service
    ///
    /// # Arguments
    ///
    /// * `provider` - SMS provider implementation
    /// * `config` - Sender identity and dispatch policy
    pub fn new(provider: Arc<P>, config: DispatchConfig) -> Self {
        Self { provider, config }
    }

    /// Fan a message out to a raw comma-separated recipient list
    ///
    /// The list is split on the literal `,`, each token is normalized by
    /// stripping `-`, `(`, `)` and spaces, and one send is attempted per
    /// token, sequentially and in input order. Every token yields exactly
    /// one outcome; a failed recipient never aborts, skips, or reorders the
    /// rest.
    ///
    /// The message body goes out unmodified to every recipient. This method
    /// itself cannot fail; failures are per-recipient data.
    pub async fn dispatch(&self, raw_recipients: &str, message: &str) -> Vec<SendOutcome> {
        let mut outcomes = Vec::new();

        for token in split_recipients(raw_recipients) {
            let recipient = normalize_recipient(token);
            let outcome = self.send_one(&recipient, message).await;
            self.record(&outcome);
            outcomes.push(outcome);
        }

        let sent = outcomes.iter().filter(|o| o.is_sent()).count();
        tracing::info!(
            target: "sms_dispatch",
            provider = self.provider.provider_name(),
            recipients = outcomes.len(),
            sent = sent,
            failed = outcomes.len() - sent,
            "Dispatch complete"
        );

        outcomes
    }

    /// Attempt one send, converting every failure mode into an outcome
    async fn send_one(&self, recipient: &str, message: &str) -> SendOutcome {
        if self.config.reject_unsendable && !is_dialable(recipient) {
            return SendOutcome::failed(
                recipient,
                SendError::InvalidRecipient {
                    recipient: recipient.to_string(),
                },
            );
        }

        let result = self
            .provider
            .send_sms(
                &self.config.from_number,
                recipient,
                message,
                self.config.encoding,
            )
            .await;

        match result {
            Ok(SendReceipt::Accepted { message_id }) => SendOutcome::sent(recipient, message_id),
            Ok(SendReceipt::Rejected { error_text }) => {
                SendOutcome::failed(recipient, SendError::ProviderRejected { error_text })
            }
            // A broken provider call counts against this recipient only;
            // the fan-out continues.
            Err(e) => SendOutcome::failed(
                recipient,
                SendError::ProviderUnavailable {
                    message: e.to_string(),
                },
            ),
        }
    }

    /// Emit one structured log line for a per-recipient outcome
    fn record(&self, outcome: &SendOutcome) {
        let masked = mask_phone_number(&outcome.recipient);
        match &outcome.result {
            SendResult::Sent { message_id } => {
                tracing::info!(
                    target: "sms_dispatch",
                    recipient = %masked,
                    message_id = %message_id,
                    "Sent message"
                );
            }
            SendResult::Failed { error } => {
                tracing::warn!(
                    target: "sms_dispatch",
                    recipient = %masked,
                    error = %error,
                    "Send failed"
                );
            }
        }
    }
}
