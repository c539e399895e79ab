//! Types for dispatch results and the provider wire contract

use serde::{Deserialize, Serialize};

use crate::errors::SendError;

/// Message body encoding requested from the provider
///
/// Dispatch always requests `Unicode` so non-ASCII message bodies survive
/// transit; `Text` exists for providers that bill GSM-7 messages
/// differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    /// Plain GSM-7 text
    Text,
    /// UCS-2 capable encoding for non-ASCII content
    Unicode,
}

impl TextEncoding {
    /// Wire name of the encoding, as providers expect it
    pub fn as_str(&self) -> &'static str {
        match self {
            TextEncoding::Text => "text",
            TextEncoding::Unicode => "unicode",
        }
    }
}

/// A provider's structured answer for one submitted message
///
/// Both variants mean the provider call round-tripped; a call that breaks
/// down entirely surfaces as `ProviderError` instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendReceipt {
    /// Message accepted for delivery, with the provider-assigned identifier
    Accepted {
        /// Provider-assigned message identifier
        message_id: String,
    },
    /// Message refused, with the provider's human-readable reason
    Rejected {
        /// Provider-supplied error description
        error_text: String,
    },
}

/// Result half of a per-recipient outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SendResult {
    /// The provider accepted the message
    Sent {
        /// Provider-assigned message identifier
        message_id: String,
    },
    /// The message did not go out for this recipient
    Failed {
        /// What went wrong
        error: SendError,
    },
}

/// Per-recipient result of a dispatch attempt
///
/// A dispatch call produces exactly one of these per input token, in input
/// order. Outcomes exist only for the duration of the call; nothing is
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SendOutcome {
    /// The normalized recipient this outcome belongs to
    pub recipient: String,
    /// Whether the send succeeded, and why not if it failed
    pub result: SendResult,
}

impl SendOutcome {
    /// Build a success outcome
    pub fn sent(recipient: impl Into<String>, message_id: impl Into<String>) -> Self {
        Self {
            recipient: recipient.into(),
            result: SendResult::Sent {
                message_id: message_id.into(),
            },
        }
    }

    /// Build a failure outcome
    pub fn failed(recipient: impl Into<String>, error: SendError) -> Self {
        Self {
            recipient: recipient.into(),
            result: SendResult::Failed { error },
        }
    }

    /// Whether this outcome is a success
    pub fn is_sent(&self) -> bool {
        matches!(self.result, SendResult::Sent { .. })
    }

    /// The provider message identifier, if the send succeeded
    pub fn message_id(&self) -> Option<&str> {
        match &self.result {
            SendResult::Sent { message_id } => Some(message_id),
            SendResult::Failed { .. } => None,
        }
    }

    /// The failure, if the send did not go out
    pub fn error(&self) -> Option<&SendError> {
        match &self.result {
            SendResult::Sent { .. } => None,
            SendResult::Failed { error } => Some(error),
        }
    }
}
