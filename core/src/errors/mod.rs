//! Domain error types for SMS dispatch
//!
//! Two layers of failure exist here. `ProviderError` is what the provider
//! collaborator returns when the call itself breaks down (transport fault,
//! unparseable answer). `SendError` is the per-recipient failure recorded in
//! a dispatch outcome; one recipient's `SendError` never affects its
//! siblings.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Per-recipient send failure
///
/// Carried inside a dispatch outcome. Serializable so the calling layer can
/// surface per-recipient results however it chooses.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SendError {
    /// The normalized recipient was empty or contained no digits, so no
    /// provider call was attempted for it.
    #[error("Invalid recipient: {recipient:?}")]
    InvalidRecipient { recipient: String },

    /// The provider answered, but refused the message.
    #[error("Provider rejected message: {error_text}")]
    ProviderRejected { error_text: String },

    /// The provider call itself failed; the recipient was not reached.
    #[error("Provider unavailable: {message}")]
    ProviderUnavailable { message: String },
}

/// Errors raised by an SMS provider collaborator
///
/// These describe a broken call, not a refused message. A message the
/// provider accepts or structurally rejects is reported through
/// `SendReceipt` instead.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Network or HTTP-level transport failure
    #[error("Transport error: {0}")]
    Transport(String),

    /// The provider answered with something we could not interpret
    #[error("Malformed provider response: {0}")]
    InvalidResponse(String),

    /// Provider configuration error (missing credentials, bad endpoint)
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_error_display() {
        let err = SendError::ProviderRejected {
            error_text: "Bad number".to_string(),
        };
        assert_eq!(err.to_string(), "Provider rejected message: Bad number");
    }

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::Transport("connection refused".to_string());
        assert!(err.to_string().contains("connection refused"));
    }
}
