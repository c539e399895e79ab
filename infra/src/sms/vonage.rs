//! Vonage SMS provider implementation
//!
//! This module provides SMS sending capabilities using the Vonage SMS JSON
//! API. It implements the `SmsProvider` trait for production SMS delivery.
//!
//! The API answers HTTP 200 even for refused messages; the real verdict is
//! the `status` field of the first entry in the `messages` array, where the
//! literal string `"0"` means accepted.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

use sc_core::errors::ProviderError;
use sc_core::services::dispatch::{SendReceipt, SmsProvider, TextEncoding};
use sc_shared::config::sms::DEFAULT_REQUEST_TIMEOUT_SECS;
use sc_shared::utils::phone::mask_phone_number;

/// Default Vonage REST endpoint
pub const DEFAULT_API_BASE: &str = "https://rest.nexmo.com";

/// Wire status denoting provider acceptance
const STATUS_ACCEPTED: &str = "0";

/// Vonage SMS provider configuration
#[derive(Clone)]
pub struct VonageConfig {
    /// Vonage API key
    pub api_key: String,
    /// Vonage API secret
    pub api_secret: String,
    /// Base URL of the REST API, overridable for tests
    pub api_base: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl std::fmt::Debug for VonageConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VonageConfig")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .field("api_base", &self.api_base)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl VonageConfig {
    /// Create a configuration with default endpoint and timeout
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    /// Point the client at a different API base URL
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Override the request timeout
    pub fn with_request_timeout_secs(mut self, secs: u64) -> Self {
        self.request_timeout_secs = secs;
        self
    }

    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, ProviderError> {
        let api_key = std::env::var("VONAGE_API_KEY")
            .map_err(|_| ProviderError::Config("VONAGE_API_KEY not set".to_string()))?;
        let api_secret = std::env::var("VONAGE_API_SECRET")
            .map_err(|_| ProviderError::Config("VONAGE_API_SECRET not set".to_string()))?;

        Ok(Self {
            api_key,
            api_secret,
            api_base: std::env::var("VONAGE_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            request_timeout_secs: std::env::var("VONAGE_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        })
    }
}

/// One outbound message as the Vonage API expects it
#[derive(Debug, Serialize)]
struct SmsRequest<'a> {
    api_key: &'a str,
    api_secret: &'a str,
    from: &'a str,
    to: &'a str,
    text: &'a str,
    #[serde(rename = "type")]
    message_type: &'a str,
}

/// Response body of `POST /sms/json`
#[derive(Debug, Deserialize)]
struct SmsResponse {
    messages: Vec<MessageStatus>,
}

/// Per-message verdict inside an `SmsResponse`
#[derive(Debug, Deserialize)]
struct MessageStatus {
    status: String,
    #[serde(rename = "message-id")]
    message_id: Option<String>,
    #[serde(rename = "error-text")]
    error_text: Option<String>,
}

/// Vonage SMS provider implementation
pub struct VonageSmsProvider {
    client: Client,
    config: VonageConfig,
}

impl VonageSmsProvider {
    /// Create a new Vonage SMS provider
    pub fn new(config: VonageConfig) -> Result<Self, ProviderError> {
        if config.api_key.is_empty() || config.api_secret.is_empty() {
            return Err(ProviderError::Config(
                "Vonage credentials not configured".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| ProviderError::Config(format!("failed to build HTTP client: {}", e)))?;

        info!("Vonage SMS provider initialized");

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, ProviderError> {
        let config = VonageConfig::from_env()?;
        Self::new(config)
    }

    /// Map a parsed API response to a receipt
    fn receipt_from(response: SmsResponse) -> Result<SendReceipt, ProviderError> {
        let message = response
            .messages
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::InvalidResponse("empty messages array".to_string()))?;

        if message.status == STATUS_ACCEPTED {
            let message_id = message.message_id.ok_or_else(|| {
                ProviderError::InvalidResponse("accepted message without message-id".to_string())
            })?;
            Ok(SendReceipt::Accepted { message_id })
        } else {
            let error_text = message
                .error_text
                .unwrap_or_else(|| format!("provider status {}", message.status));
            Ok(SendReceipt::Rejected { error_text })
        }
    }
}

#[async_trait]
impl SmsProvider for VonageSmsProvider {
    async fn send_sms(
        &self,
        from: &str,
        to: &str,
        text: &str,
        encoding: TextEncoding,
    ) -> Result<SendReceipt, ProviderError> {
        let url = format!("{}/sms/json", self.config.api_base);
        let request = SmsRequest {
            api_key: &self.config.api_key,
            api_secret: &self.config.api_secret,
            from,
            to,
            text,
            message_type: encoding.as_str(),
        };

        debug!(
            target: "sms_provider",
            recipient = %mask_phone_number(to),
            message_length = text.len(),
            "Submitting message to Vonage"
        );

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Transport(format!(
                "unexpected HTTP status {}",
                status
            )));
        }

        let body: SmsResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        Self::receipt_from(body)
    }

    fn provider_name(&self) -> &str {
        "Vonage"
    }
}
