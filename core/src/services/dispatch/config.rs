//! Configuration for the dispatch service

use sc_shared::config::SmsConfig;

use super::types::TextEncoding;

/// Configuration for recipient dispatch
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Fixed sender identifier applied to every outbound message
    pub from_number: String,
    /// Encoding requested from the provider
    pub encoding: TextEncoding,
    /// Reject empty or digit-free recipients locally instead of spending a
    /// provider call on them
    pub reject_unsendable: bool,
}

impl DispatchConfig {
    /// Create a dispatch configuration with default policy
    pub fn new(from_number: impl Into<String>) -> Self {
        Self {
            from_number: from_number.into(),
            encoding: TextEncoding::Unicode,
            reject_unsendable: true,
        }
    }

    /// Override the requested encoding
    pub fn with_encoding(mut self, encoding: TextEncoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Disable local recipient rejection, handing every normalized token to
    /// the provider verbatim
    pub fn with_reject_unsendable(mut self, reject: bool) -> Self {
        self.reject_unsendable = reject;
        self
    }
}

impl From<&SmsConfig> for DispatchConfig {
    fn from(config: &SmsConfig) -> Self {
        Self::new(config.from_number.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DispatchConfig::new("12013814794");
        assert_eq!(config.from_number, "12013814794");
        assert_eq!(config.encoding, TextEncoding::Unicode);
        assert!(config.reject_unsendable);
    }

    #[test]
    fn test_from_sms_config() {
        let sms = SmsConfig {
            from_number: "15550001111".to_string(),
            ..SmsConfig::default()
        };
        let config = DispatchConfig::from(&sms);
        assert_eq!(config.from_number, "15550001111");
        assert_eq!(config.encoding, TextEncoding::Unicode);
    }
}
