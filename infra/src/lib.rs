//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the SmsCast
//! application. It provides concrete SMS provider implementations behind the
//! core `SmsProvider` trait:
//!
//! - **Vonage**: Production SMS via the Vonage REST API
//! - **Mock**: Logging implementation for development and tests
//!
//! Provider selection happens through [`sms::create_sms_provider`], driven
//! by `SmsConfig`.

// Re-export core error types for convenience
pub use sc_core::errors::*;

/// SMS provider module - external SMS providers
pub mod sms;
