//! Recipient dispatch service
//!
//! Takes one raw comma-separated recipient string plus a message body,
//! normalizes each recipient, and submits one send request per recipient to
//! the configured SMS provider. Each recipient yields exactly one outcome,
//! in input order; no recipient's failure affects the others.

mod config;
mod service;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use config::DispatchConfig;
pub use service::DispatchService;
pub use traits::SmsProvider;
pub use types::{SendOutcome, SendReceipt, SendResult, TextEncoding};
