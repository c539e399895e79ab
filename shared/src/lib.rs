//! Shared utilities and common types for the SmsCast server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Recipient string utilities (splitting, normalization, masking)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, Environment, SmsConfig};
pub use utils::phone;
