//! # SmsCast Core
//!
//! Core business logic and domain layer for the SmsCast backend.
//! This crate contains the recipient dispatch service, the SMS provider
//! collaborator interface, and the error types shared across the
//! application architecture.

pub mod errors;
pub mod services;

// Re-export commonly used types for convenience
pub use errors::*;
pub use services::*;
