//! Business services for the SmsCast backend

pub mod dispatch;

pub use dispatch::*;
