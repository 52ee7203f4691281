//! Error handling
//!
//! Defines error types and handling for the sanitizer.

pub mod handlers;
pub mod types;

pub use types::*;
