//! Error handling
//!
//! Defines error types for the credential store and verification logic.

pub mod types;

pub use types::*;
