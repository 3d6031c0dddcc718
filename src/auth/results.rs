//! Authentication result types
//!
//! Defines result structures returned by authentication operations.

/// Result of a successful sign-in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInResult {
    pub username: String,
    /// Email stored with the record, empty for legacy two-field records
    pub email: String,
}
