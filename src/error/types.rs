//! Error types
//!
//! Defines domain-specific error types for each module of the crate.

use std::fmt;
use std::io;

/// Authentication and verification errors
#[derive(Debug)]
pub enum AuthError {
    EmptyField(&'static str),
    MalformedInput(String),
    UserAlreadyExists(String),
    UserNotFound(String),
    InvalidPassword(String),
    Storage(StorageError),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::EmptyField(field) => write!(f, "Missing required field: {}", field),
            AuthError::MalformedInput(s) => write!(f, "Malformed input: {}", s),
            AuthError::UserAlreadyExists(u) => write!(f, "Username already exists: {}", u),
            AuthError::UserNotFound(u) => write!(f, "User not found: {}", u),
            AuthError::InvalidPassword(u) => write!(f, "Incorrect password for user: {}", u),
            AuthError::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for AuthError {}

impl From<StorageError> for AuthError {
    fn from(error: StorageError) -> Self {
        AuthError::Storage(error)
    }
}

/// Credential store errors
#[derive(Debug)]
pub enum StorageError {
    IoError(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}
