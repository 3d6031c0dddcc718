//! Credential store
//!
//! Flat-file record storage: a line parser and a path-configured store
//! that re-reads the full backing file on every call and appends new
//! records one line at a time.

pub mod credentials;
pub mod parser;

pub use credentials::{CredentialStore, UserMap};
pub use parser::{ParsedLine, RawRecord, parse_line};
