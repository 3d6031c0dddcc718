//! Credential storage
//!
//! Reads and appends records of the backing credentials file. The store
//! is constructed with an explicit file path and keeps no cache: every
//! load re-reads the whole file.

use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::StorageError;
use crate::store::parser::{ParsedLine, parse_line};

/// Username -> (email, stored password value)
pub type UserMap = HashMap<String, (String, String)>;

/// Flat-file credential store
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Create a store backed by the given file. No I/O happens until
    /// `load` or `append` is called.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all records into memory.
    ///
    /// A missing backing file is not an error and yields an empty map.
    /// Blank and comment lines are skipped silently; malformed lines are
    /// dropped with a warning. If a username appears on more than one
    /// line, the last line wins.
    pub fn load(&self) -> Result<UserMap, StorageError> {
        let mut users = UserMap::new();

        if !self.path.exists() {
            debug!(
                "credentials file {} not found, starting empty",
                self.path.display()
            );
            return Ok(users);
        }

        let contents = fs::read_to_string(&self.path)?;
        for (index, line) in contents.lines().enumerate() {
            match parse_line(line) {
                ParsedLine::Record(record) => {
                    if users.contains_key(&record.username) {
                        warn!(
                            "{}:{}: duplicate record for {:?}, later line overrides",
                            self.path.display(),
                            index + 1,
                            record.username
                        );
                    }
                    users.insert(record.username, (record.email, record.password_value));
                }
                ParsedLine::Blank | ParsedLine::Comment => {}
                ParsedLine::Malformed => {
                    warn!(
                        "{}:{}: skipping malformed line",
                        self.path.display(),
                        index + 1
                    );
                }
            }
        }

        debug!(
            "loaded {} records from {}",
            users.len(),
            self.path.display()
        );
        Ok(users)
    }

    /// Append one record in the canonical `username*email*passwordHash`
    /// format, creating the parent directory if it does not exist yet.
    /// Existing lines are never rewritten.
    pub fn append(
        &self,
        username: &str,
        email: &str,
        password_value: &str,
    ) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{username}*{email}*{password_value}")?;

        debug!(
            "appended record for {:?} to {}",
            username,
            self.path.display()
        );
        Ok(())
    }
}
