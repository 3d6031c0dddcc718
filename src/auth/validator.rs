//! Sign-up and sign-in logic
//!
//! Stateless operations over a credential store. Every call reloads the
//! backing file, so there is no session or cached state to invalidate.

use log::{info, warn};

use crate::auth::hash::hash_password;
use crate::auth::results::SignInResult;
use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::store::CredentialStore;

/// Characters the line parser treats as record delimiters.
const RESERVED: [char; 3] = ['*', ':', ','];

/// Performs basic input sanitation to reject oversized or unprintable fields.
fn is_well_formed(input: &str, max_length: usize) -> bool {
    input.len() <= max_length && !input.contains(['\r', '\n', '\0'])
}

/// A username or email with a delimiter in it would read back as a
/// different record, so it must never reach the file.
fn survives_round_trip(input: &str) -> bool {
    !input.contains(RESERVED) && !input.contains(char::is_whitespace)
}

/// Register a new user.
///
/// Fails if any field is empty, the username is already taken, or a
/// field would not survive the round trip through the backing file.
/// The password is hashed before it is stored.
pub fn sign_up(
    store: &CredentialStore,
    config: &AuthConfig,
    username: &str,
    email: &str,
    password: &str,
) -> Result<(), AuthError> {
    let username = username.trim();
    let email = email.trim();

    if username.is_empty() {
        return Err(AuthError::EmptyField("username"));
    }
    if email.is_empty() {
        return Err(AuthError::EmptyField("email"));
    }
    if password.is_empty() {
        return Err(AuthError::EmptyField("password"));
    }

    for (field, value) in [("username", username), ("email", email), ("password", password)] {
        if !is_well_formed(value, config.max_field_length) {
            return Err(AuthError::MalformedInput(format!("invalid {field} format")));
        }
    }
    // The password is stored as a hex digest, so only username and email
    // have to stay delimiter-free.
    for (field, value) in [("username", username), ("email", email)] {
        if !survives_round_trip(value) {
            return Err(AuthError::MalformedInput(format!(
                "{field} {value:?} contains a reserved character"
            )));
        }
    }

    let users = store.load()?;
    if users.contains_key(username) {
        warn!("sign-up rejected, username {username:?} already taken");
        return Err(AuthError::UserAlreadyExists(username.to_string()));
    }

    store.append(username, email, &hash_password(password))?;
    info!("registered new user {username:?}");
    Ok(())
}

/// Authenticate an existing user.
///
/// Accepts either the SHA-256 digest of the password or, for records
/// written before hashing existed, the raw password itself. Returns the
/// stored email on success.
pub fn sign_in(
    store: &CredentialStore,
    username: &str,
    password: &str,
) -> Result<SignInResult, AuthError> {
    let username = username.trim();

    if username.is_empty() {
        return Err(AuthError::EmptyField("username"));
    }
    if password.is_empty() {
        return Err(AuthError::EmptyField("password"));
    }

    let users = store.load()?;
    match users.get(username) {
        Some((email, stored)) if stored == &hash_password(password) || stored == password => {
            info!("user {username:?} signed in");
            Ok(SignInResult {
                username: username.to_string(),
                email: email.clone(),
            })
        }
        Some(_) => {
            warn!("invalid password for user {username:?}");
            Err(AuthError::InvalidPassword(username.to_string()))
        }
        None => Err(AuthError::UserNotFound(username.to_string())),
    }
}
