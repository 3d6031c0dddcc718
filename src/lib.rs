pub mod auth;
pub mod config;
pub mod error;
pub mod store;

pub use auth::{SignInResult, hash_password, sign_in, sign_up};
pub use self::config::AuthConfig;
pub use error::{AuthError, StorageError};
pub use store::CredentialStore;
