//! Authentication
//!
//! Password hashing and the sign-up/sign-in operations over a credential
//! store.

pub mod hash;
pub mod results;
pub mod validator;

pub use hash::hash_password;
pub use results::SignInResult;
pub use validator::{sign_in, sign_up};
