//! Password hashing
//!
//! Unsalted SHA-256 over the UTF-8 bytes of the password, rendered as a
//! lowercase hex string, so stored digests can be compared by equality.

use sha2::{Digest, Sha256};

/// Hash a password into a 64 character hex digest.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(hash_password("hunter2"), hash_password("hunter2"));
    }

    #[test]
    fn test_distinct_inputs_give_distinct_digests() {
        assert_ne!(hash_password("hunter2"), hash_password("hunter3"));
        assert_ne!(hash_password(""), hash_password(" "));
    }

    #[test]
    fn test_digest_shape() {
        let digest = hash_password("abc");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(digest, digest.to_lowercase());
    }

    #[test]
    fn test_known_vector() {
        // SHA-256 of "abc"
        assert_eq!(
            hash_password("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }
}
