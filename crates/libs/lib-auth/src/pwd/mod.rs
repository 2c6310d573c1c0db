//! # Password Hashing
//!
//! Salted one-way password hashing with Argon2id.
//!
//! The work factor is the crate default (19 MiB memory, 2 iterations, 1 lane)
//! and is encoded in every PHC string, so verification always uses the
//! parameters the hash was produced with.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

#[derive(Debug, thiserror::Error)]
pub enum PwdError {
    #[error("Failed to hash password: {0}")]
    Hash(String),
}

/// Hash a password using Argon2id with a fresh random salt.
///
/// Any input is accepted, including the empty string; length policy belongs to
/// request validation.
pub fn hash_password(password: &str) -> Result<String, PwdError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| PwdError::Hash(e.to_string()))
}

/// Verify a plaintext password against a stored PHC hash string.
///
/// A stored value that does not parse as a PHC string never matches.
pub fn verify_password(password: &str, hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_hashing() {
        let password = "TestPassword123!";
        let hash = hash_password(password)
            .expect("Password hashing should succeed for valid password");

        assert_ne!(hash, password);
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify_password(password, &hash));
        assert!(!verify_password("WrongPassword", &hash));
    }

    #[test]
    fn test_same_password_gets_distinct_salts() {
        let first = hash_password("password123").expect("hash should succeed");
        let second = hash_password("password123").expect("hash should succeed");

        assert_ne!(first, second);
        assert!(verify_password("password123", &first));
        assert!(verify_password("password123", &second));
    }

    #[test]
    fn test_empty_password_does_not_fail() {
        let hash = hash_password("").expect("Empty input should still hash");

        assert!(verify_password("", &hash));
        assert!(!verify_password(" ", &hash));
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        assert!(!verify_password("password123", "not-a-phc-string"));
        assert!(!verify_password("password123", ""));
        assert!(!verify_password("password123", "password123"));
    }
}
