//! # Password Hashing
//!
//! Argon2 hashing and verification for accounts kept by the browser session
//! service.
//!
//! The salt is supplied by the caller: `wasm32-unknown-unknown` has no OS
//! entropy source, so the web crate passes random bytes it already has.

use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};

use crate::error::{AppError, Result};

/// Hash a password with Argon2 and the given salt bytes (4 to 48 bytes).
pub fn hash_password(password: &str, salt: &[u8]) -> Result<String> {
    let salt = SaltString::encode_b64(salt)
        .map_err(|e| AppError::PasswordHash(format!("Invalid salt: {}", e)))?;

    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::PasswordHash(format!("Failed to hash password: {}", e)))?
        .to_string();

    Ok(password_hash)
}

/// Verify a plaintext password against an Argon2 hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::PasswordHash(format!("Failed to parse hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALT: [u8; 16] = *b"portfolio-salt-1";

    #[test]
    fn test_password_hashing() {
        let hash = hash_password("TestPassword123!", &SALT).expect("hashing should succeed");

        assert!(hash.starts_with("$argon2"));
        assert!(verify_password("TestPassword123!", &hash).unwrap());
        assert!(!verify_password("WrongPassword", &hash).unwrap());
    }

    #[test]
    fn test_salt_changes_hash() {
        let first = hash_password("TestPassword123!", &SALT).unwrap();
        let second = hash_password("TestPassword123!", b"portfolio-salt-2").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_is_an_error() {
        let err = verify_password("TestPassword123!", "not-a-hash").unwrap_err();
        assert!(matches!(err, AppError::PasswordHash(_)));
    }
}
