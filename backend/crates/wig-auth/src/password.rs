//! One-way salted password hashing for local accounts.

use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use error_location::ErrorLocation;

/// Hash a plaintext password into a PHC-format argon2 string with a fresh
/// random salt.
#[track_caller]
pub fn hash_password(password: &str) -> AuthErrorResult<String> {
    let salt = SaltString::generate(&mut OsRng);

    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::PasswordHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(hash.to_string())
}

/// Verify a plaintext password against a stored PHC string.
///
/// A structurally invalid stored hash counts as a mismatch rather than an
/// error; login must fail closed either way.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    match PasswordHash::new(stored_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            log::warn!("Stored password hash is not a valid PHC string: {}", e);
            false
        }
    }
}
