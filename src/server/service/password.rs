use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use rand::Rng;
use rand_core::OsRng;
use sha2::{Digest, Sha256};

use crate::server::error::auth::AuthError;

/// Hashes a password into an Argon2 PHC string with a fresh salt.
pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AuthError::PasswordHash(e.to_string()))?;

    Ok(hash.to_string())
}

/// Checks a password against a stored hash. Malformed hashes never match.
pub fn verify_password(password: &str, hash: &str) -> bool {
    match PasswordHash::new(hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok(),
        Err(_) => false,
    }
}

/// Generates a password reset token.
///
/// # Returns
/// - `(token, digest)` - Hex token for the reset URL and the SHA-256 hex digest to store
pub fn generate_reset_token() -> (String, String) {
    let bytes: [u8; 20] = rand::rng().random();
    let token = hex::encode(bytes);
    let digest = digest_reset_token(&token);

    (token, digest)
}

pub fn digest_reset_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}
