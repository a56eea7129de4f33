/**
 * Password Hashing and Verification
 *
 * This module isolates the one security-critical primitive of the backend:
 * the one-way transform between a plaintext password and the opaque hash
 * stored on the user record. Keeping it in one place means the cost factor
 * can be tuned without touching the registration or login flows.
 *
 * # Security
 *
 * - Hashing uses bcrypt with `DEFAULT_COST` (12 rounds), which salts every
 *   hash and is expensive enough to resist offline brute force
 * - Verification is delegated to bcrypt's constant-time comparison
 * - A malformed stored hash verifies as false rather than erroring, so a
 *   corrupted record can never be logged into
 */

use bcrypt::{hash, verify, DEFAULT_COST};

use crate::error::AuthError;

/// Hash a plaintext password for storage.
///
/// # Errors
///
/// Fails with a validation error if the plaintext is empty. Well-formed
/// input only fails if bcrypt itself does, which is surfaced as an
/// internal error.
pub fn hash_password(plaintext: &str) -> Result<String, AuthError> {
    if plaintext.is_empty() {
        return Err(AuthError::validation(["Password cannot be empty"]));
    }

    Ok(hash(plaintext, DEFAULT_COST)?)
}

/// Check a plaintext password against a stored hash.
///
/// Returns false on any mismatch, including a malformed stored hash.
pub fn verify_password(plaintext: &str, hashed: &str) -> bool {
    verify(plaintext, hashed).unwrap_or(false)
}
