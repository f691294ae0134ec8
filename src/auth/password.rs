//! Password hashing and verification.

/// bcrypt work factor. Matches the 10 rounds the stored digests were
/// produced with.
const COST: u32 = 10;

#[derive(Debug, thiserror::Error)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    Hash(String),
}

/// Hash a plaintext password with a per-call random salt. Two calls with
/// the same input produce different digests; never compare digests directly.
pub fn hash(plaintext: &str) -> Result<String, PasswordError> {
    bcrypt::hash(plaintext, COST).map_err(|e| PasswordError::Hash(e.to_string()))
}

/// Verify a plaintext password against a stored digest using the salt and
/// parameters embedded in the digest. Malformed digests verify as false.
pub fn verify(plaintext: &str, digest: &str) -> bool {
    bcrypt::verify(plaintext, digest).unwrap_or(false)
}
