//! Password Hashing
//!
//! bcrypt wrappers used by the auth handlers. bcrypt salts per hash and
//! carries its cost factor in the digest, so verification needs no extra
//! parameters and comparison is handled by the primitive.

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Hash a plaintext password for storage
pub fn hash_password(plaintext: &str) -> Result<String, BcryptError> {
    hash(plaintext, DEFAULT_COST)
}

/// Verify a plaintext password against a stored digest
pub fn verify_password(plaintext: &str, digest: &str) -> Result<bool, BcryptError> {
    verify(plaintext, digest)
}
