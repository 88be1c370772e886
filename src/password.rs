//! Password credential primitives: per-user salts, SHA-256 digests and
//! constant-time verification.
//!
//! The stored form is `hex(sha256(password + salt))` with a 16-byte
//! random salt rendered as lowercase hex. Existing database files hold
//! digests in exactly this shape, so the scheme is load-bearing.

use rand::RngCore;
use sha2::{Digest, Sha256};
use subtle::ConstantTimeEq;

/// Generate a fresh per-user salt: 128 bits of entropy as lowercase hex.
pub fn generate_salt() -> String {
    let mut bytes = [0u8; 16];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

/// Compute the stored digest for a password and salt.
pub fn digest(password: &str, salt: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hasher.update(salt.as_bytes());
    hex::encode(hasher.finalize())
}

/// Recompute the digest and compare against the stored one without
/// early exit on the first differing byte.
pub fn verify(password: &str, salt: &str, stored_digest: &str) -> bool {
    let computed = digest(password, salt);
    bool::from(computed.as_bytes().ct_eq(stored_digest.as_bytes()))
}
