//! Password hashing with PBKDF2-HMAC-SHA256
//!
//! Turns a plaintext password into a salted hash for storage and checks
//! later login attempts against it. Each call to [`hash_password`] draws a
//! fresh 16-byte salt from the operating system.

use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// PBKDF2 round count used for every stored credential
pub const PBKDF2_ITERATIONS: u32 = 100_000;

/// Salt length in bytes
pub const SALT_SIZE: usize = 16;

/// Derived hash length in bytes (SHA-256 output)
pub const HASH_SIZE: usize = 32;

/// Parameters for password key derivation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    /// PBKDF2 iteration count
    pub iterations: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: PBKDF2_ITERATIONS,
        }
    }
}

impl KdfParams {
    /// Create params with a specific iteration count
    pub fn with_iterations(iterations: u32) -> Self {
        Self { iterations }
    }
}

/// A freshly derived salt + hash pair
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct PasswordHash {
    pub salt: [u8; SALT_SIZE],
    pub hash: [u8; HASH_SIZE],
}

impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordHash([REDACTED])")
    }
}

/// Hash a password with a new random salt and the standard parameters
///
/// Panics only if the operating system cannot supply secure randomness.
pub fn hash_password(password: &str) -> PasswordHash {
    hash_password_with(password, &KdfParams::default())
}

/// Hash a password with a new random salt and explicit parameters
pub fn hash_password_with(password: &str, params: &KdfParams) -> PasswordHash {
    let mut salt = [0u8; SALT_SIZE];
    OsRng.fill_bytes(&mut salt);

    let hash = derive_hash(password, &salt, params);
    PasswordHash { salt, hash }
}

/// Deterministically derive the hash for a password and salt
pub fn derive_hash(password: &str, salt: &[u8], params: &KdfParams) -> [u8; HASH_SIZE] {
    let mut out = [0u8; HASH_SIZE];
    pbkdf2_hmac::<Sha256>(password.as_bytes(), salt, params.iterations, &mut out);
    out
}

/// Check a password against a stored salt and hash with the standard parameters
pub fn verify_password(password: &str, salt: &[u8], expected_hash: &[u8]) -> bool {
    verify_password_with(password, salt, expected_hash, &KdfParams::default())
}

/// Check a password against a stored salt and hash
///
/// The comparison runs in constant time. A wrong password, or a stored hash
/// of the wrong length, simply yields `false`.
pub fn verify_password_with(
    password: &str,
    salt: &[u8],
    expected_hash: &[u8],
    params: &KdfParams,
) -> bool {
    let mut computed = derive_hash(password, salt, params);
    let matches: bool = computed.as_slice().ct_eq(expected_hash).into();
    computed.zeroize();
    matches
}
