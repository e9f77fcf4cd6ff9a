//! Cryptographic functions for MoneyTrack
//!
//! Provides PBKDF2-HMAC-SHA256 password hashing for stored credentials and a
//! zeroizing string type for passwords read from the terminal.

pub mod password;
pub mod secure_memory;

pub use password::{
    derive_hash, hash_password, hash_password_with, verify_password, verify_password_with,
    KdfParams, PasswordHash, HASH_SIZE, PBKDF2_ITERATIONS, SALT_SIZE,
};
pub use secure_memory::SecureString;
