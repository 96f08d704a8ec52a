// ============================
// crates/backend-lib/src/auth/password.rs
// ============================
//! Password hashing and verification.
//!
//! Stored hashes have the form `hex(salt):hex(derived_key)`: a 16-byte
//! random salt and a 64-byte scrypt-derived key. The same password and
//! salt always reproduce the same key; fresh salts keep identical
//! passwords from sharing a stored record.
use anyhow::{anyhow, Result};
use rand::{rngs::OsRng, RngCore};
use scrypt::Params;

/// Salt length in bytes (32 hex chars in the stored record).
pub const SALT_LEN: usize = 16;
/// Derived key length in bytes (128 hex chars in the stored record).
pub const KEY_LEN: usize = 64;

// scrypt cost parameters: N = 2^14, r = 8, p = 1
const SCRYPT_LOG_N: u8 = 14;
const SCRYPT_R: u32 = 8;
const SCRYPT_P: u32 = 1;

/// Derive a fixed-length key from a password and salt.
pub fn derive_key(password: &[u8], salt: &[u8]) -> Result<[u8; KEY_LEN]> {
    let params = Params::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P, KEY_LEN)
        .map_err(|e| anyhow!("invalid scrypt parameters: {e}"))?;
    let mut key = [0u8; KEY_LEN];
    scrypt::scrypt(password, salt, &params, &mut key)
        .map_err(|e| anyhow!("scrypt derivation failed: {e}"))?;
    Ok(key)
}

/// Hash a password with a fresh random salt.
pub fn hash_password(plain: &str) -> Result<String> {
    let mut salt = [0u8; SALT_LEN];
    OsRng
        .try_fill_bytes(&mut salt)
        .map_err(|e| anyhow!("entropy source failure: {e}"))?;
    let key = derive_key(plain.as_bytes(), &salt)?;
    Ok(format!("{}:{}", hex::encode(salt), hex::encode(key)))
}

/// Verify a password against a stored `hex(salt):hex(key)` record.
///
/// A malformed record counts as a failed verification, never an error: a
/// corrupt credential row must not crash the server or produce a
/// response distinguishable from a wrong password.
pub fn verify_password(stored: &str, plain: &str) -> bool {
    let Some((salt_hex, key_hex)) = stored.split_once(':') else {
        tracing::warn!("stored password hash is missing the salt separator");
        return false;
    };
    let (Ok(salt), Ok(expected)) = (hex::decode(salt_hex), hex::decode(key_hex)) else {
        tracing::warn!("stored password hash is not valid hex");
        return false;
    };
    if salt.len() != SALT_LEN || expected.len() != KEY_LEN {
        tracing::warn!("stored password hash has unexpected field lengths");
        return false;
    }
    let Ok(derived) = derive_key(plain.as_bytes(), &salt) else {
        return false;
    };
    constant_time_eq(&derived, &expected)
}

/// Constant-time byte comparison to prevent timing attacks.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        diff |= x ^ y;
    }
    diff == 0
}
