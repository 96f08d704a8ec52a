// ============================
// crates/backend-lib/src/auth/token.rs
// ============================
//! Secure session token generation.
use anyhow::{anyhow, Result};
use rand::{rngs::OsRng, RngCore};

/// Token size in bytes (32 bytes = 256 bits of entropy, 64 hex chars).
const TOKEN_BYTES: usize = 32;

/// Generate a cryptographically secure opaque token.
///
/// The token is a lookup key and nothing else: it carries no encoded
/// structure a client could fabricate or tamper with.
pub fn generate_token() -> Result<String> {
    let mut buffer = [0u8; TOKEN_BYTES];
    OsRng
        .try_fill_bytes(&mut buffer)
        .map_err(|e| anyhow!("entropy source failure: {e}"))?;
    Ok(hex::encode(buffer))
}
