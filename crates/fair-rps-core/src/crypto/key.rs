//! Per-round secret key.

use super::hex_serde;
use crate::error::{Error, Result};
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Key length in bytes
pub(crate) const KEY_LEN: usize = 32;

/// 256-bit HMAC key held by the committing party until reveal
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecretKey(#[serde(with = "hex_serde")] [u8; KEY_LEN]);

impl SecretKey {
    /// Generate a fresh key from the operating system CSPRNG
    pub fn generate() -> Result<Self> {
        let mut bytes = [0u8; KEY_LEN];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| Error::EntropyUnavailable(e.to_string()))?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a revealed key from its hex form
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        hex_serde::decode_32(hex_str)
            .map(Self)
            .map_err(|e| Error::InvalidEncoding(format!("secret key: {}", e)))
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Full lowercase hex encoding, used when the key is revealed
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({}..)", hex::encode(&self.0[..4]))
    }
}

/// Generate a fresh per-round key
pub fn generate_key() -> Result<SecretKey> {
    SecretKey::generate()
}
