//! HMAC-SHA256 commitment to a move.

use super::hex_serde;
use super::key::SecretKey;
use crate::error::{Error, Result};
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;
use std::str::FromStr;

type HmacSha256 = Hmac<Sha256>;

fn keyed_mac(key: &SecretKey, mv: &str) -> HmacSha256 {
    // HMAC accepts keys of any length.
    let mut mac = HmacSha256::new_from_slice(key.as_bytes()).expect("HMAC takes any key length");
    mac.update(mv.as_bytes());
    mac
}

/// Commitment = HMAC-SHA256(key, move)
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Commitment(#[serde(with = "hex_serde")] [u8; 32]);

impl Commitment {
    /// Create a commitment to `mv` under `key`
    pub fn new(key: &SecretKey, mv: &str) -> Self {
        Self(keyed_mac(key, mv).finalize().into_bytes().into())
    }

    /// Verify that the given key and move produce this commitment.
    ///
    /// The comparison runs in constant time.
    pub fn verify(&self, key: &SecretKey, mv: &str) -> bool {
        keyed_mac(key, mv).verify_slice(&self.0).is_ok()
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

impl FromStr for Commitment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        hex_serde::decode_32(s)
            .map(Self)
            .map_err(|e| Error::InvalidEncoding(format!("commitment: {}", e)))
    }
}

/// Commit to `mv` under `key`
pub fn commit(key: &SecretKey, mv: &str) -> Commitment {
    Commitment::new(key, mv)
}

/// Check a revealed key and move against a published commitment.
///
/// A mismatch is reported as `false`, never as an error.
pub fn verify(key: &SecretKey, mv: &str, commitment: &Commitment) -> bool {
    commitment.verify(key, mv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::generate_key;

    fn counting_key() -> SecretKey {
        let mut bytes = [0u8; 32];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = i as u8;
        }
        SecretKey::from_bytes(bytes)
    }

    #[test]
    fn test_commitment_verification() {
        let key = generate_key().unwrap();
        let commitment = commit(&key, "rock");

        assert!(verify(&key, "rock", &commitment));
    }

    #[test]
    fn test_known_answer() {
        let key = counting_key();

        assert_eq!(
            commit(&key, "rock").to_string(),
            "d43d1b772ce0b2599ac738ed377f40d7e0360dadc6a1514d5de251f8b285a393"
        );
        assert_eq!(
            commit(&key, "paper").to_string(),
            "f727714b25d59abd2f01ba8bf2b01926e6db3cf6f9a27629b50a0eb8113994ed"
        );
    }

    #[test]
    fn test_move_is_hashed_as_utf8() {
        let key = SecretKey::from_bytes([0x42; 32]);

        assert_eq!(
            commit(&key, "Ящерица").to_string(),
            "ae9859bc51a800286632be84efe9e585dbca7ff0f2986a632ecb8f6552696f3a"
        );
    }

    #[test]
    fn test_display_is_64_lowercase_hex() {
        let hex_str = commit(&generate_key().unwrap(), "spock").to_string();

        assert_eq!(hex_str.len(), 64);
        assert!(hex_str
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }

    #[test]
    fn test_wrong_move_fails_verification() {
        let key = generate_key().unwrap();
        let commitment = commit(&key, "rock");

        assert!(!verify(&key, "paper", &commitment));
        assert!(!verify(&key, "Rock", &commitment));
    }

    #[test]
    fn test_wrong_key_fails_verification() {
        let commitment = commit(&generate_key().unwrap(), "rock");

        assert!(!verify(&generate_key().unwrap(), "rock", &commitment));
    }

    #[test]
    fn test_parse_from_hex() {
        let commitment = commit(&counting_key(), "rock");
        let parsed: Commitment = commitment.to_string().parse().unwrap();

        assert_eq!(parsed, commitment);
        assert!(matches!(
            "not-hex".parse::<Commitment>(),
            Err(Error::InvalidEncoding(_))
        ));
        assert!(matches!(
            "abcd".parse::<Commitment>(),
            Err(Error::InvalidEncoding(_))
        ));
    }

    #[test]
    fn test_parse_accepts_uppercase_hex() {
        let commitment = commit(&counting_key(), "rock");
        let parsed: Commitment = commitment.to_string().to_uppercase().parse().unwrap();

        assert_eq!(parsed, commitment);
    }
}
