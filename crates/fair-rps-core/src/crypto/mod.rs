//! Cryptographic primitives for the commit-reveal scheme.
//!
//! This module provides:
//! - SecretKey, the per-round 256-bit HMAC key
//! - Commitment, the published HMAC-SHA256 digest of a move
//! - `generate_key`, `commit` and `verify`

mod commitment;
mod hex_serde;
mod key;

pub use commitment::{commit, verify, Commitment};
pub use key::{generate_key, SecretKey};
