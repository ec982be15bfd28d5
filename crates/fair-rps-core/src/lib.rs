//! Fair RPS Core Library
//!
//! This crate provides the commit-reveal primitives and the generalized
//! rules matrix for playing N-way rock-paper-scissors against an opponent
//! whose move is fixed before the human chooses.

pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use crypto::{commit, generate_key, verify, Commitment, SecretKey};
pub use error::{ConfigurationError, Error, Result};
pub use games::{MoveRelation, Outcome};
pub use protocol::{CommitMessage, RevealMessage, RoundId, RoundSecret};
