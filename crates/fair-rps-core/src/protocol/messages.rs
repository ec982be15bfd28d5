//! Protocol messages.
//!
//! The committer publishes a [`CommitMessage`] before the opponent chooses
//! and a [`RevealMessage`] afterwards. Anyone holding both can check that
//! the revealed move was fixed in advance.

use crate::crypto::{Commitment, SecretKey};
use crate::protocol::RoundId;
use serde::{Deserialize, Serialize};

/// Phase 1: published digest
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitMessage {
    pub round_id: RoundId,
    pub commitment: Commitment,
}

/// Phase 2: disclosed key and move
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealMessage {
    pub round_id: RoundId,
    pub key: SecretKey,
    pub chosen_move: String,
}

impl RevealMessage {
    /// Check this reveal against the commitment published for the same round
    pub fn verify(&self, commit: &CommitMessage) -> bool {
        self.round_id == commit.round_id && commit.commitment.verify(&self.key, &self.chosen_move)
    }
}
