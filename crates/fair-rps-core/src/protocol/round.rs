//! Committer-side state for one round.

use crate::crypto::{generate_key, Commitment, SecretKey};
use crate::error::Result;
use crate::protocol::{CommitMessage, RevealMessage, RoundId};
use tracing::debug;

/// A move fixed under a fresh key, kept private until reveal.
///
/// Revealing consumes the secret, so a key is never reused for a second
/// move.
pub struct RoundSecret {
    round_id: RoundId,
    key: SecretKey,
    chosen_move: String,
    commitment: Commitment,
}

impl RoundSecret {
    /// Generate a key for a new round and commit to `chosen_move`
    pub fn new(chosen_move: impl Into<String>) -> Result<Self> {
        let key = generate_key()?;
        Ok(Self::with_key(key, chosen_move))
    }

    fn with_key(key: SecretKey, chosen_move: impl Into<String>) -> Self {
        let chosen_move = chosen_move.into();
        let round_id = RoundId::new();
        let commitment = Commitment::new(&key, &chosen_move);
        debug!(%round_id, ?commitment, "Committed to move");
        Self {
            round_id,
            key,
            chosen_move,
            commitment,
        }
    }

    pub fn round_id(&self) -> RoundId {
        self.round_id
    }

    /// The message to publish before the opponent chooses
    pub fn commit_message(&self) -> CommitMessage {
        CommitMessage {
            round_id: self.round_id,
            commitment: self.commitment,
        }
    }

    /// The committed move, for local use by the committer
    pub fn chosen_move(&self) -> &str {
        &self.chosen_move
    }

    /// Disclose the key and move
    pub fn reveal(self) -> RevealMessage {
        debug!(round_id = %self.round_id, "Revealing key");
        RevealMessage {
            round_id: self.round_id,
            key: self.key,
            chosen_move: self.chosen_move,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let secret = RoundSecret::new("paper").unwrap();
        let commit_msg = secret.commit_message();

        assert_eq!(secret.chosen_move(), "paper");

        let reveal_msg = secret.reveal();
        assert_eq!(reveal_msg.round_id, commit_msg.round_id);
        assert_eq!(reveal_msg.chosen_move, "paper");
        assert!(reveal_msg.verify(&commit_msg));
    }

    #[test]
    fn test_fresh_key_per_round() {
        let a = RoundSecret::new("rock").unwrap();
        let b = RoundSecret::new("rock").unwrap();

        assert_ne!(a.round_id(), b.round_id());
        assert_ne!(a.commit_message().commitment, b.commit_message().commitment);
        assert_ne!(a.reveal().key, b.reveal().key);
    }
}
