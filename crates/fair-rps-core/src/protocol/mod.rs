//! Protocol types and messages.

mod messages;
mod round;
mod types;

pub use messages::{CommitMessage, RevealMessage};
pub use round::RoundSecret;
pub use types::RoundId;
