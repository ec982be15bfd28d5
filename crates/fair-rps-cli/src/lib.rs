//! Interactive terminal front end for fair rock-paper-scissors.
//!
//! The binary commits to the computer's move, publishes the HMAC, reads the
//! player's choice and then reveals the key so the player can check that
//! the computer did not change its mind.

pub mod config;
pub mod game;
pub mod help;
pub mod menu;

pub use config::Args;
pub use game::{play_round, RoundReport};
