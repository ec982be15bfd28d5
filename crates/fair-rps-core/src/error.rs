//! Error types.

use thiserror::Error;

/// Errors from the core operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid move configuration: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Unknown move: {0}")]
    UnknownMove(String),

    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),
}

/// Reasons a move list cannot form a relation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error("at least 3 moves are required, got {0}")]
    TooFewMoves(usize),

    #[error("the number of moves must be odd, got {0}")]
    EvenMoveCount(usize),

    #[error("move #{0} is empty")]
    EmptyMove(usize),

    #[error("duplicate move: {0}")]
    DuplicateMove(String),
}

pub type Result<T> = std::result::Result<T, Error>;
