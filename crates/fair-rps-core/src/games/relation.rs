//! Generalized rock-paper-scissors rules over an odd cyclic list of moves.

use super::Outcome;
use crate::error::{ConfigurationError, Error, Result};
use std::collections::HashMap;
use tracing::debug;

/// Smallest playable move list
pub(crate) const MIN_MOVES: usize = 3;

/// Precomputed outcome table for an ordered list of moves.
///
/// Each move loses to the `(n-1)/2` moves that follow it in the list
/// (wrapping around) and beats the `(n-1)/2` moves that precede it. With
/// `["rock", "paper", "scissors"]` this is the classic game.
#[derive(Clone, Debug)]
pub struct MoveRelation {
    moves: Vec<String>,
    index: HashMap<String, usize>,
    /// `table[i][j]` is the outcome of `moves[i]` against `moves[j]`
    table: Vec<Vec<Outcome>>,
}

impl MoveRelation {
    /// Validate the move list and build the table.
    ///
    /// The list needs an odd number of at least three distinct, non-empty
    /// names. Names are case-sensitive.
    pub fn build<I, S>(moves: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let moves: Vec<String> = moves.into_iter().map(Into::into).collect();
        let n = moves.len();

        if n < MIN_MOVES {
            return Err(ConfigurationError::TooFewMoves(n).into());
        }
        if n % 2 == 0 {
            return Err(ConfigurationError::EvenMoveCount(n).into());
        }

        let mut index = HashMap::with_capacity(n);
        for (i, name) in moves.iter().enumerate() {
            if name.is_empty() {
                return Err(ConfigurationError::EmptyMove(i + 1).into());
            }
            if index.insert(name.clone(), i).is_some() {
                return Err(ConfigurationError::DuplicateMove(name.clone()).into());
            }
        }

        let table = (0..n)
            .map(|i| (0..n).map(|j| circular_outcome(i, j, n)).collect())
            .collect();

        debug!(moves = n, "Built move relation");

        Ok(Self {
            moves,
            index,
            table,
        })
    }

    /// Outcome of `a` against `b`, from `a`'s side
    pub fn resolve(&self, a: &str, b: &str) -> Result<Outcome> {
        let i = self.require(a)?;
        let j = self.require(b)?;
        Ok(self.table[i][j])
    }

    /// Moves in their configured order
    pub fn moves(&self) -> &[String] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Always false; a relation holds at least three moves
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Position of a move in the configured order
    pub fn index_of(&self, mv: &str) -> Option<usize> {
        self.index.get(mv).copied()
    }

    /// Outcome by position. Returns `None` when out of range.
    pub fn outcome_at(&self, i: usize, j: usize) -> Option<Outcome> {
        self.table.get(i)?.get(j).copied()
    }

    /// The full table, one row per move in configured order
    pub fn rows(&self) -> &[Vec<Outcome>] {
        &self.table
    }

    /// Moves that `mv` wins against
    pub fn beats(&self, mv: &str) -> Result<Vec<&str>> {
        self.filter_row(mv, Outcome::Win)
    }

    /// Moves that `mv` loses to
    pub fn loses_to(&self, mv: &str) -> Result<Vec<&str>> {
        self.filter_row(mv, Outcome::Lose)
    }

    fn filter_row(&self, mv: &str, wanted: Outcome) -> Result<Vec<&str>> {
        let i = self.require(mv)?;
        Ok(self.table[i]
            .iter()
            .zip(&self.moves)
            .filter(|(outcome, _)| **outcome == wanted)
            .map(|(_, name)| name.as_str())
            .collect())
    }

    fn require(&self, mv: &str) -> Result<usize> {
        self.index_of(mv)
            .ok_or_else(|| Error::UnknownMove(mv.to_string()))
    }
}

/// Outcome of position `i` against position `j` on a cycle of odd length `n`
fn circular_outcome(i: usize, j: usize, n: usize) -> Outcome {
    let distance = (j + n - i) % n;
    if distance == 0 {
        Outcome::Draw
    } else if distance <= n / 2 {
        Outcome::Lose
    } else {
        Outcome::Win
    }
}
