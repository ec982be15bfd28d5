//! Game definitions and logic.

mod outcome;
mod relation;

pub use outcome::Outcome;
pub use relation::MoveRelation;
