//! Error types for arena-core.
//!
//! The decision path itself never fails: missing paths are `None` and
//! classifier faults are absorbed where they happen. Errors only surface when
//! a snapshot violates the board invariants, which is the caller's contract.

use crate::state::{Position, TileType};

/// A snapshot that breaks the board invariants.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("board has no tiles")]
    EmptyBoard,

    #[error("board row {row} has {len} tiles, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("tile recorded at {found} sits in slot {expected}")]
    TileMisplaced { expected: Position, found: Position },

    #[error("active hero {position} is outside a {length_of_side}x{length_of_side} board")]
    ActiveHeroOutOfBounds {
        position: Position,
        length_of_side: usize,
    },

    #[error("active hero {position} points at a {found} tile")]
    ActiveHeroNotHero { position: Position, found: TileType },
}

/// Raised by a tile classifier that could not decide.
///
/// Searches treat a fault as "not a match" and keep going.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("tile classifier fault: {reason}")]
pub struct ClassifierFault {
    reason: String,
}

impl ClassifierFault {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}
