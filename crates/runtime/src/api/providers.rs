//! Abstraction for sourcing the active hero's move.
//!
//! Hosts plug in a [`MoveProvider`] so the same adapter can run the decision
//! policy, a scripted fixture or a do-nothing stand-in.
use arena_core::{Board, GameSnapshot, Move, Position};

use super::errors::Result;

/// Chooses one move per turn.
///
/// Implementations must be deterministic and hold no state between calls.
pub trait MoveProvider: Send + Sync {
    /// Picks a move for an already validated snapshot.
    fn choose_move(&self, snapshot: &GameSnapshot) -> Move;

    /// Validates a raw board and active-hero position, then picks a move.
    ///
    /// # Errors
    ///
    /// Returns [`super::RuntimeError::MalformedSnapshot`] when the active
    /// hero position is off the board or does not hold a hero.
    fn provide_move(&self, board: Board, active_hero: Position) -> Result<Move> {
        let snapshot = GameSnapshot::new(board, active_hero)?;
        Ok(self.choose_move(&snapshot))
    }
}

/// Always stays put. Useful for testing or as a fallback.
#[derive(Clone, Copy, Debug, Default)]
pub struct StayProvider;

impl MoveProvider for StayProvider {
    fn choose_move(&self, _snapshot: &GameSnapshot) -> Move {
        Move::Stay
    }
}

#[cfg(test)]
mod tests {
    use arena_core::{BoardBuilder, Hero, HeroId, SnapshotError, TeamId};

    use super::*;
    use crate::RuntimeError;

    #[test]
    fn stay_provider_validates_before_answering() {
        let board = BoardBuilder::new(3)
            .hero(1, 1, Hero::new(HeroId(1), "me", TeamId(0), 100))
            .build();

        let mv = StayProvider.provide_move(board.clone(), Position::new(1, 1)).unwrap();
        assert_eq!(mv, Move::Stay);

        let err = StayProvider.provide_move(board, Position::new(0, 0)).unwrap_err();
        assert!(matches!(
            err,
            RuntimeError::MalformedSnapshot(SnapshotError::ActiveHeroNotHero { .. })
        ));
    }
}
