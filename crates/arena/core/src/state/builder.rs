use super::board::{Board, GameSnapshot};
use super::tile::{Hero, Tile, TileKind};
use super::types::{Position, TeamId};
use crate::error::SnapshotError;

/// Fluent construction of boards for fixtures, tools and tests.
///
/// Every tile starts Unoccupied; placements overwrite whatever was there.
///
/// ```
/// use arena_core::{BoardBuilder, Hero, HeroId, Position, TeamId};
///
/// let snapshot = BoardBuilder::new(5)
///     .hero(0, 0, Hero::new(HeroId(1), "me", TeamId(0), 100))
///     .health_well(0, 4)
///     .snapshot(Position::new(0, 0))
///     .unwrap();
/// assert_eq!(snapshot.board().length_of_side(), 5);
/// ```
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    length_of_side: usize,
    kinds: Vec<TileKind>,
}

impl BoardBuilder {
    /// # Panics
    ///
    /// Panics if `length_of_side` is zero.
    pub fn new(length_of_side: usize) -> Self {
        assert!(length_of_side > 0, "board must have at least one tile");
        Self {
            length_of_side,
            kinds: vec![TileKind::Unoccupied; length_of_side * length_of_side],
        }
    }

    /// Places `kind` at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the board.
    #[must_use]
    pub fn with(mut self, row: usize, col: usize, kind: TileKind) -> Self {
        assert!(
            row < self.length_of_side && col < self.length_of_side,
            "({row}, {col}) is outside a {n}x{n} board",
            n = self.length_of_side
        );
        self.kinds[row * self.length_of_side + col] = kind;
        self
    }

    #[must_use]
    pub fn hero(self, row: usize, col: usize, hero: Hero) -> Self {
        self.with(row, col, TileKind::Hero(hero))
    }

    #[must_use]
    pub fn health_well(self, row: usize, col: usize) -> Self {
        self.with(row, col, TileKind::HealthWell)
    }

    #[must_use]
    pub fn impassable(self, row: usize, col: usize) -> Self {
        self.with(row, col, TileKind::Impassable)
    }

    #[must_use]
    pub fn diamond_mine(self, row: usize, col: usize, owner: Option<TeamId>) -> Self {
        self.with(row, col, TileKind::DiamondMine { owner })
    }

    pub fn build(self) -> Board {
        let n = self.length_of_side;
        let tiles = self
            .kinds
            .into_iter()
            .enumerate()
            .map(|(slot, kind)| Tile::new(Position::new(slot / n, slot % n), kind))
            .collect();
        Board::from_parts(n, tiles)
    }

    /// Builds the board and marks the hero at `active_hero` as the one to
    /// decide for.
    ///
    /// # Errors
    ///
    /// Fails if no hero stands at `active_hero`.
    pub fn snapshot(self, active_hero: Position) -> Result<GameSnapshot, SnapshotError> {
        GameSnapshot::new(self.build(), active_hero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{HeroId, TileType};

    #[test]
    fn builds_tiles_with_matching_coordinates() {
        let board = BoardBuilder::new(3).health_well(1, 2).impassable(2, 0).build();
        for tile in board.tiles() {
            assert_eq!(board.tile(tile.position), Some(tile));
        }
        assert_eq!(
            board.tile(Position::new(1, 2)).map(Tile::tile_type),
            Some(TileType::HealthWell)
        );
    }

    #[test]
    fn snapshot_resolves_active_hero() {
        let snapshot = BoardBuilder::new(2)
            .hero(1, 1, Hero::new(HeroId(3), "me", TeamId(1), 80))
            .snapshot(Position::new(1, 1))
            .unwrap();
        assert_eq!(snapshot.hero().health, 80);
    }

    #[test]
    #[should_panic(expected = "outside a 2x2 board")]
    fn placement_outside_board_panics() {
        let _ = BoardBuilder::new(2).health_well(2, 0);
    }
}
