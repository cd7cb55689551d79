use super::tile::{Hero, Tile, TileKind, TileType};
use super::types::Position;
use crate::error::SnapshotError;

/// Square grid of tiles, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Board {
    length_of_side: usize,
    tiles: Vec<Tile>,
}

impl Board {
    /// Builds a board from the host's row matrix.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] if the matrix is empty or not square, or if a
    /// tile's recorded coordinates disagree with its slot.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, SnapshotError> {
        let length_of_side = rows.len();
        if length_of_side == 0 {
            return Err(SnapshotError::EmptyBoard);
        }

        let mut tiles = Vec::with_capacity(length_of_side * length_of_side);
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != length_of_side {
                return Err(SnapshotError::NotSquare {
                    row,
                    len: cells.len(),
                    expected: length_of_side,
                });
            }
            for (col, tile) in cells.into_iter().enumerate() {
                let expected = Position::new(row, col);
                if tile.position != expected {
                    return Err(SnapshotError::TileMisplaced {
                        expected,
                        found: tile.position,
                    });
                }
                tiles.push(tile);
            }
        }

        Ok(Self {
            length_of_side,
            tiles,
        })
    }

    /// Internal constructor for tiles already laid out row-major.
    pub(crate) fn from_parts(length_of_side: usize, tiles: Vec<Tile>) -> Self {
        debug_assert_eq!(tiles.len(), length_of_side * length_of_side);
        Self {
            length_of_side,
            tiles,
        }
    }

    #[inline]
    pub fn length_of_side(&self) -> usize {
        self.length_of_side
    }

    /// Number of tiles on the board.
    #[inline]
    pub fn area(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        position.row < self.length_of_side && position.col < self.length_of_side
    }

    /// Row-major slot of `position`, if it lies on the board.
    #[inline]
    pub fn slot(&self, position: Position) -> Option<usize> {
        self.contains(position)
            .then(|| position.row * self.length_of_side + position.col)
    }

    pub fn tile(&self, position: Position) -> Option<&Tile> {
        self.slot(position).map(|slot| &self.tiles[slot])
    }

    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    /// Rows of tiles, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.chunks(self.length_of_side)
    }
}

/// Everything the decision core sees for one turn: the board and which hero
/// it is deciding for.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct GameSnapshot {
    board: Board,
    active_hero: Position,
}

impl GameSnapshot {
    /// Pairs a board with the active hero's coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::ActiveHeroOutOfBounds`] or
    /// [`SnapshotError::ActiveHeroNotHero`] if the coordinates do not name a
    /// hero tile.
    pub fn new(board: Board, active_hero: Position) -> Result<Self, SnapshotError> {
        let tile = board
            .tile(active_hero)
            .ok_or(SnapshotError::ActiveHeroOutOfBounds {
                position: active_hero,
                length_of_side: board.length_of_side(),
            })?;

        if tile.tile_type() != TileType::Hero {
            return Err(SnapshotError::ActiveHeroNotHero {
                position: active_hero,
                found: tile.tile_type(),
            });
        }

        Ok(Self { board, active_hero })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn hero_position(&self) -> Position {
        self.active_hero
    }

    pub fn hero_tile(&self) -> &Tile {
        match self.board.tile(self.active_hero) {
            Some(tile) => tile,
            None => unreachable!("active hero position is validated on construction"),
        }
    }

    /// The hero this decision is for.
    pub fn hero(&self) -> &Hero {
        match &self.hero_tile().kind {
            TileKind::Hero(hero) => hero,
            _ => unreachable!("active hero tile is validated on construction"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{HeroId, TeamId};

    fn row(r: usize, n: usize) -> Vec<Tile> {
        (0..n).map(|c| Tile::unoccupied(Position::new(r, c))).collect()
    }

    #[test]
    fn rejects_ragged_rows() {
        let rows = vec![row(0, 3), row(1, 2), row(2, 3)];
        assert_eq!(
            Board::from_rows(rows),
            Err(SnapshotError::NotSquare {
                row: 1,
                len: 2,
                expected: 3
            })
        );
    }

    #[test]
    fn rejects_misplaced_tiles() {
        let mut rows = vec![row(0, 2), row(1, 2)];
        rows[1][0].position = Position::new(0, 0);
        assert!(matches!(
            Board::from_rows(rows),
            Err(SnapshotError::TileMisplaced { .. })
        ));
    }

    #[test]
    fn rejects_empty_board() {
        assert_eq!(Board::from_rows(Vec::new()), Err(SnapshotError::EmptyBoard));
    }

    #[test]
    fn snapshot_requires_hero_under_active_position() {
        let mut rows = vec![row(0, 2), row(1, 2)];
        let board = Board::from_rows(rows.clone()).unwrap();
        assert!(matches!(
            GameSnapshot::new(board, Position::new(0, 1)),
            Err(SnapshotError::ActiveHeroNotHero { .. })
        ));

        rows[0][1].kind = TileKind::Hero(Hero::new(HeroId(7), "me", TeamId(0), 100));
        let board = Board::from_rows(rows).unwrap();
        assert!(matches!(
            GameSnapshot::new(board.clone(), Position::new(5, 5)),
            Err(SnapshotError::ActiveHeroOutOfBounds { .. })
        ));

        let snapshot = GameSnapshot::new(board, Position::new(0, 1)).unwrap();
        assert_eq!(snapshot.hero().id, HeroId(7));
        assert_eq!(snapshot.hero_tile().position, Position::new(0, 1));
    }

    #[test]
    fn rows_iterate_top_to_bottom() {
        let board = Board::from_rows(vec![row(0, 2), row(1, 2)]).unwrap();
        let firsts: Vec<Position> = board.rows().map(|r| r[0].position).collect();
        assert_eq!(firsts, [Position::new(0, 0), Position::new(1, 0)]);
        assert_eq!(board.area(), 4);
    }
}
