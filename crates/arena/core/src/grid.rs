//! Bounds checks and single-step adjacency on the square grid.

use crate::action::Direction;
use crate::state::{Board, Position, Tile};

/// True iff both coordinates lie in `[0, length_of_side - 1]`.
///
/// Takes signed coordinates so callers can probe one step past an edge.
pub fn in_bounds(board: &Board, row: i64, col: i64) -> bool {
    let side = board.length_of_side() as i64;
    (0..side).contains(&row) && (0..side).contains(&col)
}

/// The tile one step from `position` in `direction`, or `None` past an edge.
pub fn neighbor(board: &Board, position: Position, direction: Direction) -> Option<&Tile> {
    position
        .step(direction)
        .and_then(|next| board.tile(next))
}

/// All on-board neighbours of `position` in scan order.
pub fn neighbors(board: &Board, position: Position) -> impl Iterator<Item = (Direction, &Tile)> {
    Direction::ALL
        .into_iter()
        .filter_map(move |direction| neighbor(board, position, direction).map(|tile| (direction, tile)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::BoardBuilder;

    #[test]
    fn bounds_on_five_by_five() {
        let board = BoardBuilder::new(5).build();
        assert!(!in_bounds(&board, -1, 0));
        assert!(!in_bounds(&board, 5, 0));
        assert!(!in_bounds(&board, 0, 5));
        assert!(in_bounds(&board, 4, 4));
        assert!(in_bounds(&board, 0, 0));
    }

    #[test]
    fn neighbor_offsets_from_center() {
        let board = BoardBuilder::new(5).build();
        let center = Position::new(2, 2);
        let at = |d| neighbor(&board, center, d).map(|t| t.position);

        assert_eq!(at(Direction::North), Some(Position::new(1, 2)));
        assert_eq!(at(Direction::East), Some(Position::new(2, 3)));
        assert_eq!(at(Direction::South), Some(Position::new(3, 2)));
        assert_eq!(at(Direction::West), Some(Position::new(2, 1)));
    }

    #[test]
    fn neighbor_past_edge_is_absent() {
        let board = BoardBuilder::new(5).build();
        assert!(neighbor(&board, Position::new(0, 2), Direction::North).is_none());
        assert!(neighbor(&board, Position::new(4, 4), Direction::East).is_none());
        assert!(neighbor(&board, Position::new(4, 4), Direction::South).is_none());
    }

    #[test]
    fn corner_has_two_neighbours_in_scan_order() {
        let board = BoardBuilder::new(3).build();
        let dirs: Vec<Direction> = neighbors(&board, Position::ORIGIN).map(|(d, _)| d).collect();
        assert_eq!(dirs, [Direction::East, Direction::South]);
    }
}
