use std::fmt;

use crate::action::Direction;

/// Identifier the host assigns to each hero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeroId(pub u32);

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Team a hero (or a captured diamond mine) belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamId(pub u32);

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "team {}", self.0)
    }
}

/// Grid coordinate: `row` is the distance from the top edge, `col` the
/// distance from the left edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const ORIGIN: Self = Self { row: 0, col: 0 };

    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The coordinate one step away, or `None` if it would go negative.
    ///
    /// The upper edge is not checked here; see [`crate::grid::neighbor`].
    pub fn step(self, direction: Direction) -> Option<Position> {
        let (dr, dc) = direction.offset();
        let row = self.row.checked_add_signed(dr as isize)?;
        let col = self.col.checked_add_signed(dc as isize)?;
        Some(Position { row, col })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
