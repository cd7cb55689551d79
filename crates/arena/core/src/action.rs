//! Directions on the grid and the moves a hero can answer with.

/// One of the four orthogonal single-step moves.
///
/// [`Direction::ALL`] is the canonical scan order (North, East, South,
/// West). Every search and scan iterates in this order, which is what makes
/// tie-breaking reproducible.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// `(row, col)` offset, rows growing southwards.
    pub const fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    /// Position of this direction in [`Direction::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }
}

/// The answer returned to the host for one turn.
///
/// `Display` yields the exact labels the host expects (`"North"`, ...,
/// `"Stay"`).
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Move {
    North,
    South,
    East,
    West,
    #[default]
    Stay,
}

impl Move {
    /// The direction this move steps in, `None` for [`Move::Stay`].
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Move::North => Some(Direction::North),
            Move::South => Some(Direction::South),
            Move::East => Some(Direction::East),
            Move::West => Some(Direction::West),
            Move::Stay => None,
        }
    }
}

impl From<Direction> for Move {
    fn from(direction: Direction) -> Self {
        match direction {
            Direction::North => Move::North,
            Direction::East => Move::East,
            Direction::South => Move::South,
            Direction::West => Move::West,
        }
    }
}

impl From<Option<Direction>> for Move {
    fn from(direction: Option<Direction>) -> Self {
        direction.map_or(Move::Stay, Move::from)
    }
}
