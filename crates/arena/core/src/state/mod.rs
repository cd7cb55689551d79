//! Board model handed to the decision core once per turn.
//!
//! A [`GameSnapshot`] is validated on construction and immutable afterwards:
//! the board is square, every slot holds the tile whose coordinates match it,
//! and the active hero points at a hero tile.

mod board;
mod builder;
mod tile;
mod types;

pub use board::{Board, GameSnapshot};
pub use builder::BoardBuilder;
pub use tile::{Hero, Tile, TileKind, TileType};
pub use types::{HeroId, Position, TeamId};
