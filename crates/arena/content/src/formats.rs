//! Wire format of the host's game snapshot.
//!
//! The host sends camelCase JSON shaped like its own board objects:
//!
//! ```json
//! {
//!   "board": {
//!     "lengthOfSide": 5,
//!     "tiles": [[{ "type": "Unoccupied", "distanceFromTop": 0, "distanceFromLeft": 0 }, ...], ...]
//!   },
//!   "activeHero": { "type": "Hero", "distanceFromTop": 2, "distanceFromLeft": 2, ... }
//! }
//! ```
//!
//! Hero tiles carry their stats inline; diamond mines carry an optional
//! `owner` whose `team` is the owning team. Fields the engine does not use
//! are ignored.

use arena_core::{
    Board, GameSnapshot, Hero, HeroId, Position, SnapshotError, TeamId, Tile, TileKind, TileType,
};
use serde::{Deserialize, Serialize};

/// A whole snapshot as sent by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotDto {
    pub board: BoardDto,
    pub active_hero: ActiveHeroDto,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDto {
    pub length_of_side: usize,
    pub tiles: Vec<Vec<TileDto>>,
}

/// The active hero is identified by its coordinates only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveHeroDto {
    pub distance_from_top: usize,
    pub distance_from_left: usize,
}

/// One tile. Hero fields are only read for `"type": "Hero"`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileDto {
    #[serde(rename = "type")]
    pub tile_type: TileType,
    pub distance_from_top: usize,
    pub distance_from_left: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<u32>,
    #[serde(default)]
    pub dead: bool,
    #[serde(default)]
    pub last_active_turn: u32,
    #[serde(default)]
    pub damage_done: u32,
    #[serde(default)]
    pub health_recovered: u32,
    #[serde(default)]
    pub heroes_killed: Vec<u32>,
    #[serde(default)]
    pub health_given: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerDto>,
}

/// Owner reference on a diamond mine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerDto {
    pub team: u32,
}

/// Why a snapshot DTO could not become a [`GameSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("hero tile at {position} is missing `{field}`")]
    MissingHeroField {
        position: Position,
        field: &'static str,
    },

    #[error("lengthOfSide is {declared} but the board has {actual} rows")]
    SideMismatch { declared: usize, actual: usize },

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

impl TileDto {
    fn position(&self) -> Position {
        Position::new(self.distance_from_top, self.distance_from_left)
    }

    /// Converts to a core tile, reading hero or owner fields as the type
    /// requires.
    pub fn into_tile(self) -> Result<Tile, FormatError> {
        let position = self.position();
        let kind = match self.tile_type {
            TileType::Unoccupied => TileKind::Unoccupied,
            TileType::HealthWell => TileKind::HealthWell,
            TileType::Impassable => TileKind::Impassable,
            TileType::DiamondMine => TileKind::DiamondMine {
                owner: self.owner.map(|owner| TeamId(owner.team)),
            },
            TileType::Hero => TileKind::Hero(self.into_hero(position)?),
        };
        Ok(Tile::new(position, kind))
    }

    fn into_hero(self, position: Position) -> Result<Hero, FormatError> {
        let missing = |field| FormatError::MissingHeroField { position, field };
        let id = self.id.ok_or_else(|| missing("id"))?;
        let team = self.team.ok_or_else(|| missing("team"))?;
        let health = self.health.ok_or_else(|| missing("health"))?;

        Ok(Hero {
            id: HeroId(id),
            name: self.name.unwrap_or_default(),
            team: TeamId(team),
            health,
            dead: self.dead,
            last_active_turn: self.last_active_turn,
            damage_done: self.damage_done,
            health_recovered: self.health_recovered,
            heroes_killed: self.heroes_killed.into_iter().map(HeroId).collect(),
            health_given: self.health_given,
        })
    }
}

impl SnapshotDto {
    /// Validates the DTO into a [`GameSnapshot`].
    pub fn into_snapshot(self) -> Result<GameSnapshot, FormatError> {
        let actual = self.board.tiles.len();
        if self.board.length_of_side != actual {
            return Err(FormatError::SideMismatch {
                declared: self.board.length_of_side,
                actual,
            });
        }

        let rows = self
            .board
            .tiles
            .into_iter()
            .map(|row| row.into_iter().map(TileDto::into_tile).collect())
            .collect::<Result<Vec<Vec<Tile>>, _>>()?;

        let board = Board::from_rows(rows)?;
        let active = Position::new(
            self.active_hero.distance_from_top,
            self.active_hero.distance_from_left,
        );
        Ok(GameSnapshot::new(board, active)?)
    }
}
