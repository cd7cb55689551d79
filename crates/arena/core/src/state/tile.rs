use super::types::{HeroId, Position, TeamId};

/// Field-less tile classification, used for labels and scan cells.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileType {
    Unoccupied,
    Hero,
    DiamondMine,
    HealthWell,
    Impassable,
}

/// Combat unit occupying a tile, friendly or hostile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hero {
    pub id: HeroId,
    pub name: String,
    pub team: TeamId,
    /// Remaining health, 0-100.
    pub health: u32,
    pub dead: bool,
    /// Turn on which the hero last acted this round; 0 if it has not yet.
    pub last_active_turn: u32,
    pub damage_done: u32,
    pub health_recovered: u32,
    pub heroes_killed: Vec<HeroId>,
    pub health_given: u32,
}

impl Hero {
    pub fn new(id: HeroId, name: impl Into<String>, team: TeamId, health: u32) -> Self {
        Self {
            id,
            name: name.into(),
            team,
            health,
            dead: false,
            last_active_turn: 0,
            damage_done: 0,
            health_recovered: 0,
            heroes_killed: Vec::new(),
            health_given: 0,
        }
    }

    #[must_use]
    pub fn with_last_active_turn(mut self, turn: u32) -> Self {
        self.last_active_turn = turn;
        self
    }

    #[must_use]
    pub fn with_health_given(mut self, amount: u32) -> Self {
        self.health_given = amount;
        self
    }

    #[must_use]
    pub fn with_damage_done(mut self, amount: u32) -> Self {
        self.damage_done = amount;
        self
    }

    #[must_use]
    pub fn with_health_recovered(mut self, amount: u32) -> Self {
        self.health_recovered = amount;
        self
    }

    #[must_use]
    pub fn with_kill(mut self, victim: HeroId) -> Self {
        self.heroes_killed.push(victim);
        self
    }

    #[must_use]
    pub fn dead(mut self) -> Self {
        self.dead = true;
        self
    }

    /// True once the hero has taken its action this round.
    #[inline]
    pub fn has_acted(&self) -> bool {
        self.last_active_turn > 0
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        !self.dead
    }

    #[inline]
    pub fn is_ally_of(&self, other: &Hero) -> bool {
        self.team == other.team
    }
}

/// What occupies a tile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TileKind {
    Unoccupied,
    Hero(Hero),
    DiamondMine { owner: Option<TeamId> },
    HealthWell,
    Impassable,
}

impl TileKind {
    pub fn tile_type(&self) -> TileType {
        match self {
            TileKind::Unoccupied => TileType::Unoccupied,
            TileKind::Hero(_) => TileType::Hero,
            TileKind::DiamondMine { .. } => TileType::DiamondMine,
            TileKind::HealthWell => TileType::HealthWell,
            TileKind::Impassable => TileType::Impassable,
        }
    }
}

/// One grid cell.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub position: Position,
    pub kind: TileKind,
}

impl Tile {
    pub fn new(position: Position, kind: TileKind) -> Self {
        Self { position, kind }
    }

    pub fn unoccupied(position: Position) -> Self {
        Self::new(position, TileKind::Unoccupied)
    }

    #[inline]
    pub fn tile_type(&self) -> TileType {
        self.kind.tile_type()
    }

    #[inline]
    pub fn is_unoccupied(&self) -> bool {
        matches!(self.kind, TileKind::Unoccupied)
    }

    #[inline]
    pub fn is_health_well(&self) -> bool {
        matches!(self.kind, TileKind::HealthWell)
    }

    /// The hero on this tile, dead or alive.
    pub fn hero(&self) -> Option<&Hero> {
        match &self.kind {
            TileKind::Hero(hero) => Some(hero),
            _ => None,
        }
    }

    /// The hero on this tile if it is still alive.
    pub fn live_hero(&self) -> Option<&Hero> {
        self.hero().filter(|hero| hero.is_alive())
    }

    /// True if `hero` stands on this tile.
    pub fn is_occupied_by(&self, hero: &Hero) -> bool {
        self.hero().is_some_and(|occupant| occupant.id == hero.id)
    }

    /// Owner of the diamond mine on this tile; `None` for unowned mines and
    /// for tiles that are not mines.
    pub fn mine_owner(&self) -> Option<TeamId> {
        match self.kind {
            TileKind::DiamondMine { owner } => owner,
            _ => None,
        }
    }
}
