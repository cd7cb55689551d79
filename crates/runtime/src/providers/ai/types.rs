//! Vocabulary shared by the policy's nodes and strategies.

use arena_core::{Hero, Move};

/// Which rule of a strategy produced the move.
///
/// Several rules appear in both strategies; the label names what the rule
/// does, not its position in a chain.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::AsRefStr,
    serde::Serialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Step into the adjacent cell, or attack from the own tile, offering the most kills.
    FinishingBlow,
    /// Surrounded by four allies: move into the weakest one.
    SupportEncircledAlly,
    /// Surrounded by four enemies: hit the weakest one.
    BreakEncirclement,
    /// A single adjacent enemy the hero out-lasts.
    WinnableDuel,
    /// Hit an adjacent enemy no healthier than the hero.
    StrikeWeakerNeighbour,
    /// Step onto an adjacent health well.
    DrinkFromWell,
    /// Heal the weakest wounded adjacent ally.
    HealAlly,
    /// Head for the nearest unowned or enemy diamond mine.
    ClaimMine,
    /// Head for the nearest health well.
    RetreatToWell,
    /// Head for a well while nothing weaker is in reach.
    RecoverHealth,
    /// Head for the nearest enemy.
    HuntEnemy,
    /// Head for the nearest strictly weaker enemy.
    HuntWeakerEnemy,
    /// Surrounded by four allies: regroup toward the nearest team member.
    RegroupWithTeam,
    /// No rule fired.
    Idle,
}

/// The move chosen for a turn and the rule that chose it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Decision {
    #[serde(rename = "move")]
    pub mv: Move,
    pub rule: Rule,
}

impl Decision {
    pub const fn new(mv: Move, rule: Rule) -> Self {
        Self { mv, rule }
    }

    pub const fn idle() -> Self {
        Self::new(Move::Stay, Rule::Idle)
    }
}

/// Which adjacent heroes a neighbour query considers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Kin {
    Any,
    Friend,
    Enemy,
}

impl Kin {
    /// Whether `other` belongs to this kin as seen by `hero`.
    pub fn includes(self, hero: &Hero, other: &Hero) -> bool {
        match self {
            Kin::Any => true,
            Kin::Friend => other.is_ally_of(hero),
            Kin::Enemy => !other.is_ally_of(hero),
        }
    }
}

/// Upper bound on a neighbour's health for it to be picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HealthCap {
    Unbounded,
    /// At most the active hero's own health.
    OwnHealth,
    /// Strictly below the configured full health.
    BelowFull,
}
