//! Named search goals relative to the active hero.
//!
//! Each [`Goal`] is a pure classifier over tiles; [`find_goal`] runs it
//! through [`find_nearest`] from the hero's tile.

use crate::pathfinding::{PathMatch, find_nearest};
use crate::state::{GameSnapshot, Hero, Tile, TileKind};

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
#[strum(serialize_all = "snake_case")]
pub enum Goal {
    HealthWell,
    /// A diamond mine that is unowned or owned by another team.
    NonTeamMine,
    /// Any live hero on another team.
    Enemy,
    /// A live enemy with strictly less health than the hero.
    WeakerEnemy,
    /// A live hero on the same team.
    TeamMember,
}

impl Goal {
    /// Whether `tile` satisfies this goal from `hero`'s point of view.
    pub fn matches(self, hero: &Hero, tile: &Tile) -> bool {
        match self {
            Goal::HealthWell => tile.is_health_well(),
            Goal::NonTeamMine => match &tile.kind {
                TileKind::DiamondMine { owner } => *owner != Some(hero.team),
                _ => false,
            },
            Goal::Enemy => tile
                .live_hero()
                .is_some_and(|other| !other.is_ally_of(hero)),
            Goal::WeakerEnemy => tile
                .live_hero()
                .is_some_and(|other| !other.is_ally_of(hero) && other.health < hero.health),
            Goal::TeamMember => tile
                .live_hero()
                .is_some_and(|other| other.is_ally_of(hero) && other.id != hero.id),
        }
    }
}

/// Nearest tile satisfying `goal`, searched from the active hero.
pub fn find_goal(snapshot: &GameSnapshot, goal: Goal) -> Option<PathMatch> {
    let hero = snapshot.hero();
    let classifier = |tile: &Tile| goal.matches(hero, tile);
    find_nearest(snapshot.board(), snapshot.hero_position(), &classifier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Direction;
    use crate::state::{BoardBuilder, HeroId, Position, TeamId};

    fn hero(id: u32, team: u32, health: u32) -> Hero {
        Hero::new(HeroId(id), format!("h{id}"), TeamId(team), health)
    }

    #[test]
    fn mines_owned_by_own_team_are_skipped() {
        let snapshot = BoardBuilder::new(5)
            .hero(2, 2, hero(1, 0, 100))
            .diamond_mine(2, 3, Some(TeamId(0)))
            .diamond_mine(0, 2, Some(TeamId(1)))
            .snapshot(Position::new(2, 2))
            .unwrap();

        let found = find_goal(&snapshot, Goal::NonTeamMine).unwrap();
        assert_eq!(found.position, Position::new(0, 2));
        assert_eq!(found.direction, Direction::North);
    }

    #[test]
    fn unowned_mine_counts_as_non_team() {
        let snapshot = BoardBuilder::new(3)
            .hero(0, 0, hero(1, 0, 100))
            .diamond_mine(0, 1, None)
            .snapshot(Position::ORIGIN)
            .unwrap();
        assert_eq!(
            find_goal(&snapshot, Goal::NonTeamMine).map(|m| m.distance),
            Some(1)
        );
    }

    #[test]
    fn weaker_enemy_ignores_stronger_and_dead() {
        let snapshot = BoardBuilder::new(5)
            .hero(0, 0, hero(1, 0, 60))
            .hero(0, 1, hero(2, 1, 80))
            .hero(1, 0, hero(3, 1, 10).dead())
            .hero(4, 4, hero(4, 1, 50))
            .snapshot(Position::ORIGIN)
            .unwrap();

        // both exits are blocked by heroes that do not qualify
        assert_eq!(find_goal(&snapshot, Goal::WeakerEnemy), None);
        assert_eq!(
            find_goal(&snapshot, Goal::Enemy).map(|m| m.position),
            Some(Position::new(0, 1))
        );
    }

    #[test]
    fn team_member_excludes_self() {
        let snapshot = BoardBuilder::new(3)
            .hero(0, 0, hero(1, 0, 60))
            .hero(2, 2, hero(2, 0, 60))
            .snapshot(Position::ORIGIN)
            .unwrap();
        let found = find_goal(&snapshot, Goal::TeamMember).unwrap();
        assert_eq!(found.position, Position::new(2, 2));
        assert_eq!(found.distance, 4);
    }
}
