//! Condition nodes for the policy's rule chains.
//!
//! Condition nodes check the context and return Success or Failure. They
//! never commit a move. Some of them run (memoised) goal searches, which is
//! why they take the context mutably.

use arena_core::{Goal, Tile, count_neighbours, is_winnable};
use behavior_tree::{Behavior, Status};

use crate::providers::ai::HeroContext;
use crate::providers::ai::types::Kin;

/// Succeeds when an adjacent cell, or the hero's own tile, offers a kill.
pub struct HasKillOpportunity;

impl Behavior<HeroContext<'_>> for HasKillOpportunity {
    fn tick(&self, ctx: &mut HeroContext) -> Status {
        Status::from_bool(ctx.survey().candidates().any(|(_, eval)| eval.kills > 0))
    }
}

/// Succeeds when all four adjacent tiles hold live heroes of `kin`.
pub struct IsSurrounded {
    pub kin: Kin,
}

impl Behavior<HeroContext<'_>> for IsSurrounded {
    fn tick(&self, ctx: &mut HeroContext) -> Status {
        let me = ctx.hero();
        let mut count = 0;
        let all_match = ctx.adjacent_heroes().all(|(_, other)| {
            count += 1;
            self.kin.includes(me, other)
        });
        Status::from_bool(all_match && count == 4)
    }
}

/// Succeeds when exactly `count` adjacent tiles satisfy `goal`.
///
/// Counts through [`count_neighbours`], so it sees the same tiles a goal
/// search would.
pub struct NeighbourCount {
    pub goal: Goal,
    pub count: usize,
}

impl Behavior<HeroContext<'_>> for NeighbourCount {
    fn tick(&self, ctx: &mut HeroContext) -> Status {
        let snapshot = ctx.snapshot();
        let me = ctx.hero();
        let goal = self.goal;
        let classifier = |tile: &Tile| goal.matches(me, tile);
        let found = count_neighbours(snapshot.board(), snapshot.hero_position(), &classifier);
        Status::from_bool(found == self.count)
    }
}

/// Succeeds when exactly one live enemy is adjacent and the hero would win
/// the duel.
pub struct HasWinnableDuel;

impl Behavior<HeroContext<'_>> for HasWinnableDuel {
    fn tick(&self, ctx: &mut HeroContext) -> Status {
        let mut enemies = ctx.adjacent(Kin::Enemy);
        let (Some((_, enemy)), None) = (enemies.next(), enemies.next()) else {
            return Status::Failure;
        };

        let winnable = is_winnable(
            ctx.health(),
            enemy.health,
            enemy.has_acted(),
            &ctx.config().combat,
        );
        tracing::trace!(enemy = %enemy.id, winnable, "single adjacent enemy");
        Status::from_bool(winnable)
    }
}

/// Succeeds when a tile satisfying `goal` is reachable.
pub struct CanReach {
    pub goal: Goal,
}

impl Behavior<HeroContext<'_>> for CanReach {
    fn tick(&self, ctx: &mut HeroContext) -> Status {
        Status::from_bool(ctx.path_to(self.goal).is_some())
    }
}

/// Succeeds when the nearest `goal` tile is at most `distance` steps away.
pub struct GoalWithin {
    pub goal: Goal,
    pub distance: u32,
}

impl Behavior<HeroContext<'_>> for GoalWithin {
    fn tick(&self, ctx: &mut HeroContext) -> Status {
        Status::from_bool(
            ctx.path_to(self.goal)
                .is_some_and(|found| found.distance <= self.distance),
        )
    }
}

#[cfg(test)]
mod tests {
    use arena_core::{BoardBuilder, GameSnapshot, Hero, HeroId, PolicyConfig, Position, TeamId};

    use super::*;

    fn hero(id: u32, team: u32, health: u32) -> Hero {
        Hero::new(HeroId(id), format!("h{id}"), TeamId(team), health)
    }

    fn surrounded_by(team: u32) -> GameSnapshot {
        BoardBuilder::new(3)
            .hero(1, 1, hero(1, 0, 80))
            .hero(0, 1, hero(2, team, 50))
            .hero(1, 2, hero(3, team, 50))
            .hero(2, 1, hero(4, team, 50))
            .hero(1, 0, hero(5, team, 50))
            .snapshot(Position::new(1, 1))
            .unwrap()
    }

    #[test]
    fn surrounded_needs_four_of_a_kin() {
        let config = PolicyConfig::default();
        let enemies = surrounded_by(1);
        let mut ctx = HeroContext::new(&enemies, &config);
        assert!(IsSurrounded { kin: Kin::Enemy }.tick(&mut ctx).is_success());
        assert!(IsSurrounded { kin: Kin::Friend }.tick(&mut ctx).is_failure());
        assert!(
            NeighbourCount { goal: Goal::Enemy, count: 4 }
                .tick(&mut ctx)
                .is_success()
        );

        let friends = surrounded_by(0);
        let mut ctx = HeroContext::new(&friends, &config);
        assert!(IsSurrounded { kin: Kin::Friend }.tick(&mut ctx).is_success());
        assert!(
            NeighbourCount { goal: Goal::TeamMember, count: 4 }
                .tick(&mut ctx)
                .is_success()
        );
    }

    #[test]
    fn three_neighbours_are_not_an_encirclement() {
        let config = PolicyConfig::default();
        let snapshot = BoardBuilder::new(3)
            .hero(1, 1, hero(1, 0, 80))
            .hero(0, 1, hero(2, 1, 50))
            .hero(1, 2, hero(3, 1, 50))
            .hero(2, 1, hero(4, 1, 50))
            .snapshot(Position::new(1, 1))
            .unwrap();
        let mut ctx = HeroContext::new(&snapshot, &config);
        assert!(IsSurrounded { kin: Kin::Enemy }.tick(&mut ctx).is_failure());
        assert!(IsSurrounded { kin: Kin::Any }.tick(&mut ctx).is_failure());
    }

    #[test]
    fn duel_requires_a_single_enemy() {
        let config = PolicyConfig::default();
        let single = BoardBuilder::new(3)
            .hero(1, 1, hero(1, 0, 60))
            .hero(0, 1, hero(2, 1, 60).with_last_active_turn(3))
            .snapshot(Position::new(1, 1))
            .unwrap();
        let mut ctx = HeroContext::new(&single, &config);
        assert!(HasWinnableDuel.tick(&mut ctx).is_success());

        let pair = surrounded_by(1);
        let mut ctx = HeroContext::new(&pair, &config);
        assert!(HasWinnableDuel.tick(&mut ctx).is_failure());
    }

    #[test]
    fn goal_distance_checks() {
        let config = PolicyConfig::default();
        let snapshot = BoardBuilder::new(4)
            .hero(0, 0, hero(1, 0, 50))
            .health_well(0, 2)
            .snapshot(Position::ORIGIN)
            .unwrap();
        let mut ctx = HeroContext::new(&snapshot, &config);

        assert!(CanReach { goal: Goal::HealthWell }.tick(&mut ctx).is_success());
        assert!(CanReach { goal: Goal::Enemy }.tick(&mut ctx).is_failure());
        assert!(
            GoalWithin { goal: Goal::HealthWell, distance: 1 }
                .tick(&mut ctx)
                .is_failure()
        );
        assert!(
            GoalWithin { goal: Goal::HealthWell, distance: 2 }
                .tick(&mut ctx)
                .is_success()
        );
    }
}
