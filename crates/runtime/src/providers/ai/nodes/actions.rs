//! Action nodes for the policy's rule chains.
//!
//! Action nodes commit a [`Move`] to the context together with the
//! [`Rule`] they stand for. A rule's action is always the last node of its
//! sequence, so at most one action per tree evaluation succeeds.

use arena_core::{Direction, Goal, Move, ScanTarget};
use behavior_tree::{Behavior, Status};

use crate::providers::ai::HeroContext;
use crate::providers::ai::types::{HealthCap, Kin, Rule};

/// Moves toward the adjacent cell with the most kills.
///
/// Candidates are the four root cells in scan order with the hero's own tile
/// last; a later candidate only wins with strictly more kills. A root cell
/// is entered directly. The own tile attacks its exact-kill target, or
/// when it has none, steps onto an adjacent well or heads for the nearest
/// enemy. Fails when nothing offers a kill.
pub struct FinishingBlow;

impl Behavior<HeroContext<'_>> for FinishingBlow {
    fn tick(&self, ctx: &mut HeroContext) -> Status {
        let Some((target, attack)) = best_kill(ctx) else {
            return Status::Failure;
        };

        let mv = match (target, attack) {
            (ScanTarget::Branch(direction), _) | (ScanTarget::Own, Some(direction)) => {
                Move::from(direction)
            }
            (ScanTarget::Own, None) => match ctx.own().direction_to_well {
                Some(direction) => Move::from(direction),
                None => toward(ctx, Goal::Enemy, Rule::FinishingBlow),
            },
        };

        ctx.commit(mv, Rule::FinishingBlow);
        Status::Success
    }
}

fn best_kill(ctx: &HeroContext) -> Option<(ScanTarget, Option<Direction>)> {
    let mut best = None;
    let mut most = 0;
    for (target, evaluation) in ctx.survey().candidates() {
        if evaluation.kills > most {
            most = evaluation.kills;
            best = Some((target, evaluation.direction_to_attack));
        }
    }
    best
}

/// Steps into the weakest adjacent hero of `kin` under `cap`. Fails when
/// there is none.
pub struct StepToWeakest {
    pub kin: Kin,
    pub cap: HealthCap,
    pub rule: Rule,
}

impl Behavior<HeroContext<'_>> for StepToWeakest {
    fn tick(&self, ctx: &mut HeroContext) -> Status {
        match ctx.weakest_neighbour(self.kin, self.cap) {
            Some((direction, _)) => {
                ctx.commit(Move::from(direction), self.rule);
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

/// Steps onto an adjacent health well. Fails when there is none.
pub struct StepToWell {
    pub rule: Rule,
}

impl Behavior<HeroContext<'_>> for StepToWell {
    fn tick(&self, ctx: &mut HeroContext) -> Status {
        match ctx.own().direction_to_well {
            Some(direction) => {
                ctx.commit(Move::from(direction), self.rule);
                Status::Success
            }
            None => Status::Failure,
        }
    }
}

/// Heads for the nearest tile satisfying `goal`.
///
/// Always succeeds: once a rule has chosen this action, an unreachable goal
/// means the hero stays put.
pub struct FollowPath {
    pub goal: Goal,
    pub rule: Rule,
}

impl Behavior<HeroContext<'_>> for FollowPath {
    fn tick(&self, ctx: &mut HeroContext) -> Status {
        let mv = toward(ctx, self.goal, self.rule);
        ctx.commit(mv, self.rule);
        Status::Success
    }
}

fn toward(ctx: &mut HeroContext, goal: Goal, rule: Rule) -> Move {
    match ctx.path_to(goal) {
        Some(found) => Move::from(found.direction),
        None => {
            tracing::warn!(hero = %ctx.hero().id, %goal, %rule, "no path to goal, staying");
            Move::Stay
        }
    }
}

#[cfg(test)]
mod tests {
    use arena_core::{BoardBuilder, GameSnapshot, Hero, HeroId, PolicyConfig, Position, TeamId};

    use super::*;

    fn hero(id: u32, team: u32, health: u32) -> Hero {
        Hero::new(HeroId(id), format!("h{id}"), TeamId(team), health)
    }

    fn decide<B>(snapshot: &GameSnapshot, node: &B) -> Option<(Move, Rule)>
    where
        B: for<'c> Behavior<HeroContext<'c>>,
    {
        let config = PolicyConfig::default();
        let mut ctx = HeroContext::new(snapshot, &config);
        let status = node.tick(&mut ctx);
        let decision = ctx.take_decision();
        assert_eq!(status.is_success(), decision.is_some());
        decision.map(|d| (d.mv, d.rule))
    }

    #[test]
    fn finishing_blow_attacks_exact_kill_target() {
        let snapshot = BoardBuilder::new(5)
            .hero(2, 2, hero(1, 0, 100))
            .hero(2, 1, hero(2, 1, 30))
            .snapshot(Position::new(2, 2))
            .unwrap();
        // the only kill anywhere is the own tile's exact-30 attack
        assert_eq!(
            decide(&snapshot, &FinishingBlow),
            Some((Move::West, Rule::FinishingBlow))
        );
    }

    #[test]
    fn finishing_blow_fails_without_kills() {
        let snapshot = BoardBuilder::new(5)
            .hero(2, 2, hero(1, 0, 100))
            .hero(2, 1, hero(2, 1, 90))
            .snapshot(Position::new(2, 2))
            .unwrap();
        assert_eq!(decide(&snapshot, &FinishingBlow), None);
    }

    #[test]
    fn finishing_blow_steps_toward_the_root_cell_with_the_kill() {
        // weak enemy two steps south: only the South root cell touches it
        let snapshot = BoardBuilder::new(5)
            .hero(0, 2, hero(1, 0, 100))
            .hero(2, 2, hero(2, 1, 10))
            .snapshot(Position::new(0, 2))
            .unwrap();
        assert_eq!(
            decide(&snapshot, &FinishingBlow),
            Some((Move::South, Rule::FinishingBlow))
        );
    }

    #[test]
    fn follow_path_stays_when_unreachable() {
        let snapshot = BoardBuilder::new(3)
            .hero(1, 1, hero(1, 0, 100))
            .snapshot(Position::new(1, 1))
            .unwrap();
        let node = FollowPath {
            goal: Goal::NonTeamMine,
            rule: Rule::ClaimMine,
        };
        assert_eq!(decide(&snapshot, &node), Some((Move::Stay, Rule::ClaimMine)));
    }

    #[test]
    fn step_to_weakest_respects_cap() {
        let snapshot = BoardBuilder::new(3)
            .hero(1, 1, hero(1, 0, 40))
            .hero(0, 1, hero(2, 1, 50))
            .hero(1, 2, hero(3, 1, 45))
            .snapshot(Position::new(1, 1))
            .unwrap();

        let any = StepToWeakest {
            kin: Kin::Enemy,
            cap: HealthCap::Unbounded,
            rule: Rule::BreakEncirclement,
        };
        assert_eq!(decide(&snapshot, &any), Some((Move::East, Rule::BreakEncirclement)));

        let weaker = StepToWeakest {
            kin: Kin::Enemy,
            cap: HealthCap::OwnHealth,
            rule: Rule::StrikeWeakerNeighbour,
        };
        assert_eq!(decide(&snapshot, &weaker), None);
    }
}
