//! Layer 1: single rules.
//!
//! Each pattern pairs zero or more conditions with exactly one action node,
//! and is named after what the rule does. Health thresholds are passed in so
//! strategies can take them from [`arena_core::PolicyConfig`].

use arena_core::Goal;
use behavior_tree::builder::{condition, inverter, node, sequence};

use super::RuleTree;
use crate::providers::ai::HeroContext;
use crate::providers::ai::nodes::{
    CanReach, FinishingBlow, FollowPath, GoalWithin, HasKillOpportunity, HasWinnableDuel,
    IsSurrounded, NeighbourCount, StepToWeakest, StepToWell,
};
use crate::providers::ai::types::{HealthCap, Kin, Rule};

// ============================================================================
// Combat
// ============================================================================

/// Take the best kill next to or under the hero.
pub fn finish_enemies<'a>() -> RuleTree<'a> {
    sequence(vec![node(HasKillOpportunity), node(FinishingBlow)])
}

/// Four allies around: move into the weakest of them.
pub fn support_encircled_ally<'a>() -> RuleTree<'a> {
    sequence(vec![
        node(IsSurrounded { kin: Kin::Friend }),
        node(StepToWeakest {
            kin: Kin::Friend,
            cap: HealthCap::Unbounded,
            rule: Rule::SupportEncircledAlly,
        }),
    ])
}

/// Four enemies around: hit the weakest of them.
pub fn break_encirclement<'a>() -> RuleTree<'a> {
    sequence(vec![
        node(IsSurrounded { kin: Kin::Enemy }),
        node(StepToWeakest {
            kin: Kin::Enemy,
            cap: HealthCap::Unbounded,
            rule: Rule::BreakEncirclement,
        }),
    ])
}

/// Fight a lone adjacent enemy when the duel is winnable.
pub fn duel_when_winnable<'a>() -> RuleTree<'a> {
    sequence(vec![
        node(HasWinnableDuel),
        node(StepToWeakest {
            kin: Kin::Enemy,
            cap: HealthCap::Unbounded,
            rule: Rule::WinnableDuel,
        }),
    ])
}

/// Hit the weakest adjacent enemy that is no healthier than the hero.
pub fn strike_weaker_neighbour<'a>() -> RuleTree<'a> {
    node(StepToWeakest {
        kin: Kin::Enemy,
        cap: HealthCap::OwnHealth,
        rule: Rule::StrikeWeakerNeighbour,
    })
}

// ============================================================================
// Survival
// ============================================================================

/// Step onto an adjacent well at or below `threshold` health.
pub fn drink_when_wounded<'a>(threshold: u32) -> RuleTree<'a> {
    sequence(vec![
        health_at_most(threshold),
        node(StepToWell {
            rule: Rule::DrinkFromWell,
        }),
    ])
}

/// Path to a well at or below `threshold` health, but only when one is
/// right next to the hero.
pub fn drink_when_beside_well<'a>(threshold: u32) -> RuleTree<'a> {
    sequence(vec![
        health_at_most(threshold),
        node(GoalWithin {
            goal: Goal::HealthWell,
            distance: 1,
        }),
        node(FollowPath {
            goal: Goal::HealthWell,
            rule: Rule::DrinkFromWell,
        }),
    ])
}

/// Heal the weakest adjacent ally that is not at full health.
pub fn heal_wounded_ally<'a>() -> RuleTree<'a> {
    node(StepToWeakest {
        kin: Kin::Friend,
        cap: HealthCap::BelowFull,
        rule: Rule::HealAlly,
    })
}

/// Head for the nearest well at or below `threshold` health.
pub fn retreat_when_hurt<'a>(threshold: u32) -> RuleTree<'a> {
    sequence(vec![
        health_at_most(threshold),
        node(FollowPath {
            goal: Goal::HealthWell,
            rule: Rule::RetreatToWell,
        }),
    ])
}

/// Top up at a well while no weaker enemy is reachable.
pub fn recover_when_no_prey<'a>(full: u32) -> RuleTree<'a> {
    sequence(vec![
        inverter(node(CanReach {
            goal: Goal::WeakerEnemy,
        })),
        condition(move |ctx: &HeroContext<'a>| ctx.health() < full),
        node(FollowPath {
            goal: Goal::HealthWell,
            rule: Rule::RecoverHealth,
        }),
    ])
}

// ============================================================================
// Objectives
// ============================================================================

/// Above `threshold` health with no adjacent enemy, go for a reachable mine.
pub fn claim_mine_when_healthy<'a>(threshold: u32) -> RuleTree<'a> {
    sequence(vec![
        condition(move |ctx: &HeroContext<'a>| ctx.health() > threshold),
        no_adjacent_enemies(),
        node(CanReach {
            goal: Goal::NonTeamMine,
        }),
        node(FollowPath {
            goal: Goal::NonTeamMine,
            rule: Rule::ClaimMine,
        }),
    ])
}

/// At full health with no enemy on any side, roam toward a mine.
pub fn roam_for_mines<'a>(full: u32) -> RuleTree<'a> {
    sequence(vec![
        condition(move |ctx: &HeroContext<'a>| ctx.health() >= full),
        node(NeighbourCount {
            goal: Goal::Enemy,
            count: 0,
        }),
        node(FollowPath {
            goal: Goal::NonTeamMine,
            rule: Rule::ClaimMine,
        }),
    ])
}

/// Four allies around: path toward the nearest team member.
pub fn regroup_when_crowded<'a>() -> RuleTree<'a> {
    sequence(vec![
        node(NeighbourCount {
            goal: Goal::TeamMember,
            count: 4,
        }),
        node(FollowPath {
            goal: Goal::TeamMember,
            rule: Rule::RegroupWithTeam,
        }),
    ])
}

/// Four enemies around: path toward the nearest enemy.
pub fn charge_when_encircled<'a>() -> RuleTree<'a> {
    sequence(vec![
        node(NeighbourCount {
            goal: Goal::Enemy,
            count: 4,
        }),
        node(FollowPath {
            goal: Goal::Enemy,
            rule: Rule::BreakEncirclement,
        }),
    ])
}

/// At full health with no weaker enemy in reach, go after any enemy.
pub fn hunt_when_no_prey<'a>(full: u32) -> RuleTree<'a> {
    sequence(vec![
        inverter(node(CanReach {
            goal: Goal::WeakerEnemy,
        })),
        condition(move |ctx: &HeroContext<'a>| ctx.health() >= full),
        node(FollowPath {
            goal: Goal::Enemy,
            rule: Rule::HuntEnemy,
        }),
    ])
}

/// Go after the nearest strictly weaker enemy.
pub fn hunt_weaker<'a>() -> RuleTree<'a> {
    node(FollowPath {
        goal: Goal::WeakerEnemy,
        rule: Rule::HuntWeakerEnemy,
    })
}

// ============================================================================
// Helpers
// ============================================================================

fn health_at_most<'a>(threshold: u32) -> RuleTree<'a> {
    condition(move |ctx: &HeroContext<'a>| ctx.health() <= threshold)
}

fn no_adjacent_enemies<'a>() -> RuleTree<'a> {
    condition(|ctx: &HeroContext<'a>| ctx.adjacent(Kin::Enemy).next().is_none())
}
