//! Layer 2: ordered groups of related rules.
//!
//! Each group is a selector, so inside a group the first rule that commits a
//! move wins, and a group that fails hands over to the next one.

use arena_core::HealthThresholds;
use behavior_tree::builder::selector;

use super::{RuleTree, patterns};

/// Fights that can be settled from where the hero stands.
///
/// 1. Best kill next to or under the hero
/// 2. Surrounded by allies: weakest ally
/// 3. Surrounded by enemies: weakest enemy
/// 4. Lone winnable duel
/// 5. Weakest adjacent enemy no healthier than the hero
pub fn close_combat<'a>() -> RuleTree<'a> {
    selector(vec![
        patterns::finish_enemies(),
        patterns::support_encircled_ally(),
        patterns::break_encirclement(),
        patterns::duel_when_winnable(),
        patterns::strike_weaker_neighbour(),
    ])
}

/// Healing that only needs one step.
pub fn sustain<'a>(health: &HealthThresholds) -> RuleTree<'a> {
    selector(vec![
        patterns::drink_when_wounded(health.drink),
        patterns::heal_wounded_ally(),
    ])
}

/// Longer-range goals, chosen by health. The last rule always commits.
pub fn pursuit<'a>(health: &HealthThresholds) -> RuleTree<'a> {
    selector(vec![
        patterns::claim_mine_when_healthy(health.retreat),
        patterns::retreat_when_hurt(health.retreat),
        patterns::recover_when_no_prey(health.full),
        patterns::hunt_when_no_prey(health.full),
        patterns::hunt_weaker(),
    ])
}
