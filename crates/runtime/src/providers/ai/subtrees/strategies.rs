//! Layer 3: complete rule chains.
//!
//! A strategy is a selector over rules in priority order. Both strategies
//! end with a rule that always commits, so evaluating either one yields a
//! decision.

use arena_core::PolicyConfig;
use behavior_tree::builder::selector;

use super::{RuleTree, patterns, tactics};

/// The full twelve-rule policy: close combat, then one-step healing, then
/// long-range goals.
pub fn tactician<'a>(config: &PolicyConfig) -> RuleTree<'a> {
    selector(vec![
        tactics::close_combat(),
        tactics::sustain(&config.health),
        tactics::pursuit(&config.health),
    ])
}

/// A simpler chain that ignores the local-area scan.
///
/// 1. Surrounded by allies: toward the nearest team member
/// 2. Surrounded by enemies: toward the nearest enemy
/// 3. Wounded with a well next door: drink
/// 4. Full health, no adjacent enemy: toward a mine
/// 5. Wounded: toward the nearest well
/// 6. Otherwise: toward the nearest weaker enemy
pub fn adventurer<'a>(config: &PolicyConfig) -> RuleTree<'a> {
    let health = &config.health;
    selector(vec![
        patterns::regroup_when_crowded(),
        patterns::charge_when_encircled(),
        patterns::drink_when_beside_well(health.drink),
        patterns::roam_for_mines(health.full),
        patterns::retreat_when_hurt(health.drink),
        patterns::hunt_weaker(),
    ])
}
