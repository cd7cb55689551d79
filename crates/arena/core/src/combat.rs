//! One-on-one duel estimate.

use crate::config::CombatConfig;

/// Returns `true` if the active hero would finish a duel against an adjacent
/// enemy no later than the enemy finishes it.
///
/// The hero deals `attack_damage` per turn. The enemy is assumed to hit for
/// `engaged_damage` once it has acted this round and `fresh_damage` otherwise.
pub fn is_winnable(
    self_health: u32,
    enemy_health: u32,
    enemy_has_acted: bool,
    config: &CombatConfig,
) -> bool {
    let enemy_damage = if enemy_has_acted {
        config.engaged_damage
    } else {
        config.fresh_damage
    };

    let turns_to_kill = enemy_health.div_ceil(config.attack_damage.max(1));
    let turns_to_die = self_health.div_ceil(enemy_damage.max(1));

    turns_to_kill <= turns_to_die
}
