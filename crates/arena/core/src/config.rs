//! Tunable policy parameters.
//!
//! The numbers encode game-balance assumptions (hit damage, threat weights,
//! health thresholds). They are named here so a deployment can override them
//! from a config file instead of editing the rules.

/// Which rule chain drives the hero.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Strategy {
    /// Twelve-rule chain driven by the local-area scan.
    #[default]
    Tactician,
    /// Six-rule chain driven only by adjacency and path search.
    Adventurer,
}

/// Weights used when scoring a tile's neighbourhood.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TacticsConfig {
    /// Threat removed for each adjacent ally that has healed someone.
    pub support_relief: i32,
    /// Threat added by an enemy that will strike at full strength.
    pub exposed_threat: i32,
    /// Threat added by an enemy that already spent its turn.
    pub guarded_threat: i32,
    /// Value of `distant_threat` when an enemy is two steps away.
    pub distant_threat: i32,
    /// Enemies at or below this health die to one hit.
    pub finishing_health: u32,
    /// Health at which an adjacent enemy can be finished by the active hero.
    pub exact_kill_health: u32,
}

impl TacticsConfig {
    pub const DEFAULT_SUPPORT_RELIEF: i32 = 40;
    pub const DEFAULT_EXPOSED_THREAT: i32 = 30;
    pub const DEFAULT_GUARDED_THREAT: i32 = 20;
    pub const DEFAULT_DISTANT_THREAT: i32 = 20;
    pub const DEFAULT_FINISHING_HEALTH: u32 = 20;
    pub const DEFAULT_EXACT_KILL_HEALTH: u32 = 30;

    pub const fn new() -> Self {
        Self {
            support_relief: Self::DEFAULT_SUPPORT_RELIEF,
            exposed_threat: Self::DEFAULT_EXPOSED_THREAT,
            guarded_threat: Self::DEFAULT_GUARDED_THREAT,
            distant_threat: Self::DEFAULT_DISTANT_THREAT,
            finishing_health: Self::DEFAULT_FINISHING_HEALTH,
            exact_kill_health: Self::DEFAULT_EXACT_KILL_HEALTH,
        }
    }
}

impl Default for TacticsConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Assumed hit damage for the duel estimate.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Damage the active hero deals per hit.
    pub attack_damage: u32,
    /// Damage an enemy deals when it has already acted this round.
    pub engaged_damage: u32,
    /// Damage an enemy deals when it has not acted yet this round.
    pub fresh_damage: u32,
}

impl CombatConfig {
    pub const DEFAULT_ATTACK_DAMAGE: u32 = 30;
    pub const DEFAULT_ENGAGED_DAMAGE: u32 = 30;
    pub const DEFAULT_FRESH_DAMAGE: u32 = 20;

    pub const fn new() -> Self {
        Self {
            attack_damage: Self::DEFAULT_ATTACK_DAMAGE,
            engaged_damage: Self::DEFAULT_ENGAGED_DAMAGE,
            fresh_damage: Self::DEFAULT_FRESH_DAMAGE,
        }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Health levels that switch the policy between fighting and recovering.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HealthThresholds {
    pub full: u32,
    /// At or below this, step onto an adjacent well.
    pub drink: u32,
    /// At or below this, stop mining and head for a well.
    pub retreat: u32,
}

impl HealthThresholds {
    pub const DEFAULT_FULL: u32 = 100;
    pub const DEFAULT_DRINK: u32 = 60;
    pub const DEFAULT_RETREAT: u32 = 70;

    pub const fn new() -> Self {
        Self {
            full: Self::DEFAULT_FULL,
            drink: Self::DEFAULT_DRINK,
            retreat: Self::DEFAULT_RETREAT,
        }
    }
}

impl Default for HealthThresholds {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete configuration for one decision policy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PolicyConfig {
    pub strategy: Strategy,
    /// Depth of the local-area scan tree.
    pub scan_depth: u8,
    pub tactics: TacticsConfig,
    pub combat: CombatConfig,
    pub health: HealthThresholds,
}

impl PolicyConfig {
    pub const DEFAULT_SCAN_DEPTH: u8 = 3;

    pub const fn new() -> Self {
        Self {
            strategy: Strategy::Tactician,
            scan_depth: Self::DEFAULT_SCAN_DEPTH,
            tactics: TacticsConfig::new(),
            combat: CombatConfig::new(),
            health: HealthThresholds::new(),
        }
    }

    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config: PolicyConfig =
            serde_json::from_str(r#"{ "strategy": "adventurer", "combat": { "fresh_damage": 25 } }"#)
                .unwrap();
        assert_eq!(config.strategy, Strategy::Adventurer);
        assert_eq!(config.combat.fresh_damage, 25);
        assert_eq!(config.combat.attack_damage, CombatConfig::DEFAULT_ATTACK_DAMAGE);
        assert_eq!(config.scan_depth, PolicyConfig::DEFAULT_SCAN_DEPTH);
    }
}
