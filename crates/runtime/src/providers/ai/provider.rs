//! Rule-chain move provider.

use arena_core::{GameSnapshot, Move, PolicyConfig};

use super::presets;
use super::types::Decision;
use crate::api::MoveProvider;
use crate::providers::ai::HeroContext;

/// Move provider running the configured strategy's rule chain.
///
/// Every call:
/// 1. Builds a [`HeroContext`], which surveys the hero's local area
/// 2. Builds the strategy's rule tree
/// 3. Ticks the tree once; the first rule that commits wins
/// 4. Falls back to Stay if no rule committed
///
/// Nothing is carried between calls.
#[derive(Clone, Debug, Default)]
pub struct PolicyProvider {
    config: PolicyConfig,
}

impl PolicyProvider {
    pub fn new(config: PolicyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Chooses a move and reports which rule chose it.
    pub fn decide(&self, snapshot: &GameSnapshot) -> Decision {
        let mut ctx = HeroContext::new(snapshot, &self.config);
        let tree = presets::for_config(&self.config);

        let status = tree.tick(&mut ctx);
        let hero = ctx.hero().id;

        let decision = match ctx.take_decision() {
            Some(decision) => decision,
            None => {
                tracing::warn!(%hero, ?status, "no rule committed a move, staying");
                Decision::idle()
            }
        };

        tracing::debug!(
            %hero,
            strategy = %self.config.strategy,
            rule = %decision.rule,
            mv = %decision.mv,
            "decision made"
        );

        decision
    }
}

impl MoveProvider for PolicyProvider {
    fn choose_move(&self, snapshot: &GameSnapshot) -> Move {
        self.decide(snapshot).mv
    }
}
