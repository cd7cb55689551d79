//! Strategy table: maps a configured [`Strategy`] to its rule chain.
//!
//! ```text
//! Strategy::Tactician  -> strategies::tactician()
//! Strategy::Adventurer -> strategies::adventurer()
//! ```

use arena_core::{PolicyConfig, Strategy};

use super::subtrees::{RuleTree, strategies};

/// Builds the rule chain selected by `config.strategy`.
pub fn for_config<'a>(config: &PolicyConfig) -> RuleTree<'a> {
    match config.strategy {
        Strategy::Tactician => strategies::tactician(config),
        Strategy::Adventurer => strategies::adventurer(config),
    }
}
