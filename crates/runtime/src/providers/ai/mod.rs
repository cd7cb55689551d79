//! Rule-chain decision policy for the active hero.
//!
//! Every turn the policy:
//!
//! 1. **Surveys** the hero's surroundings into a [`HeroContext`]
//! 2. **Builds** the configured strategy's rule tree
//! 3. **Evaluates** rules in priority order; the first one whose conditions
//!    hold commits a move
//!
//! # Core Components
//!
//! - [`PolicyProvider`]: provider implementing [`crate::MoveProvider`]
//! - [`HeroContext`]: per-decision blackboard with cached goal searches
//! - [`nodes`]: condition and action nodes
//! - [`subtrees`]: rules, rule groups and complete strategies
//! - [`presets`]: strategy table

pub mod context;
pub mod nodes;
pub mod presets;
pub mod provider;
pub mod subtrees;
pub mod types;

pub use context::HeroContext;
pub use provider::PolicyProvider;
pub use types::{Decision, HealthCap, Kin, Rule};
