//! Turn-by-turn decision making for an arena hero.
//!
//! The runtime turns an [`arena_core::GameSnapshot`] into exactly one
//! [`arena_core::Move`]. Consumers hold a [`MoveProvider`]; the policy
//! implementation is [`PolicyProvider`], which runs one of the rule chains in
//! [`providers::ai`] over a fresh [`HeroContext`] every turn.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the provider trait and error types
//! - [`providers`] hosts provider implementations
pub mod api;
pub mod providers;

pub use api::{MoveProvider, Result, RuntimeError, StayProvider};
pub use providers::ai::{Decision, HeroContext, Kin, PolicyProvider, Rule};
