//! Reusable rule subtrees.
//!
//! Subtrees are organized into three layers:
//!
//! - **Layer 1 (Patterns)**: one rule each, conditions followed by an action
//! - **Layer 2 (Tactics)**: ordered groups of related rules
//! - **Layer 3 (Strategies)**: complete rule chains
//!
//! ```text
//! tactician()
//!     ├─ close_combat()
//!     │   ├─ finish_enemies()
//!     │   ├─ support_encircled_ally()
//!     │   └─ ...
//!     ├─ sustain()
//!     └─ pursuit()
//! ```
//!
//! Trees borrow nothing from the context, but their type is tied to the
//! context lifetime, so a fresh tree is built for every decision.

pub mod patterns;
pub mod strategies;
pub mod tactics;

use behavior_tree::Node;

use super::context::HeroContext;

/// A rule tree ticking over one decision's context.
pub type RuleTree<'a> = Node<'a, HeroContext<'a>>;
