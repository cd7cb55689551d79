//! Minimal behavior tree for single-tick, turn-based decisions.
//!
//! Every tick completes immediately: a node either succeeds or fails, and
//! there is no `Running` state to resume on a later turn. Trees are cheap to
//! build and are typically assembled once per decision around a borrowed
//! context, which is why every node carries an explicit lifetime.
//!
//! - [`Behavior`]: core trait for all nodes
//! - [`Status`]: Success or Failure
//! - Composite nodes: [`Sequence`] (AND), [`Selector`] (ordered OR)
//! - Leaf and decorator nodes: [`Condition`], [`Inverter`]

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod status;

pub use behavior::{Behavior, Node};
pub use composite::{Selector, Sequence};
pub use decorator::{Condition, Inverter};
pub use status::Status;
