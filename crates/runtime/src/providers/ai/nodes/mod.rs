//! Policy-specific behavior tree nodes.
//!
//! - `conditions`: read the context and return Success or Failure
//! - `actions`: commit a move to the context

pub mod actions;
pub mod conditions;

pub use actions::*;
pub use conditions::*;
