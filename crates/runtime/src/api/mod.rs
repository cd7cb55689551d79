//! Public runtime API surface.
//!
//! Types a host adapter needs to ask for a move, independent of which
//! provider answers.

pub mod errors;
pub mod providers;

pub use errors::{Result, RuntimeError};
pub use providers::{MoveProvider, StayProvider};
