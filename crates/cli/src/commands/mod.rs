//! Command implementations.
//!
//! Each command is a separate module that implements its own CLI args and
//! execution logic.

mod area;
mod decide;

pub use area::Area;
pub use decide::Decide;
