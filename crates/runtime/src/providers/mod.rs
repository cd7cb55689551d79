//! Move provider implementations.

pub mod ai;
