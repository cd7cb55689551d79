//! Error types surfaced by the runtime API.
use arena_core::SnapshotError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// The host handed over a board that breaks the snapshot invariants.
    #[error("malformed snapshot: {0}")]
    MalformedSnapshot(#[from] SnapshotError),
}
