//! Data-driven inputs for the decision engine.
//!
//! This crate reads what the host and the operator hand to the engine:
//! - Game snapshots in the host's JSON format ([`formats`])
//! - Policy configuration files in TOML
//!
//! All loaders produce `arena-core` types; the wire DTOs never leave this
//! crate's API except for callers that want to build or inspect them.

#[cfg(feature = "serde")]
pub mod formats;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "serde")]
pub use formats::{ActiveHeroDto, BoardDto, FormatError, OwnerDto, SnapshotDto, TileDto};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, SnapshotLoader};
