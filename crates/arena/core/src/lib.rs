//! Deterministic decision primitives for an arena hero.
//!
//! `arena-core` owns the board model and every pure computation the decision
//! policy builds on: grid adjacency ([`grid`]), breadth-first goal search
//! ([`pathfinding`], [`goals`]), per-tile tactical signals ([`tactics`]), the
//! bounded local-area scan ([`scan`]) and the duel estimate ([`combat`]).
//! Nothing here holds state between calls; identical snapshots always produce
//! identical results.
pub mod action;
pub mod combat;
pub mod config;
pub mod error;
pub mod goals;
pub mod grid;
pub mod pathfinding;
pub mod scan;
pub mod state;
pub mod tactics;

pub use action::{Direction, Move};
pub use combat::is_winnable;
pub use config::{CombatConfig, HealthThresholds, PolicyConfig, Strategy, TacticsConfig};
pub use error::{ClassifierFault, SnapshotError};
pub use goals::{Goal, find_goal};
pub use grid::{in_bounds, neighbor, neighbors};
pub use pathfinding::{Fallible, PathMatch, TileClassifier, count_neighbours, find_nearest};
pub use scan::{AreaCell, AreaSurvey, LocalArea, LocalAreaScanner, ScanTarget};
pub use state::{
    Board, BoardBuilder, GameSnapshot, Hero, HeroId, Position, TeamId, Tile, TileKind, TileType,
};
pub use tactics::{TacticalEvaluation, distant_threat, estimate_aggression, evaluate};
