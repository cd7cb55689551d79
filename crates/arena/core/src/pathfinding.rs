//! Breadth-first search for the nearest tile matching a classifier.
//!
//! The search expands the four-connected grid in [`Direction::ALL`] order
//! from a FIFO frontier, so the first match is always at the smallest hop
//! count and ties go to the direction scanned first where the paths branch.
//! Only Unoccupied tiles are walked through; the goal itself may be any tile.

use std::collections::VecDeque;

use crate::action::Direction;
use crate::error::ClassifierFault;
use crate::grid;
use crate::state::{Board, Position, Tile};

/// Decides whether a tile is what the search is looking for.
///
/// Any `Fn(&Tile) -> bool` is a classifier. Use [`Fallible`] for
/// classifiers that can fail; a fault counts as "not a match".
pub trait TileClassifier {
    fn classify(&self, tile: &Tile) -> Result<bool, ClassifierFault>;
}

impl<F> TileClassifier for F
where
    F: Fn(&Tile) -> bool,
{
    #[inline]
    fn classify(&self, tile: &Tile) -> Result<bool, ClassifierFault> {
        Ok(self(tile))
    }
}

/// Adapts `Fn(&Tile) -> Result<bool, ClassifierFault>` into a classifier.
pub struct Fallible<F>(pub F);

impl<F> TileClassifier for Fallible<F>
where
    F: Fn(&Tile) -> Result<bool, ClassifierFault>,
{
    #[inline]
    fn classify(&self, tile: &Tile) -> Result<bool, ClassifierFault> {
        (self.0)(tile)
    }
}

/// Runs the classifier, folding a fault into "no match".
fn matches<C: TileClassifier + ?Sized>(classifier: &C, tile: &Tile) -> bool {
    match classifier.classify(tile) {
        Ok(hit) => hit,
        Err(fault) => {
            tracing::trace!(position = %tile.position, %fault, "classifier fault treated as no match");
            false
        }
    }
}

/// Nearest matching tile and how to get there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathMatch {
    /// Where the matching tile is.
    pub position: Position,
    /// First step to take from the start.
    pub direction: Direction,
    /// Hop count from the start to the match.
    pub distance: u32,
}

/// Frontier entry. Nodes live in an append-only arena and point at their
/// parent by index; the start node has neither a step nor a parent.
struct SearchNode {
    position: Position,
    step: Option<Direction>,
    parent: Option<usize>,
}

/// Finds the nearest tile accepted by `classifier`, walking only through
/// Unoccupied tiles.
///
/// Returns `None` when the reachable region holds no match.
pub fn find_nearest<C>(board: &Board, start: Position, classifier: &C) -> Option<PathMatch>
where
    C: TileClassifier + ?Sized,
{
    let start_slot = board.slot(start)?;
    let mut visited = vec![false; board.area()];
    visited[start_slot] = true;

    let mut nodes = vec![SearchNode {
        position: start,
        step: None,
        parent: None,
    }];
    let mut frontier = VecDeque::from([0usize]);

    while let Some(current) = frontier.pop_front() {
        let position = nodes[current].position;

        for (direction, next) in grid::neighbors(board, position) {
            let Some(slot) = board.slot(next.position) else {
                continue;
            };
            if visited[slot] {
                continue;
            }

            if matches(classifier, next) {
                let (first_step, distance) = trace_back(&nodes, current, direction);
                return Some(PathMatch {
                    position: next.position,
                    direction: first_step,
                    distance,
                });
            }

            if next.is_unoccupied() {
                visited[slot] = true;
                nodes.push(SearchNode {
                    position: next.position,
                    step: Some(direction),
                    parent: Some(current),
                });
                frontier.push_back(nodes.len() - 1);
            }
        }
    }

    tracing::trace!(%start, explored = nodes.len(), "no matching tile reachable");
    None
}

/// Walks parent links from `index` to the start, returning the first step
/// taken and the total hop count including `last_step`.
fn trace_back(nodes: &[SearchNode], mut index: usize, last_step: Direction) -> (Direction, u32) {
    let mut first_step = last_step;
    let mut distance = 1;
    while let (Some(step), Some(parent)) = (nodes[index].step, nodes[index].parent) {
        first_step = step;
        distance += 1;
        index = parent;
    }
    (first_step, distance)
}

/// Counts the neighbours of `position` accepted by `classifier`.
pub fn count_neighbours<C>(board: &Board, position: Position, classifier: &C) -> usize
where
    C: TileClassifier + ?Sized,
{
    grid::neighbors(board, position)
        .filter(|(_, tile)| matches(classifier, tile))
        .count()
}
