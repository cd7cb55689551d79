//! Bounded reconnaissance around the active hero.
//!
//! [`LocalAreaScanner::scan`] builds a small tree: one [`AreaCell`] per
//! direction, each walkable cell expanding into its own four cells until the
//! depth runs out. The only loop guard is the tile the scan just came from,
//! so distant cells can appear more than once along different branches.
//! Only the four root cells carry a [`TacticalEvaluation`]; deeper cells
//! record what is there and nothing more.

use crate::action::Direction;
use crate::config::{PolicyConfig, TacticsConfig};
use crate::grid;
use crate::state::{Board, GameSnapshot, Hero, Position, TileType};
use crate::tactics::{self, TacticalEvaluation};

/// One branch slot of the scan tree.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaCell {
    pub tile_type: TileType,
    /// `None` when the slot is off the board or is the tile the scan came from.
    pub position: Option<Position>,
    pub children: Option<Box<LocalArea>>,
    /// Set on walkable root cells only.
    pub evaluation: Option<TacticalEvaluation>,
}

impl AreaCell {
    fn blocked() -> Self {
        Self {
            tile_type: TileType::Impassable,
            position: None,
            children: None,
            evaluation: None,
        }
    }

    #[inline]
    pub fn is_impassable(&self) -> bool {
        self.tile_type == TileType::Impassable
    }
}

/// The four cells around a scan centre, indexed by [`Direction`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LocalArea {
    cells: [AreaCell; 4],
}

impl LocalArea {
    #[inline]
    pub fn cell(&self, direction: Direction) -> &AreaCell {
        &self.cells[direction.index()]
    }

    /// Immediate cells in [`Direction::ALL`] order.
    pub fn cells(&self) -> impl DoubleEndedIterator<Item = (Direction, &AreaCell)> {
        Direction::ALL.into_iter().zip(self.cells.iter())
    }

    /// Pre-order walk of the whole tree. Each cell is paired with the
    /// direction of the root branch it hangs under.
    pub fn walk(&self) -> Walk<'_> {
        let mut stack = Vec::with_capacity(16);
        for (direction, cell) in self.cells().rev() {
            stack.push((direction, cell));
        }
        Walk { stack }
    }
}

/// Iterator returned by [`LocalArea::walk`].
pub struct Walk<'a> {
    stack: Vec<(Direction, &'a AreaCell)>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = (Direction, &'a AreaCell);

    fn next(&mut self) -> Option<Self::Item> {
        let (root, cell) = self.stack.pop()?;
        if let Some(children) = &cell.children {
            for child in children.cells.iter().rev() {
                self.stack.push((root, child));
            }
        }
        Some((root, cell))
    }
}

/// Where a tactical candidate sits relative to the active hero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScanTarget {
    /// A cell under the given root branch.
    Branch(Direction),
    /// The hero's own tile.
    Own,
}

/// Builds [`LocalArea`] trees for one hero on one board.
#[derive(Clone, Copy, Debug)]
pub struct LocalAreaScanner<'a> {
    board: &'a Board,
    hero: &'a Hero,
    tactics: &'a TacticsConfig,
}

impl<'a> LocalAreaScanner<'a> {
    pub fn new(board: &'a Board, hero: &'a Hero, tactics: &'a TacticsConfig) -> Self {
        Self {
            board,
            hero,
            tactics,
        }
    }

    /// Scans the four cells around `center`, recursing while `depth > 1`.
    ///
    /// `came_from` is reported as Impassable so the tree never steps straight
    /// back. HealthWell and Impassable tiles are leaves. The returned cells
    /// are evaluated; their descendants are not.
    pub fn scan(&self, center: Position, depth: u8, came_from: Option<Position>) -> LocalArea {
        self.layer(center, depth, came_from, true)
    }

    /// Surveys the active hero's surroundings at `config.scan_depth`.
    pub fn survey(snapshot: &GameSnapshot, config: &PolicyConfig) -> AreaSurvey {
        let board = snapshot.board();
        let hero = snapshot.hero();
        let scanner = LocalAreaScanner::new(board, hero, &config.tactics);

        let area = scanner.scan(snapshot.hero_position(), config.scan_depth, None);
        let own = tactics::evaluate(board, snapshot.hero_tile(), hero, &config.tactics);

        tracing::trace!(
            hero = %hero.id,
            depth = config.scan_depth,
            threat = own.threat,
            kills = own.kills,
            "surveyed local area"
        );

        AreaSurvey { area, own }
    }

    fn layer(
        &self,
        center: Position,
        depth: u8,
        came_from: Option<Position>,
        evaluate: bool,
    ) -> LocalArea {
        LocalArea {
            cells: Direction::ALL
                .map(|direction| self.cell(center, direction, depth, came_from, evaluate)),
        }
    }

    fn cell(
        &self,
        center: Position,
        direction: Direction,
        depth: u8,
        came_from: Option<Position>,
        evaluate: bool,
    ) -> AreaCell {
        let Some(tile) = grid::neighbor(self.board, center, direction) else {
            return AreaCell::blocked();
        };
        if came_from == Some(tile.position) {
            return AreaCell::blocked();
        }

        let tile_type = tile.tile_type();
        if tile_type == TileType::Impassable {
            return AreaCell {
                position: Some(tile.position),
                ..AreaCell::blocked()
            };
        }

        let children = (depth > 1 && tile_type != TileType::HealthWell)
            .then(|| Box::new(self.layer(tile.position, depth - 1, Some(center), false)));

        AreaCell {
            tile_type,
            position: Some(tile.position),
            children,
            evaluation: evaluate
                .then(|| tactics::evaluate(self.board, tile, self.hero, self.tactics)),
        }
    }
}

/// Scan tree around the active hero plus the evaluation of its own tile.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AreaSurvey {
    pub area: LocalArea,
    pub own: TacticalEvaluation,
}

impl AreaSurvey {
    /// Evaluated root cells in [`Direction::ALL`] order, own tile last.
    pub fn candidates(&self) -> impl Iterator<Item = (ScanTarget, &TacticalEvaluation)> {
        self.area
            .cells()
            .filter_map(|(root, cell)| {
                cell.evaluation
                    .as_ref()
                    .map(|evaluation| (ScanTarget::Branch(root), evaluation))
            })
            .chain(std::iter::once((ScanTarget::Own, &self.own)))
    }
}
