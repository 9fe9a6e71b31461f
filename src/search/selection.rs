//! Player line selections and matching them against targets.
//!
//! A selection is a pair of endpoints. It is valid only when the line is
//! horizontal, vertical or an exact diagonal (`|drow| == |dcol|`). The run
//! is read start to end, so matching checks both the run and its reverse.

use tracing::debug;

use super::grid::{Cell, Direction, Grid, Placement};
use super::puzzle::FoundWords;
use super::target::TargetWord;
use crate::core::{reversed, PuzzleError, PuzzleResult};

/// Endpoints of a player-drawn line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Selection {
    pub start: Cell,
    pub end: Cell,
}

impl Selection {
    #[must_use]
    pub const fn new(start: Cell, end: Cell) -> Self {
        Self { start, end }
    }

    fn deltas(&self) -> (isize, isize) {
        (
            self.end.row as isize - self.start.row as isize,
            self.end.col as isize - self.start.col as isize,
        )
    }

    /// True for horizontal, vertical, exact diagonal and single-cell lines.
    #[must_use]
    pub fn is_straight(&self) -> bool {
        let (dr, dc) = self.deltas();
        dr == 0 || dc == 0 || dr.abs() == dc.abs()
    }

    /// Number of cells on the line, `None` if it is not straight.
    #[must_use]
    pub fn len(&self) -> Option<usize> {
        let (dr, dc) = self.deltas();
        self.is_straight().then(|| dr.unsigned_abs().max(dc.unsigned_abs()) + 1)
    }

    /// Unit step from start to end; `None` for a single cell or a bent line.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        if !self.is_straight() {
            return None;
        }
        let (dr, dc) = self.deltas();
        Direction::from_delta(dr.signum(), dc.signum())
    }

    /// The line as a placement. A single cell is recorded as a one-letter
    /// run to the right.
    #[must_use]
    pub fn placement(&self) -> Option<Placement> {
        let len = self.len()?;
        let direction = self.direction().unwrap_or(Direction::Right);
        Some(Placement::new(self.start, direction, len))
    }

    /// Cells from start to end inclusive. Empty if the line is not straight.
    #[must_use]
    pub fn cells(&self) -> Vec<Cell> {
        let Some(len) = self.len() else {
            return Vec::new();
        };
        let (dr, dc) = self.deltas();
        let (sr, sc) = (dr.signum(), dc.signum());
        (0..len as isize)
            .map(|i| {
                Cell::new(
                    (self.start.row as isize + sr * i) as usize,
                    (self.start.col as isize + sc * i) as usize,
                )
            })
            .collect()
    }

    /// Highlight query: is `cell` on this line?
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells().contains(&cell)
    }
}

/// Letters from `start` to `end` inclusive, in traversal order.
///
/// ```
/// use word_puzzles::search::{resolve_selection, Cell, Grid};
///
/// let grid = Grid::from_rows(&["CAT", "XYZ", "QRS"]).unwrap();
/// assert_eq!(resolve_selection(&grid, Cell::new(0, 2), Cell::new(0, 0)).unwrap(), "TAC");
/// assert!(resolve_selection(&grid, Cell::new(0, 0), Cell::new(1, 2)).is_err());
/// ```
pub fn resolve_selection(grid: &Grid, start: Cell, end: Cell) -> PuzzleResult<String> {
    for cell in [start, end] {
        if !grid.contains(cell) {
            return Err(PuzzleError::OutOfBounds { cell, size: grid.size() });
        }
    }
    let selection = Selection::new(start, end);
    if !selection.is_straight() {
        return Err(PuzzleError::NotStraightLine { start, end });
    }
    selection
        .cells()
        .into_iter()
        .map(|cell| grid.get(cell).ok_or(PuzzleError::OutOfBounds { cell, size: grid.size() }))
        .collect()
}

/// Target whose id equals `run` or its reverse and is not yet found.
pub fn match_target<'a>(
    run: &str,
    targets: &'a [TargetWord],
    found: &FoundWords,
) -> Option<&'a TargetWord> {
    let backwards = reversed(run);
    let matched = targets
        .iter()
        .filter(|t| !found.contains(&t.id))
        .find(|t| t.id == run || t.id == backwards);
    if let Some(target) = matched {
        debug!(word = %target.id, "selection matched target");
    }
    matched
}

/// Pointer-down / move / up state carried between input events.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionGesture {
    active: Option<Selection>,
}

impl SelectionGesture {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer down on `cell`.
    pub fn begin(&mut self, cell: Cell) {
        self.active = Some(Selection::new(cell, cell));
    }

    /// Pointer moved onto `cell`. Ignored when no gesture is active.
    pub fn extend(&mut self, cell: Cell) {
        if let Some(selection) = &mut self.active {
            selection.end = cell;
        }
    }

    /// Pointer up: end the gesture and hand back the line drawn.
    pub fn finish(&mut self) -> Option<Selection> {
        self.active.take()
    }

    pub fn cancel(&mut self) {
        self.active = None;
    }

    #[must_use]
    pub fn current(&self) -> Option<Selection> {
        self.active
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Is `cell` highlighted by the gesture in progress?
    #[must_use]
    pub fn highlights(&self, cell: Cell) -> bool {
        self.active.is_some_and(|s| s.contains(cell))
    }
}
