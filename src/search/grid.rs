//! Letter grid, cells, directions and placements.
//!
//! ## Coordinates
//!
//! Cells are `(row, col)` with `(0, 0)` at the top left. A `Direction` is a
//! unit step in one of the eight compass directions; a `Placement` is a
//! start cell, a direction and a length.

use serde::{Deserialize, Serialize};

use crate::core::{ensure_uppercase, PuzzleError, PuzzleResult};

/// Grid cell, `(row, col)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Cell `steps` away along `direction`, if it stays inside a
    /// `size`x`size` grid.
    #[must_use]
    pub fn step(self, direction: Direction, steps: usize, size: usize) -> Option<Cell> {
        let (dr, dc) = direction.delta();
        let steps = isize::try_from(steps).ok()?;
        let row = self.row as isize + dr * steps;
        let col = self.col as isize + dc * steps;
        let in_range = |v: isize| v >= 0 && (v as usize) < size;
        (in_range(row) && in_range(col)).then(|| Cell::new(row as usize, col as usize))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the eight straight-line directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
    DownRight,
    DownLeft,
    UpRight,
    UpLeft,
}

impl Direction {
    /// All directions, in the order `Grid::locate` tries them.
    pub const ALL: [Direction; 8] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
        Direction::DownRight,
        Direction::DownLeft,
        Direction::UpRight,
        Direction::UpLeft,
    ];

    /// The two diagonals that read downward.
    pub const DOWN_DIAGONALS: [Direction; 2] = [Direction::DownRight, Direction::DownLeft];

    /// `(row delta, col delta)` of one step.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Right => (0, 1),
            Direction::Left => (0, -1),
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
            Direction::UpRight => (-1, 1),
            Direction::UpLeft => (-1, -1),
        }
    }

    /// Direction for a unit delta; `None` for `(0, 0)` or non-unit input.
    #[must_use]
    pub fn from_delta(dr: isize, dc: isize) -> Option<Direction> {
        Direction::ALL.into_iter().find(|d| d.delta() == (dr, dc))
    }

    #[must_use]
    pub fn is_diagonal(self) -> bool {
        let (dr, dc) = self.delta();
        dr != 0 && dc != 0
    }
}

/// Where a word sits in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub start: Cell,
    pub direction: Direction,
    pub len: usize,
}

impl Placement {
    #[must_use]
    pub fn new(start: Cell, direction: Direction, len: usize) -> Self {
        Self { start, direction, len }
    }

    /// Last cell of the placement, if inside a `size`x`size` grid.
    #[must_use]
    pub fn end(&self, size: usize) -> Option<Cell> {
        self.start.step(self.direction, self.len.checked_sub(1)?, size)
    }

    /// Cells covered, start to end. Empty if any cell falls outside.
    #[must_use]
    pub fn cells(&self, size: usize) -> Vec<Cell> {
        (0..self.len)
            .map(|i| self.start.step(self.direction, i, size))
            .collect::<Option<Vec<_>>>()
            .unwrap_or_default()
    }

    #[must_use]
    pub fn contains(&self, cell: Cell, size: usize) -> bool {
        self.cells(size).contains(&cell)
    }
}

/// Square grid of uppercase letters, fully populated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Build from `size * size` letters in row-major order.
    pub(crate) fn from_cells(size: usize, cells: Vec<char>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Build from row strings. Rows must be uppercase A-Z and form a square.
    ///
    /// ```
    /// use word_puzzles::search::{Cell, Grid};
    ///
    /// let grid = Grid::from_rows(&["CAT", "XYZ", "QRS"]).unwrap();
    /// assert_eq!(grid.get(Cell::new(0, 2)), Some('T'));
    /// ```
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> PuzzleResult<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(PuzzleError::InvalidConfig("grid has no rows".into()));
        }
        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            ensure_uppercase(row)?;
            let width = row.chars().count();
            if width != size {
                return Err(PuzzleError::InvalidConfig(format!(
                    "row {r} has {width} letters, grid is {size}x{size}"
                )));
            }
            cells.extend(row.chars());
        }
        Ok(Self { size, cells })
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Letter at `cell`, `None` outside the grid.
    #[must_use]
    pub fn get(&self, cell: Cell) -> Option<char> {
        self.contains(cell).then(|| self.cells[cell.row * self.size + cell.col])
    }

    /// True if `cell` is inside the grid.
    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.size && cell.col < self.size
    }

    /// Rows as strings, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.chunks(self.size).map(|row| row.iter().collect())
    }

    /// Letters along a placement, or `None` if it leaves the grid.
    #[must_use]
    pub fn read(&self, placement: &Placement) -> Option<String> {
        let cells = placement.cells(self.size);
        if cells.len() != placement.len {
            return None;
        }
        cells.into_iter().map(|c| self.get(c)).collect()
    }

    /// Re-derive where `word` sits by scanning the grid.
    ///
    /// Every cell holding the first letter is tried in row-major order, and
    /// from each the directions in `Direction::ALL` order; the first full
    /// match wins.
    #[must_use]
    pub fn locate(&self, word: &str) -> Option<Placement> {
        let first = word.chars().next()?;
        let len = word.chars().count();

        for row in 0..self.size {
            for col in 0..self.size {
                let start = Cell::new(row, col);
                if self.get(start) != Some(first) {
                    continue;
                }
                for direction in Direction::ALL {
                    let placement = Placement::new(start, direction, len);
                    if self.read(&placement).as_deref() == Some(word) {
                        return Some(placement);
                    }
                }
            }
        }
        None
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows(&["CATX", "QOZY", "PRGB", "DOGS"]).unwrap()
    }

    #[test]
    fn test_from_rows_rejects_bad_shapes() {
        assert!(Grid::from_rows::<&str>(&[]).is_err());
        assert!(Grid::from_rows(&["AB", "C"]).is_err());
        assert!(Grid::from_rows(&["AB", "c1"]).is_err());
    }

    #[test]
    fn test_get_and_contains() {
        let grid = sample();
        assert_eq!(grid.size(), 4);
        assert_eq!(grid.get(Cell::new(3, 3)), Some('S'));
        assert_eq!(grid.get(Cell::new(4, 0)), None);
    }

    #[test]
    fn test_step_bounds() {
        assert_eq!(Cell::new(0, 0).step(Direction::DownRight, 3, 4), Some(Cell::new(3, 3)));
        assert_eq!(Cell::new(0, 0).step(Direction::Up, 1, 4), None);
        assert_eq!(Cell::new(0, 3).step(Direction::Right, 1, 4), None);
        assert_eq!(Cell::new(2, 2).step(Direction::Left, 0, 4), Some(Cell::new(2, 2)));
    }

    #[test]
    fn test_direction_from_delta() {
        for d in Direction::ALL {
            let (dr, dc) = d.delta();
            assert_eq!(Direction::from_delta(dr, dc), Some(d));
        }
        assert_eq!(Direction::from_delta(0, 0), None);
        assert_eq!(Direction::from_delta(2, 0), None);
        assert!(Direction::UpLeft.is_diagonal());
        assert!(!Direction::Down.is_diagonal());
    }

    #[test]
    fn test_placement_cells() {
        let p = Placement::new(Cell::new(0, 3), Direction::DownLeft, 4);
        assert_eq!(p.end(4), Some(Cell::new(3, 0)));
        assert_eq!(p.cells(4).len(), 4);
        assert!(p.contains(Cell::new(1, 2), 4));

        let off = Placement::new(Cell::new(0, 3), Direction::Right, 2);
        assert!(off.cells(4).is_empty());
        assert_eq!(off.end(4), None);
    }

    #[test]
    fn test_locate_every_direction() {
        let grid = sample();
        assert_eq!(grid.locate("CAT"), Some(Placement::new(Cell::new(0, 0), Direction::Right, 3)));
        assert_eq!(grid.locate("SGOD"), Some(Placement::new(Cell::new(3, 3), Direction::Left, 4)));
        assert_eq!(
            grid.locate("COG"),
            Some(Placement::new(Cell::new(0, 0), Direction::DownRight, 3))
        );
        assert_eq!(
            grid.locate("XZRD"),
            Some(Placement::new(Cell::new(0, 3), Direction::DownLeft, 4))
        );
        assert_eq!(grid.locate("BYX"), Some(Placement::new(Cell::new(2, 3), Direction::Up, 3)));
        assert_eq!(grid.locate("MOUSE"), None);
        assert_eq!(grid.locate(""), None);
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_rows(&["AB", "CD"]).unwrap();
        assert_eq!(grid.to_string(), "AB\nCD\n");
    }
}
