//! Word-search grid generation.
//!
//! ## Algorithm
//!
//! 1. Sort targets longest first (stable, so equal lengths keep input order).
//! 2. For each word, up to `max_placement_tries` times: draw a direction and
//!    a start cell, reject if the end leaves the grid, reject if any cell
//!    holds a different letter, otherwise write the word.
//! 3. Words that run out of tries are skipped and reported.
//! 4. Fill every empty cell with a random letter from the alphabet, drawn
//!    from a separate `"fill"` stream of the caller's RNG.

use tracing::{debug, warn};

use super::grid::{Cell, Direction, Grid, Placement};
use super::target::{validate_targets, TargetWord};
use crate::core::{PuzzleError, PuzzleResult, PuzzleRng, WordSearchConfig};

/// Output of `generate`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Generated {
    /// Fully populated grid.
    pub grid: Grid,
    /// Targets that were placed, in input order. Only these are playable.
    pub placed: Vec<TargetWord>,
    /// Placement of each entry in `placed`, same order.
    pub placements: Vec<Placement>,
    /// Ids of targets that exhausted their placement budget.
    pub skipped: Vec<String>,
}

impl Generated {
    /// Placement recorded for `id`.
    #[must_use]
    pub fn placement_of(&self, id: &str) -> Option<Placement> {
        self.placed
            .iter()
            .position(|t| t.id == id)
            .and_then(|i| self.placements.get(i).copied())
    }
}

/// Grid under construction; `None` marks an empty cell.
struct Canvas {
    size: usize,
    cells: Vec<Option<char>>,
}

impl Canvas {
    fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    fn index(&self, cell: Cell) -> usize {
        cell.row * self.size + cell.col
    }

    /// Cells for `word` at `placement` if every one is empty or already
    /// holds the same letter.
    fn fits(&self, word: &[char], placement: &Placement) -> Option<Vec<Cell>> {
        let cells = placement.cells(self.size);
        if cells.len() != word.len() {
            return None;
        }
        let clean = cells
            .iter()
            .zip(word)
            .all(|(&cell, &ch)| self.cells[self.index(cell)].map_or(true, |c| c == ch));
        clean.then_some(cells)
    }

    fn write(&mut self, word: &[char], cells: &[Cell]) {
        for (&cell, &ch) in cells.iter().zip(word) {
            let i = self.index(cell);
            self.cells[i] = Some(ch);
        }
    }

    fn fill(self, alphabet: &[char], rng: &mut PuzzleRng) -> Grid {
        let cells = self
            .cells
            .into_iter()
            .map(|cell| cell.unwrap_or_else(|| alphabet[rng.gen_index(alphabet.len())]))
            .collect();
        Grid::from_cells(self.size, cells)
    }
}

fn pick_direction(biased: bool, probability: f64, rng: &mut PuzzleRng) -> Direction {
    let pool: &[Direction] = if biased && rng.gen_bool(probability) {
        &Direction::DOWN_DIAGONALS
    } else {
        &Direction::ALL
    };
    rng.choose(pool).copied().unwrap_or(Direction::Right)
}

/// Indices of `targets` in placement order: longest first, ties in input
/// order.
pub(crate) fn placement_order(targets: &[TargetWord]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..targets.len()).collect();
    order.sort_by_key(|&i| std::cmp::Reverse(targets[i].len()));
    order
}

fn try_place(
    canvas: &mut Canvas,
    word: &[char],
    config: &WordSearchConfig,
    biased: bool,
    rng: &mut PuzzleRng,
) -> Option<Placement> {
    let probability = config.diagonal_bias.as_ref().map_or(0.0, |b| b.probability);

    for _ in 0..config.max_placement_tries {
        let direction = pick_direction(biased, probability, rng);
        let start = Cell::new(rng.gen_index(canvas.size), rng.gen_index(canvas.size));
        let placement = Placement::new(start, direction, word.len());

        if let Some(cells) = canvas.fits(word, &placement) {
            canvas.write(word, &cells);
            return Some(placement);
        }
    }
    None
}

/// Generate a grid hiding `targets`.
///
/// Fails only on bad input (invalid config, duplicate or oversized ids, a
/// diagonal bias naming an unknown word). A word that cannot be placed is
/// listed in `Generated::skipped` and left out of `Generated::placed`.
///
/// ```
/// use word_puzzles::core::{PuzzleRng, WordSearchConfig};
/// use word_puzzles::search::{generate, TargetWord};
///
/// let targets = vec![TargetWord::new("CAT", "Cat", "red")];
/// let config = WordSearchConfig::default().with_grid_size(6);
/// let generated = generate(&targets, &config, &mut PuzzleRng::new(1)).unwrap();
/// assert_eq!(generated.grid.size(), 6);
/// assert!(generated.grid.locate("CAT").is_some());
/// ```
pub fn generate(
    targets: &[TargetWord],
    config: &WordSearchConfig,
    rng: &mut PuzzleRng,
) -> PuzzleResult<Generated> {
    config.validate()?;
    validate_targets(targets, config.grid_size)?;
    if let Some(bias) = &config.diagonal_bias {
        if !targets.iter().any(|t| t.id == bias.word) {
            return Err(PuzzleError::UnknownTarget(bias.word.clone()));
        }
    }

    let order = placement_order(targets);
    let mut canvas = Canvas::new(config.grid_size);
    let mut found: Vec<Option<Placement>> = vec![None; targets.len()];

    for i in order {
        let target = &targets[i];
        let word: Vec<char> = target.id.chars().collect();
        let biased = config.diagonal_bias.as_ref().is_some_and(|b| b.word == target.id);

        match try_place(&mut canvas, &word, config, biased, rng) {
            Some(placement) => {
                debug!(
                    word = %target.id,
                    start = %placement.start,
                    direction = ?placement.direction,
                    "placed word"
                );
                found[i] = Some(placement);
            }
            None => {
                warn!(
                    word = %target.id,
                    tries = config.max_placement_tries,
                    "could not place word"
                );
            }
        }
    }

    let alphabet: Vec<char> = config.alphabet.chars().collect();
    let mut fill_rng = rng.for_context("fill");
    let grid = canvas.fill(&alphabet, &mut fill_rng);

    let mut placed = Vec::new();
    let mut placements = Vec::new();
    let mut skipped = Vec::new();
    for (target, placement) in targets.iter().zip(found) {
        match placement {
            Some(p) => {
                placed.push(target.clone());
                placements.push(p);
            }
            None => skipped.push(target.id.clone()),
        }
    }

    Ok(Generated {
        grid,
        placed,
        placements,
        skipped,
    })
}
