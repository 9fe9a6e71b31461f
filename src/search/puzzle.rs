//! A playable word-search instance.
//!
//! `WordSearch` keeps everything one puzzle needs between gestures: the
//! grid, the targets that were actually placed (only these are playable),
//! their placements, the found set and where each find was drawn. Words
//! skipped during generation are kept aside so the puzzle can never require an unplaceable word.

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, info};

use super::generator::{generate, Generated};
use super::grid::{Cell, Grid, Placement};
use super::selection::{match_target, resolve_selection, Selection};
use super::target::{validate_targets, TargetWord};
use crate::core::{PuzzleError, PuzzleResult, PuzzleRng, WordSearchConfig};

/// Ids of found words, in the order they were found. Only grows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FoundWords {
    order: Vec<String>,
    set: FxHashSet<String>,
}

impl FoundWords {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id`. Returns false if it was already found.
    pub fn insert(&mut self, id: &str) -> bool {
        if !self.set.insert(id.to_string()) {
            return false;
        }
        self.order.push(id.to_string());
        true
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.set.contains(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Found ids, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}

/// Word-search session state.
#[derive(Clone, Debug)]
pub struct WordSearch {
    config: WordSearchConfig,
    all_targets: Vec<TargetWord>,
    grid: Grid,
    targets: Vec<TargetWord>,
    placements: FxHashMap<String, Placement>,
    skipped: Vec<String>,
    found: FoundWords,
    /// Line the player drew for each find. The same word can appear more
    /// than once in the grid, so this may differ from `placements`.
    found_at: FxHashMap<String, Placement>,
}

impl WordSearch {
    /// Generate a fresh puzzle.
    pub fn new(
        targets: Vec<TargetWord>,
        config: WordSearchConfig,
        rng: &mut PuzzleRng,
    ) -> PuzzleResult<Self> {
        let generated = generate(&targets, &config, rng)?;
        Ok(Self::from_generated(targets, config, generated))
    }

    /// Wrap an existing grid. Placements are re-derived by scanning it;
    /// targets that cannot be located are treated as skipped.
    pub fn from_grid(grid: Grid, targets: Vec<TargetWord>) -> PuzzleResult<Self> {
        validate_targets(&targets, grid.size())?;
        let config = WordSearchConfig::default().with_grid_size(grid.size());

        let mut generated = Generated {
            grid,
            placed: Vec::new(),
            placements: Vec::new(),
            skipped: Vec::new(),
        };
        for target in &targets {
            match generated.grid.locate(&target.id) {
                Some(placement) => {
                    generated.placed.push(target.clone());
                    generated.placements.push(placement);
                }
                None => generated.skipped.push(target.id.clone()),
            }
        }
        Ok(Self::from_generated(targets, config, generated))
    }

    fn from_generated(
        all_targets: Vec<TargetWord>,
        config: WordSearchConfig,
        generated: Generated,
    ) -> Self {
        let placements = generated
            .placed
            .iter()
            .map(|t| t.id.clone())
            .zip(generated.placements)
            .collect();
        Self {
            config,
            all_targets,
            grid: generated.grid,
            targets: generated.placed,
            placements,
            skipped: generated.skipped,
            found: FoundWords::new(),
            found_at: FxHashMap::default(),
        }
    }

    /// Throw away the current grid and progress and generate again.
    pub fn regenerate(&mut self, rng: &mut PuzzleRng) -> PuzzleResult<()> {
        let mut stream = rng.fork();
        let generated = generate(&self.all_targets, &self.config, &mut stream)?;
        let all_targets = std::mem::take(&mut self.all_targets);
        *self = Self::from_generated(all_targets, self.config.clone(), generated);
        debug!(skipped = self.skipped.len(), "regenerated word search");
        Ok(())
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Playable targets: those placed in this grid.
    #[must_use]
    pub fn targets(&self) -> &[TargetWord] {
        &self.targets
    }

    /// Ids that could not be placed and are not part of this puzzle.
    #[must_use]
    pub fn skipped(&self) -> &[String] {
        &self.skipped
    }

    #[must_use]
    pub fn found(&self) -> &FoundWords {
        &self.found
    }

    /// True when every playable target has been found.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.found.len() == self.targets.len()
    }

    /// Resolve a finished selection and record a new find.
    ///
    /// Returns the target newly found, `None` if the line spells nothing new.
    /// The drawn line is kept as the find's location, whichever copy of the
    /// word it covers.
    pub fn select(&mut self, selection: Selection) -> PuzzleResult<Option<&TargetWord>> {
        let run = resolve_selection(&self.grid, selection.start, selection.end)?;
        let Some(index) = match_target(&run, &self.targets, &self.found)
            .and_then(|t| self.targets.iter().position(|o| o.id == t.id))
        else {
            return Ok(None);
        };
        let Some(drawn) = selection.placement() else {
            return Ok(None);
        };

        let target = &self.targets[index];
        self.found.insert(&target.id);
        self.found_at.insert(target.id.clone(), drawn);
        debug!(word = %target.id, found = self.found.len(), "found word");
        if self.found.len() == self.targets.len() {
            info!(words = self.targets.len(), "word search complete");
        }
        Ok(Some(target))
    }

    /// Cells covered by a playable target: where it was found, or where it
    /// was placed if it is still hidden.
    pub fn cells_of(&self, id: &str) -> PuzzleResult<Vec<Cell>> {
        self.found_at
            .get(id)
            .or_else(|| self.placements.get(id))
            .map(|p| p.cells(self.grid.size()))
            .ok_or_else(|| PuzzleError::UnknownTarget(id.to_string()))
    }

    /// Found word covering `cell`, for colouring it. Earlier finds win
    /// where words overlap.
    #[must_use]
    pub fn found_word_at(&self, cell: Cell) -> Option<&TargetWord> {
        let size = self.grid.size();
        let id = self
            .found
            .iter()
            .find(|id| self.found_at.get(*id).is_some_and(|p| p.contains(cell, size)))?;
        self.targets.iter().find(|t| t.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> Grid {
        Grid::from_rows(&["CATX", "QOZY", "PRGB", "DOGS"]).unwrap()
    }

    fn targets() -> Vec<TargetWord> {
        vec![
            TargetWord::new("CAT", "Cat", "red"),
            TargetWord::new("DOGS", "Dogs", "blue"),
            TargetWord::new("BIRD", "Bird", "green"),
        ]
    }

    #[test]
    fn test_found_words_monotonic() {
        let mut found = FoundWords::new();
        assert!(found.insert("CAT"));
        assert!(!found.insert("CAT"));
        assert!(found.insert("DOG"));
        assert_eq!(found.iter().collect::<Vec<_>>(), vec!["CAT", "DOG"]);
    }

    #[test]
    fn test_from_grid_skips_missing() {
        let puzzle = WordSearch::from_grid(grid(), targets()).unwrap();
        assert_eq!(puzzle.targets().len(), 2);
        assert_eq!(puzzle.skipped(), &["BIRD".to_string()]);
    }

    #[test]
    fn test_select_and_complete() {
        let mut puzzle = WordSearch::from_grid(grid(), targets()).unwrap();

        let hit = puzzle.select(Selection::new(Cell::new(0, 2), Cell::new(0, 0))).unwrap();
        assert_eq!(hit.map(|t| t.id.as_str()), Some("CAT"));
        assert!(!puzzle.is_complete());

        let again = puzzle.select(Selection::new(Cell::new(0, 0), Cell::new(0, 2))).unwrap();
        assert!(again.is_none());

        assert!(puzzle.select(Selection::new(Cell::new(3, 0), Cell::new(3, 3))).unwrap().is_some());
        assert!(puzzle.is_complete());
    }

    #[test]
    fn test_select_rejects_bent_line() {
        let mut puzzle = WordSearch::from_grid(grid(), targets()).unwrap();
        assert!(puzzle.select(Selection::new(Cell::new(0, 0), Cell::new(2, 1))).is_err());
        assert!(puzzle.found().is_empty());
    }

    #[test]
    fn test_found_word_at() {
        let mut puzzle = WordSearch::from_grid(grid(), targets()).unwrap();
        assert!(puzzle.found_word_at(Cell::new(0, 1)).is_none());

        puzzle.select(Selection::new(Cell::new(0, 0), Cell::new(0, 2))).unwrap();
        let colour = puzzle.found_word_at(Cell::new(0, 1)).map(|t| t.color_tag.as_str());
        assert_eq!(colour, Some("red"));
        assert!(puzzle.found_word_at(Cell::new(3, 3)).is_none());
    }

    #[test]
    fn test_found_word_at_follows_drawn_copy() {
        let grid = Grid::from_rows(&["CAT", "ZZZ", "CAT"]).unwrap();
        let mut puzzle =
            WordSearch::from_grid(grid, vec![TargetWord::new("CAT", "Cat", "red")]).unwrap();

        let hit = puzzle.select(Selection::new(Cell::new(2, 0), Cell::new(2, 2))).unwrap();
        assert_eq!(hit.map(|t| t.id.as_str()), Some("CAT"));

        assert_eq!(puzzle.found_word_at(Cell::new(2, 1)).map(|t| t.id.as_str()), Some("CAT"));
        assert!(puzzle.found_word_at(Cell::new(0, 1)).is_none());
        assert_eq!(
            puzzle.cells_of("CAT").unwrap(),
            vec![Cell::new(2, 0), Cell::new(2, 1), Cell::new(2, 2)]
        );
    }

    #[test]
    fn test_found_word_at_backwards_selection() {
        let mut puzzle = WordSearch::from_grid(grid(), targets()).unwrap();
        puzzle.select(Selection::new(Cell::new(3, 3), Cell::new(3, 0))).unwrap();
        for col in 0..4 {
            let hit = puzzle.found_word_at(Cell::new(3, col)).map(|t| t.id.as_str());
            assert_eq!(hit, Some("DOGS"));
        }
    }

    #[test]
    fn test_cells_of() {
        let puzzle = WordSearch::from_grid(grid(), targets()).unwrap();
        assert_eq!(
            puzzle.cells_of("DOGS").unwrap(),
            vec![Cell::new(3, 0), Cell::new(3, 1), Cell::new(3, 2), Cell::new(3, 3)]
        );
        assert_eq!(puzzle.cells_of("BIRD"), Err(PuzzleError::UnknownTarget("BIRD".into())));
    }

    #[test]
    fn test_regenerate_resets_progress() {
        let mut rng = PuzzleRng::new(11);
        let config = WordSearchConfig::default().with_grid_size(8);
        let mut puzzle = WordSearch::new(targets(), config, &mut rng).unwrap();

        let cat = puzzle.cells_of("CAT").unwrap();
        puzzle.select(Selection::new(cat[0], cat[2])).unwrap();
        assert_eq!(puzzle.found().len(), 1);

        puzzle.regenerate(&mut rng).unwrap();
        assert!(puzzle.found().is_empty());
        assert_eq!(puzzle.targets().len() + puzzle.skipped().len(), 3);
    }
}
