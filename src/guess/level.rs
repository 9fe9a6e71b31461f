//! A run through an ordered list of guessing levels.
//!
//! `LevelRun` holds the caller-side state the presentation layer needs
//! between key presses: the current level, its attempt and the draft being
//! typed. Each level starts with empty history and fresh hints. A lost
//! level still advances; the answer is revealed instead.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::attempt::{Attempt, AttemptStatus};
use super::draft::Draft;
use crate::core::{GuessConfig, PuzzleError, PuzzleResult};

/// One guessing puzzle definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Level {
    /// Puzzle word.
    pub word: String,
    /// Clue shown above the grid.
    pub hint: String,
}

impl Level {
    pub fn new(word: impl Into<String>, hint: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            hint: hint.into(),
        }
    }
}

/// Outcome of `LevelRun::advance`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunProgress {
    /// Moved on to the level at this index.
    NextLevel(usize),
    /// The last level is finished.
    Complete,
}

/// Sequential play through a list of levels.
#[derive(Clone, Debug)]
pub struct LevelRun {
    levels: Vec<Level>,
    config: GuessConfig,
    index: usize,
    attempt: Attempt,
    draft: Draft,
    results: Vec<AttemptStatus>,
    complete: bool,
}

impl LevelRun {
    /// Start at the first level. Every level word is validated up front.
    pub fn new(levels: Vec<Level>, config: GuessConfig) -> PuzzleResult<Self> {
        let first = levels
            .first()
            .ok_or_else(|| PuzzleError::InvalidConfig("level list is empty".into()))?;
        let attempt = Attempt::new(&first.word, config)?;
        for level in &levels[1..] {
            Attempt::new(&level.word, config)?;
        }

        Ok(Self {
            levels,
            config,
            index: 0,
            attempt,
            draft: Draft::new(config.word_length),
            results: Vec::new(),
            complete: false,
        })
    }

    /// Current level definition.
    #[must_use]
    pub fn level(&self) -> &Level {
        &self.levels[self.index]
    }

    /// Attempt for the current level.
    #[must_use]
    pub fn attempt(&self) -> &Attempt {
        &self.attempt
    }

    /// Letters typed for the next guess.
    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// `(1-based level, total levels)`.
    #[must_use]
    pub fn progress(&self) -> (usize, usize) {
        (self.index + 1, self.levels.len())
    }

    /// Status of each finished level, in order.
    #[must_use]
    pub fn results(&self) -> &[AttemptStatus] {
        &self.results
    }

    /// True once the last level has been advanced past.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Type a letter. Ignored once the attempt is over or the draft is full.
    pub fn type_letter(&mut self, ch: char) -> PuzzleResult<bool> {
        if self.attempt.is_finished() {
            return Ok(false);
        }
        self.draft.push(ch)
    }

    /// Delete the last typed letter.
    pub fn delete_letter(&mut self) -> Option<char> {
        if self.attempt.is_finished() {
            return None;
        }
        self.draft.pop()
    }

    /// Submit the draft.
    ///
    /// On rejection the draft is kept so the player can fix it.
    pub fn enter(&mut self) -> PuzzleResult<AttemptStatus> {
        self.attempt = self.attempt.submit(self.draft.as_str())?;
        self.draft.clear();
        if self.attempt.is_finished() {
            self.results.push(self.attempt.status());
        }
        Ok(self.attempt.status())
    }

    /// Move to the next level once the current attempt is won or lost.
    pub fn advance(&mut self) -> PuzzleResult<RunProgress> {
        if self.complete {
            return Ok(RunProgress::Complete);
        }
        if !self.attempt.is_finished() {
            return Err(PuzzleError::AttemptInProgress);
        }

        if self.index + 1 >= self.levels.len() {
            self.complete = true;
            info!(levels = self.levels.len(), "level run complete");
            return Ok(RunProgress::Complete);
        }

        self.index += 1;
        self.attempt = Attempt::new(&self.levels[self.index].word, self.config)?;
        self.draft.clear();
        debug!(level = self.index + 1, "advanced to next level");
        Ok(RunProgress::NextLevel(self.index))
    }
}
