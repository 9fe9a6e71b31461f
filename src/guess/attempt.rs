//! One play-through of a guessing puzzle.
//!
//! `Attempt` is a value: `submit` leaves the receiver untouched and returns
//! the next snapshot. History is an `im::Vector`, so snapshots share
//! structure and cloning is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::hints::KeyboardHints;
use super::status::{score, LetterStatus, Score};
use crate::core::{normalize_word, GuessConfig, PuzzleError, PuzzleResult};

/// Progress of an attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttemptStatus {
    /// Guesses are still accepted.
    Playing,
    /// A guess matched the word.
    Won,
    /// The attempt limit was reached without a match.
    Lost,
}

impl std::fmt::Display for AttemptStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AttemptStatus::Playing => "playing",
            AttemptStatus::Won => "won",
            AttemptStatus::Lost => "lost",
        };
        f.write_str(name)
    }
}

/// An accepted guess and its score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    /// Normalized (uppercase) guess.
    pub word: String,
    /// Status per position.
    pub statuses: Score,
}

impl GuessRecord {
    /// Letters paired with their statuses, for drawing a tile row.
    pub fn tiles(&self) -> impl Iterator<Item = (char, LetterStatus)> + '_ {
        self.word.chars().zip(self.statuses.iter().copied())
    }
}

/// Attempt state: puzzle word, guess history, hints and status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attempt {
    word: String,
    config: GuessConfig,
    history: Vector<GuessRecord>,
    hints: KeyboardHints,
    status: AttemptStatus,
}

impl Attempt {
    /// Start an attempt at `word`.
    ///
    /// The word is upper-cased and must be `config.word_length` letters.
    pub fn new(word: &str, config: GuessConfig) -> PuzzleResult<Self> {
        config.validate()?;
        let word = normalize_word(word)?;
        let length = word.chars().count();
        if length != config.word_length {
            return Err(PuzzleError::LengthMismatch {
                expected: config.word_length,
                actual: length,
            });
        }

        Ok(Self {
            word,
            config,
            history: Vector::new(),
            hints: KeyboardHints::new(),
            status: AttemptStatus::Playing,
        })
    }

    /// Submit a guess, returning the next snapshot.
    ///
    /// Rejections (`AttemptFinished`, `LengthMismatch`, `NonAlphabetic`)
    /// leave history and status exactly as they were.
    ///
    /// ```
    /// use word_puzzles::core::GuessConfig;
    /// use word_puzzles::guess::{Attempt, AttemptStatus};
    ///
    /// let attempt = Attempt::new("VENUS", GuessConfig::default()).unwrap();
    /// let attempt = attempt.submit("venus").unwrap();
    /// assert_eq!(attempt.status(), AttemptStatus::Won);
    /// ```
    pub fn submit(&self, guess: &str) -> PuzzleResult<Self> {
        if self.status != AttemptStatus::Playing {
            return Err(PuzzleError::AttemptFinished { status: self.status });
        }

        let actual = guess.chars().count();
        if actual != self.config.word_length {
            debug!(expected = self.config.word_length, actual, "rejected guess: length mismatch");
            return Err(PuzzleError::LengthMismatch {
                expected: self.config.word_length,
                actual,
            });
        }
        let guess = normalize_word(guess)?;
        let statuses = score(&guess, &self.word)?;

        let mut next = self.clone();
        next.hints.record(&guess, &statuses);
        let solved = guess == next.word;
        next.history.push_back(GuessRecord { word: guess, statuses });

        if solved {
            next.status = AttemptStatus::Won;
        } else if next.history.len() >= next.config.max_attempts {
            next.status = AttemptStatus::Lost;
        }

        if next.status != AttemptStatus::Playing {
            debug!(status = %next.status, guesses = next.history.len(), "attempt finished");
        }
        Ok(next)
    }

    /// Current status.
    #[must_use]
    pub fn status(&self) -> AttemptStatus {
        self.status
    }

    /// True once won or lost.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status != AttemptStatus::Playing
    }

    /// Accepted guesses, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<GuessRecord> {
        &self.history
    }

    /// Keyboard hint state.
    #[must_use]
    pub fn hints(&self) -> &KeyboardHints {
        &self.hints
    }

    /// Guesses used so far.
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.history.len()
    }

    /// Guesses left before the attempt is lost.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.config.max_attempts.saturating_sub(self.history.len())
    }

    /// Configuration this attempt runs under.
    #[must_use]
    pub fn config(&self) -> GuessConfig {
        self.config
    }

    /// The puzzle word, only once the attempt is over.
    #[must_use]
    pub fn answer_if_finished(&self) -> Option<&str> {
        self.is_finished().then_some(self.word.as_str())
    }
}
