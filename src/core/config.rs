//! Engine configuration types.
//!
//! Callers configure each engine up front:
//! - `GuessConfig`: word length and attempt limit for the guessing game
//! - `WordSearchConfig`: grid size, placement budget, optional diagonal bias
//!
//! Defaults reproduce the reference experience (5 letters, 5 attempts,
//! 14x14 grid, 200 placement tries).

use serde::{Deserialize, Serialize};

use super::error::{PuzzleError, PuzzleResult};
use super::letters::{ensure_uppercase, ALPHABET};

/// Guessing game configuration, constant for one attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessConfig {
    /// Letters per word and per guess (>= 1).
    pub word_length: usize,

    /// Guesses allowed before the attempt is lost (>= 1).
    pub max_attempts: usize,
}

impl Default for GuessConfig {
    fn default() -> Self {
        Self {
            word_length: 5,
            max_attempts: 5,
        }
    }
}

impl GuessConfig {
    /// Set the word length.
    #[must_use]
    pub fn with_word_length(mut self, length: usize) -> Self {
        self.word_length = length;
        self
    }

    /// Set the attempt limit.
    #[must_use]
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Check both values are at least 1.
    pub fn validate(&self) -> PuzzleResult<()> {
        if self.word_length == 0 {
            return Err(PuzzleError::InvalidConfig("word_length must be at least 1".into()));
        }
        if self.max_attempts == 0 {
            return Err(PuzzleError::InvalidConfig("max_attempts must be at least 1".into()));
        }
        Ok(())
    }
}

/// Steers one word toward the two down-diagonals during placement.
///
/// On each try, with `probability` the direction is drawn from
/// `(1, 1)` and `(1, -1)`; otherwise it is drawn from all eight.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiagonalBias {
    /// Target id the bias applies to.
    pub word: String,

    /// Chance per try of forcing a diagonal (0.0..=1.0).
    pub probability: f64,
}

impl DiagonalBias {
    /// Bias `word` with the reference probability of 0.7.
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            probability: 0.7,
        }
    }

    /// Set the per-try probability.
    #[must_use]
    pub fn with_probability(mut self, probability: f64) -> Self {
        self.probability = probability;
        self
    }
}

/// Word-search generation configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WordSearchConfig {
    /// Side length of the square grid.
    pub grid_size: usize,

    /// Random placements tried per word before it is skipped.
    pub max_placement_tries: u32,

    /// Optional diagonal preference for a single word.
    pub diagonal_bias: Option<DiagonalBias>,

    /// Letters used to fill cells no word occupies.
    pub alphabet: String,
}

impl Default for WordSearchConfig {
    fn default() -> Self {
        Self {
            grid_size: 14,
            max_placement_tries: 200,
            diagonal_bias: None,
            alphabet: ALPHABET.to_string(),
        }
    }
}

impl WordSearchConfig {
    /// Set the grid size.
    #[must_use]
    pub fn with_grid_size(mut self, size: usize) -> Self {
        self.grid_size = size;
        self
    }

    /// Set the per-word placement budget.
    #[must_use]
    pub fn with_max_placement_tries(mut self, tries: u32) -> Self {
        self.max_placement_tries = tries;
        self
    }

    /// Bias one word toward diagonal placement.
    #[must_use]
    pub fn with_diagonal_bias(mut self, bias: DiagonalBias) -> Self {
        self.diagonal_bias = Some(bias);
        self
    }

    /// Replace the fill alphabet.
    #[must_use]
    pub fn with_alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    /// Check the grid is non-empty, the fill alphabet is usable and the
    /// bias probability is in range.
    pub fn validate(&self) -> PuzzleResult<()> {
        if self.grid_size == 0 {
            return Err(PuzzleError::InvalidConfig("grid_size must be at least 1".into()));
        }
        ensure_uppercase(&self.alphabet)
            .map_err(|_| PuzzleError::InvalidConfig("alphabet must be non-empty A-Z".into()))?;
        if let Some(bias) = &self.diagonal_bias {
            if !(0.0..=1.0).contains(&bias.probability) {
                return Err(PuzzleError::InvalidConfig(format!(
                    "diagonal bias probability {} outside 0..=1",
                    bias.probability
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_defaults() {
        let config = GuessConfig::default();
        assert_eq!(config.word_length, 5);
        assert_eq!(config.max_attempts, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_guess_validate_rejects_zero() {
        assert!(GuessConfig::default().with_word_length(0).validate().is_err());
        assert!(GuessConfig::default().with_max_attempts(0).validate().is_err());
    }

    #[test]
    fn test_word_search_builder() {
        let config = WordSearchConfig::default()
            .with_grid_size(10)
            .with_max_placement_tries(50)
            .with_diagonal_bias(DiagonalBias::new("BEAUTIFUL").with_probability(0.5));

        assert_eq!(config.grid_size, 10);
        assert_eq!(config.max_placement_tries, 50);
        assert_eq!(config.diagonal_bias.as_ref().map(|b| b.probability), Some(0.5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_word_search_validate() {
        assert!(WordSearchConfig::default().with_grid_size(0).validate().is_err());
        assert!(WordSearchConfig::default().with_alphabet("").validate().is_err());
        assert!(WordSearchConfig::default().with_alphabet("abc").validate().is_err());
        assert!(WordSearchConfig::default()
            .with_diagonal_bias(DiagonalBias::new("X").with_probability(1.5))
            .validate()
            .is_err());
    }

    #[test]
    fn test_serialization() {
        let config = WordSearchConfig::default().with_diagonal_bias(DiagonalBias::new("BEAUTIFUL"));
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: WordSearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
